use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

/// Transient notification. Lifetime is handled in CSS: the toast fades out
/// on its own a few seconds after being swapped in.
pub fn toast(mensaje: &str, kind: ToastKind) -> Markup {
    html! {
        div class={ "toast " (kind.class()) } { (mensaje) }
    }
}

/// Out-of-band variant: prepends the toast to the page's `#toasts` region
/// regardless of what the main response targets.
pub fn toast_oob(mensaje: &str, kind: ToastKind) -> Markup {
    html! {
        div class={ "toast " (kind.class()) } hx-swap-oob="afterbegin:#toasts" { (mensaje) }
    }
}

/// The one modal shell. It is rendered into a per-screen container element;
/// an empty container means closed, so closing is just swapping the
/// container empty. The same convention dismisses the modal automatically
/// when a mutating response refreshes a table: that response swaps the
/// refreshed table out-of-band together with an empty modal container.
pub fn modal(contenido: Markup) -> Markup {
    html! {
        div class="modal open" {
            div class="modal-dialog" {
                (contenido)
            }
        }
    }
}

/// Corner close button for modal content. `cerrar_url` must answer with an
/// empty body; `target` is the screen's modal container.
pub fn modal_close_button(cerrar_url: &str, target: &str) -> Markup {
    html! {
        button type="button" class="modal-close" hx-get=(cerrar_url) hx-target=(target) {
            "×"
        }
    }
}
