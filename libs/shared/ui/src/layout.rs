use maud::{html, Markup, DOCTYPE};

/// Page shell shared by every screen: htmx, stylesheet, nav, the global
/// loading indicator and the toast region. `flash` lets a full page render
/// carry a toast from the start (load failures on first paint).
///
/// `hx-indicator` is set once on the body, so every htmx request in any
/// fragment shows the spinner while in flight and htmx removes it again on
/// success, failure or abort.
pub fn page(titulo: &str, contenido: Markup, flash: Option<Markup>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (titulo) " · Turnero" }
                link rel="stylesheet" href="/static/style.css";
                link rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";
                script src="https://unpkg.com/htmx.org@1.9.12" {}
            }
            body hx-indicator="#loading" {
                nav class="navbar" {
                    span class="brand" { "Turnero" }
                    div class="nav-links" {
                        a href="/turnos" { "Turnos" }
                        a href="/especialidades" { "Especialidades" }
                    }
                }
                main class="container" {
                    (contenido)
                }
                div id="loading" class="htmx-indicator" {
                    div class="spinner" {}
                }
                div id="toasts" {
                    @if let Some(toast) = flash {
                        (toast)
                    }
                }
            }
        }
    }
}
