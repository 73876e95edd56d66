use maud::{html, Markup};

use shared_models::Especialidad;
use shared_ui::{modal, modal_close_button};

const CERRAR_URL: &str = "/especialidades/_cerrar";
const MODAL_TARGET: &str = "#modal-especialidad";

/// Body of the admin screen. The table container has a stable id so
/// mutating responses can refresh it out-of-band.
pub fn pagina(tabla: Markup) -> Markup {
    html! {
        div class="page-header" {
            h2 { "Especialidades" }
            div class="page-actions" {
                button class="btn btn-secondary"
                    hx-get="/especialidades/_tabla"
                    hx-target="#tabla-especialidades-container" {
                    i class="fas fa-rotate" {} " Actualizar"
                }
                button id="btn-nueva-especialidad" class="btn btn-primary"
                    hx-get="/especialidades/_form"
                    hx-target=(MODAL_TARGET) {
                    i class="fas fa-plus" {} " Nueva Especialidad"
                }
            }
        }
        div id="tabla-especialidades-container" {
            (tabla)
        }
        div id="modal-especialidad" {}
    }
}

/// Out-of-band replacement of the table container, for responses whose main
/// body goes somewhere else (the modal).
pub fn tabla_container_oob(tabla: Markup) -> Markup {
    html! {
        div id="tabla-especialidades-container" hx-swap-oob="true" {
            (tabla)
        }
    }
}

pub fn tabla(especialidades: &[Especialidad]) -> Markup {
    html! {
        table class="data-table" {
            thead {
                tr {
                    th { "ID" }
                    th { "Nombre" }
                    th { "Descripción" }
                    th { "Acciones" }
                }
            }
            tbody id="especialidades-tbody" {
                @if especialidades.is_empty() {
                    tr {
                        td colspan="4" class="fila-vacia" { "No hay especialidades registradas" }
                    }
                } @else {
                    @for esp in especialidades {
                        tr {
                            td { (esp.id) }
                            td { strong { (esp.nombre) } }
                            td {
                                @match &esp.descripcion {
                                    Some(descripcion) => { (descripcion) }
                                    None => { em class="text-muted" { "Sin descripción" } }
                                }
                            }
                            td {
                                div class="actions" {
                                    button class="btn-icon btn-edit" title="Editar"
                                        hx-get={ "/especialidades/_form?id=" (esp.id) }
                                        hx-target=(MODAL_TARGET) {
                                        i class="fas fa-edit" {}
                                    }
                                    button class="btn-icon btn-delete" title="Eliminar"
                                        hx-get={ "/especialidades/_confirmar_baja/" (esp.id) }
                                        hx-target=(MODAL_TARGET) {
                                        i class="fas fa-trash" {}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn tabla_error() -> Markup {
    html! {
        table class="data-table" {
            thead {
                tr {
                    th { "ID" }
                    th { "Nombre" }
                    th { "Descripción" }
                    th { "Acciones" }
                }
            }
            tbody id="especialidades-tbody" {
                tr {
                    td colspan="4" class="fila-error" { "Error al cargar especialidades" }
                }
            }
        }
    }
}

/// Modal form, shared by create and edit mode. The hidden id field is the
/// whole edit state: present means update that record, absent means create.
pub fn form_modal(id: Option<i64>, nombre: &str, descripcion: &str) -> Markup {
    let titulo = if id.is_some() {
        "Editar Especialidad"
    } else {
        "Nueva Especialidad"
    };

    modal(html! {
        form id="form-especialidad" hx-post="/especialidades/guardar" hx-target=(MODAL_TARGET) {
            header class="modal-header" {
                h3 id="especialidad-modal-titulo" { (titulo) }
                (modal_close_button(CERRAR_URL, MODAL_TARGET))
            }
            @if let Some(id) = id {
                input type="hidden" name="id" value=(id);
            }
            div class="form-group" {
                label for="especialidad-nombre" { "Nombre" }
                input type="text" id="especialidad-nombre" name="nombre" value=(nombre)
                    required maxlength="120";
            }
            div class="form-group" {
                label for="especialidad-descripcion" { "Descripción" }
                textarea id="especialidad-descripcion" name="descripcion" rows="3" {
                    (descripcion)
                }
            }
            footer class="modal-footer" {
                button type="button" class="btn btn-secondary"
                    hx-get=(CERRAR_URL) hx-target=(MODAL_TARGET) { "Cancelar" }
                button type="submit" class="btn btn-primary" { "Guardar" }
            }
        }
    })
}

/// Delete confirmation dialog. Cancelling only closes the modal; the delete
/// request exists solely on the confirm button.
pub fn confirmar_baja_modal(especialidad: &Especialidad) -> Markup {
    modal(html! {
        div class="confirm-dialog" {
            header class="modal-header" {
                h3 { "Eliminar especialidad" }
                (modal_close_button(CERRAR_URL, MODAL_TARGET))
            }
            p {
                "¿Está seguro de eliminar la especialidad \""
                strong { (especialidad.nombre) }
                "\"?"
            }
            p class="text-muted" {
                "Esta acción no se puede deshacer y fallará si hay médicos asociados."
            }
            footer class="modal-footer" {
                button type="button" class="btn btn-secondary"
                    hx-get=(CERRAR_URL) hx-target=(MODAL_TARGET) { "Cancelar" }
                button type="button" class="btn btn-danger"
                    hx-delete={ "/especialidades/" (especialidad.id) }
                    hx-target=(MODAL_TARGET) {
                    "Eliminar"
                }
            }
        }
    })
}
