use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Form;
use maud::{html, Markup};
use serde::Deserialize;

use shared_api::ApiError;
use shared_config::AppConfig;
use shared_models::EspecialidadPayload;
use shared_ui::{page, toast, toast_oob, ToastKind};

use crate::services::especialidades::{EspecialidadService, GuardarResultado};
use crate::views;

#[derive(Debug, Deserialize)]
pub struct FormQuery {
    pub id: Option<i64>,
}

/// Form body of the specialty modal. `id` is only present when the form was
/// opened in edit mode; the create form omits the hidden field entirely.
#[derive(Debug, Deserialize)]
pub struct EspecialidadForm {
    pub id: Option<i64>,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
}

#[axum::debug_handler]
pub async fn especialidades_page(State(state): State<Arc<AppConfig>>) -> Markup {
    let service = EspecialidadService::new(&state);

    let (tabla, flash) = match service.listar().await {
        Ok(especialidades) => (views::tabla(&especialidades), None),
        Err(err) => {
            tracing::error!("Failed to load especialidades: {}", err);
            let flash = toast("Error al cargar especialidades", ToastKind::Error);
            (views::tabla_error(), Some(flash))
        }
    };

    page("Especialidades", views::pagina(tabla), flash)
}

#[axum::debug_handler]
pub async fn tabla_fragment(State(state): State<Arc<AppConfig>>) -> Markup {
    let service = EspecialidadService::new(&state);

    match service.listar().await {
        Ok(especialidades) => views::tabla(&especialidades),
        Err(err) => {
            tracing::error!("Failed to load especialidades: {}", err);
            let aviso = toast_oob("Error al cargar especialidades", ToastKind::Error);
            html! {
                (views::tabla_error())
                (aviso)
            }
        }
    }
}

#[axum::debug_handler]
pub async fn form_fragment(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<FormQuery>,
) -> Markup {
    let Some(id) = query.id else {
        return views::form_modal(None, "", "");
    };

    let service = EspecialidadService::new(&state);
    match service.obtener(id).await {
        Ok(especialidad) => views::form_modal(
            Some(especialidad.id),
            &especialidad.nombre,
            especialidad.descripcion.as_deref().unwrap_or(""),
        ),
        Err(err) => obtener_fallido(id, &err),
    }
}

#[axum::debug_handler]
pub async fn guardar(
    State(state): State<Arc<AppConfig>>,
    Form(form): Form<EspecialidadForm>,
) -> Markup {
    let service = EspecialidadService::new(&state);
    let payload = EspecialidadPayload::from_form(&form.nombre, &form.descripcion);

    match service.guardar(form.id, &payload).await {
        Ok(resultado) => {
            let mensaje = match resultado {
                GuardarResultado::Creada(_) => "Especialidad creada correctamente",
                GuardarResultado::Actualizada(_) => "Especialidad actualizada correctamente",
            };
            // Empty main body closes the modal; the table and toast ride along
            // out-of-band.
            let tabla = tabla_refrescada_oob(&service).await;
            html! {
                (tabla)
                (toast_oob(mensaje, ToastKind::Success))
            }
        }
        Err(err) => {
            tracing::error!("Failed to save especialidad: {}", err);
            let mensaje = err.message_or("Error al guardar la especialidad");
            // Re-render the form with the submitted values so nothing typed
            // is lost; the modal stays open.
            html! {
                (views::form_modal(form.id, &form.nombre, &form.descripcion))
                (toast_oob(&mensaje, ToastKind::Error))
            }
        }
    }
}

#[axum::debug_handler]
pub async fn confirmar_baja(
    State(state): State<Arc<AppConfig>>,
    Path(id): Path<i64>,
) -> Markup {
    let service = EspecialidadService::new(&state);

    match service.obtener(id).await {
        Ok(especialidad) => views::confirmar_baja_modal(&especialidad),
        Err(err) => obtener_fallido(id, &err),
    }
}

#[axum::debug_handler]
pub async fn eliminar(State(state): State<Arc<AppConfig>>, Path(id): Path<i64>) -> Markup {
    let service = EspecialidadService::new(&state);

    match service.eliminar(id).await {
        Ok(()) => {
            let tabla = tabla_refrescada_oob(&service).await;
            html! {
                (tabla)
                (toast_oob("Especialidad eliminada correctamente", ToastKind::Success))
            }
        }
        Err(err) => {
            tracing::error!("Failed to delete especialidad {}: {}", id, err);
            let mensaje = err.message_or("Error al eliminar la especialidad");
            toast_oob(&mensaje, ToastKind::Error)
        }
    }
}

/// Swapped into the modal container, so an empty body closes whatever dialog
/// is open.
#[axum::debug_handler]
pub async fn cerrar_modal() -> Markup {
    html! {}
}

/// Refresh of the table container after a mutation. If the relist itself
/// fails, the container shows the error row and a toast reports it.
async fn tabla_refrescada_oob(service: &EspecialidadService) -> Markup {
    match service.listar().await {
        Ok(especialidades) => views::tabla_container_oob(views::tabla(&especialidades)),
        Err(err) => {
            tracing::error!("Failed to refresh especialidades table: {}", err);
            html! {
                (views::tabla_container_oob(views::tabla_error()))
                (toast_oob("Error al cargar especialidades", ToastKind::Error))
            }
        }
    }
}

/// Both modal loaders fetch the record first; if that fails the modal stays
/// closed and a toast reports why.
fn obtener_fallido(id: i64, err: &ApiError) -> Markup {
    tracing::error!("Failed to load especialidad {}: {}", id, err);
    let mensaje = if err.is_not_found() {
        "Especialidad no encontrada".to_string()
    } else {
        err.message_or("Error al cargar la especialidad")
    };
    toast_oob(&mensaje, ToastKind::Error)
}
