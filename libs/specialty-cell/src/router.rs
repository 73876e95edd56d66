use axum::routing::{delete, get, post};
use axum::Router;
use shared_config::AppConfig;
use std::sync::Arc;

use crate::handlers::{
    cerrar_modal, confirmar_baja, eliminar, especialidades_page, form_fragment, guardar,
    tabla_fragment,
};

pub fn especialidad_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(especialidades_page))
        .route("/_tabla", get(tabla_fragment))
        .route("/_form", get(form_fragment))
        .route("/_confirmar_baja/{id}", get(confirmar_baja))
        .route("/_cerrar", get(cerrar_modal))
        .route("/guardar", post(guardar))
        .route("/{id}", delete(eliminar))
        .with_state(state)
}
