use axum::routing::{get, post};
use axum::Router;
use shared_config::AppConfig;
use std::sync::Arc;

use crate::handlers::{
    calendario_fragment, confirmar_fragment, confirmar_turno, medicos_fragment, turnos_page,
};

pub fn turno_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(turnos_page))
        .route("/_medicos", get(medicos_fragment))
        .route("/_calendario", get(calendario_fragment))
        .route("/_confirmar", get(confirmar_fragment))
        .route("/confirmar", post(confirmar_turno))
        .with_state(state)
}
