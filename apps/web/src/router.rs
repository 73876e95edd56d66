use std::sync::Arc;

use axum::response::Redirect;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::services::ServeDir;

use booking_cell::router::turno_routes;
use shared_config::AppConfig;
use shared_models::AppError;
use specialty_cell::router::especialidad_routes;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/turnos") }))
        .route("/health", get(|| async { Json(json!({"status": "ok"})) }))
        .nest("/turnos", turno_routes(state.clone()))
        .nest("/especialidades", especialidad_routes(state))
        .nest_service("/static", ServeDir::new("apps/web/static"))
        .fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::NotFound("Página no encontrada".to_string())
}
