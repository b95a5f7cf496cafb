//! Rutas HTTP
//!
//! Ensambla el router completo de la API de inventario.

pub mod vehicle_routes;

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Crear el router de la API con las capas de CORS y trazas
pub fn create_app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(vehicle_routes::create_vehicle_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check simple
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "apex-auto-inventory",
        "storage": state.storage.to_string(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
