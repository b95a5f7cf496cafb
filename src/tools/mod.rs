//! Adaptador de herramientas
//!
//! Republica las cinco operaciones del inventario como herramientas MCP
//! (streamable HTTP en `/mcp`), reenviándolas a la API HTTP.

pub mod params;
pub mod service;

use axum::Router;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};
use tower_http::trace::TraceLayer;

use crate::clients::InventoryApiClient;

pub use service::{VehicleTools, SERVER_NAME, TOOL_NAMES};

/// Router con el endpoint MCP; cada sesión obtiene su propio `VehicleTools`
pub fn create_tools_router(client: InventoryApiClient) -> Router {
    let service = StreamableHttpService::new(
        move || Ok(VehicleTools::new(client.clone())),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    Router::new()
        .nest_service("/mcp", service)
        .layer(TraceLayer::new_for_http())
}
