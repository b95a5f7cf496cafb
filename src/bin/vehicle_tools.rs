//! Adaptador de herramientas para agentes
//!
//! Publica `create_vehicle`, `list_vehicles`, `get_vehicle`, `update_vehicle`
//! y `delete_vehicle` como servidor MCP y las reenvía a la API de inventario.

use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::info;

use apex_auto_inventory::clients::InventoryApiClient;
use apex_auto_inventory::config::ToolsConfig;
use apex_auto_inventory::server::{init_tracing, shutdown_signal};
use apex_auto_inventory::tools::{create_tools_router, TOOL_NAMES};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing("info,rmcp=warn");

    let config = ToolsConfig::from_env().context("Configuración del adaptador inválida")?;
    let app = create_tools_router(InventoryApiClient::new(config.api_url.clone()));

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    info!("🔧 Apex Auto MCP escuchando en http://{}/mcp", addr);
    info!("   Reenviando a {}", config.api_url);
    info!("   Herramientas: {}", TOOL_NAMES.join(", "));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("No se pudo abrir {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Adaptador terminado");
    Ok(())
}
