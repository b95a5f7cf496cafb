use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use apex_auto_inventory::config::{DatabaseConfig, EnvironmentConfig, StorageBackend};
use apex_auto_inventory::database::DatabaseConnection;
use apex_auto_inventory::middleware::cors_middleware;
use apex_auto_inventory::repositories::{InMemoryVehicleRepository, VehicleRepository, VehicleStore};
use apex_auto_inventory::routes::create_app;
use apex_auto_inventory::server::{init_tracing, shutdown_signal};
use apex_auto_inventory::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env().context("Configuración de entorno inválida")?;

    // sqlx emite las sentencias por `log`; se dejan pasar solo si se pidió registrarlas
    let database_config = match config.storage {
        StorageBackend::Postgres => Some(
            DatabaseConfig::from_env(config.is_development())
                .context("Configuración de base de datos inválida")?,
        ),
        StorageBackend::Memory => None,
    };
    let log_statements = database_config
        .as_ref()
        .map(|db| db.log_statements != log::LevelFilter::Off)
        .unwrap_or(false);
    init_tracing(if log_statements {
        "info,sqlx=trace"
    } else {
        "info,sqlx=warn"
    });

    info!("🚗 Apex Auto Inventory - API de inventario de vehículos");
    info!("================================================");

    let store: Arc<dyn VehicleStore> = match &database_config {
        Some(db_config) => {
            let connection = DatabaseConnection::connect(db_config).await.map_err(|e| {
                error!("❌ Error conectando a la base de datos: {:#}", e);
                e
            })?;
            Arc::new(VehicleRepository::new(connection.pool().clone()))
        }
        None => {
            info!("💾 Usando almacenamiento en memoria (los datos no persisten)");
            Arc::new(InMemoryVehicleRepository::new())
        }
    };

    let state = AppState::new(store, &config);
    let app = create_app(state, cors_middleware(&config.cors_origins));

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   POST   /vehicles/ - Crear vehículo");
    info!("   GET    /vehicles/?skip=&limit= - Listar vehículos");
    info!("   GET    /vehicles/:id - Obtener vehículo");
    info!("   PATCH  /vehicles/:id - Actualizar vehículo");
    info!("   DELETE /vehicles/:id - Eliminar vehículo");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("No se pudo abrir {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}
