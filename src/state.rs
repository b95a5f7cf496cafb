//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::{EnvironmentConfig, StorageBackend};
use crate::repositories::VehicleStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VehicleStore>,
    pub storage: StorageBackend,
}

impl AppState {
    pub fn new(store: Arc<dyn VehicleStore>, config: &EnvironmentConfig) -> Self {
        Self {
            store,
            storage: config.storage,
        }
    }

    pub fn with_store(store: Arc<dyn VehicleStore>, storage: StorageBackend) -> Self {
        Self { store, storage }
    }
}
