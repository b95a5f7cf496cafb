//! Argumentos de las herramientas
//!
//! El esquema JSON que ve el agente sale de estos tipos.

use rmcp::schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::dto::vehicle_dto::{DEFAULT_LIMIT, DEFAULT_SKIP};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct CreateVehicleArgs {
    /// Vehicle fields: make, model, year (1900-2100), color, is_available
    pub vehicle_data: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct ListVehiclesArgs {
    /// Number of vehicles to skip (default 0)
    #[serde(default)]
    pub skip: Option<i64>,
    /// Maximum number of vehicles to return (default 100)
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListVehiclesArgs {
    pub fn resolve(&self) -> (i64, i64) {
        (
            self.skip.unwrap_or(DEFAULT_SKIP),
            self.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct VehicleIdArgs {
    /// Vehicle ID
    pub vehicle_id: i64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct UpdateVehicleArgs {
    /// Vehicle ID
    pub vehicle_id: i64,
    /// Any subset of make, model, year, color, is_available
    pub vehicle_data: Map<String, Value>,
}
