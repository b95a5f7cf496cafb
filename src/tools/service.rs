//! Servidor MCP del inventario
//!
//! Cada herramienta reenvía a la API HTTP y devuelve la respuesta
//! normalizada como texto JSON.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde_json::Value;

use super::params::{CreateVehicleArgs, ListVehiclesArgs, UpdateVehicleArgs, VehicleIdArgs};
use crate::clients::{ClientError, InventoryApiClient};

pub const SERVER_NAME: &str = "apex-auto-mcp";
const INSTRUCTIONS: &str = "MCP server for Apex Auto Inventory";

pub const TOOL_NAMES: [&str; 5] = [
    "create_vehicle",
    "list_vehicles",
    "get_vehicle",
    "update_vehicle",
    "delete_vehicle",
];

#[derive(Clone)]
pub struct VehicleTools {
    client: InventoryApiClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl VehicleTools {
    pub fn new(client: InventoryApiClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Create a new vehicle. vehicle_data must include make, model and year; color and is_available are optional."
    )]
    pub async fn create_vehicle(
        &self,
        Parameters(args): Parameters<CreateVehicleArgs>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self.client.create_vehicle(&args.vehicle_data).await;
        Ok(tool_result("create_vehicle", outcome))
    }

    #[tool(description = "List vehicles with optional skip/limit pagination.")]
    pub async fn list_vehicles(
        &self,
        Parameters(args): Parameters<ListVehiclesArgs>,
    ) -> Result<CallToolResult, McpError> {
        let (skip, limit) = args.resolve();
        let outcome = self.client.list_vehicles(skip, limit).await;
        Ok(tool_result("list_vehicles", outcome))
    }

    #[tool(description = "Retrieve a vehicle by ID.")]
    pub async fn get_vehicle(
        &self,
        Parameters(args): Parameters<VehicleIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self.client.get_vehicle(args.vehicle_id).await;
        Ok(tool_result("get_vehicle", outcome))
    }

    #[tool(
        description = "Update a vehicle by ID. Only the fields present in vehicle_data are changed."
    )]
    pub async fn update_vehicle(
        &self,
        Parameters(args): Parameters<UpdateVehicleArgs>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .client
            .update_vehicle(args.vehicle_id, &args.vehicle_data)
            .await;
        Ok(tool_result("update_vehicle", outcome))
    }

    #[tool(description = "Delete a vehicle by ID.")]
    pub async fn delete_vehicle(
        &self,
        Parameters(args): Parameters<VehicleIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self.client.delete_vehicle(args.vehicle_id).await;
        Ok(tool_result("delete_vehicle", outcome))
    }
}

#[tool_handler]
impl ServerHandler for VehicleTools {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = SERVER_NAME.to_string();
        server_info.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            instructions: Some(INSTRUCTIONS.to_string()),
            ..ServerInfo::default()
        }
    }
}

/// Las respuestas normalizadas (incluido `{"error": ...}`) son salida normal;
/// solo un fallo de transporte marca `isError`.
fn tool_result(tool: &str, outcome: Result<Value, ClientError>) -> CallToolResult {
    match outcome {
        Ok(value) => CallToolResult::success(vec![Content::text(value.to_string())]),
        Err(e) => {
            tracing::warn!("⚠️ Tool {} failed: {}", tool, e);
            CallToolResult::error(vec![Content::text(e.to_string())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tools() -> VehicleTools {
        // puerto reservado y cerrado
        VehicleTools::new(InventoryApiClient::new("http://127.0.0.1:9"))
    }

    #[test]
    fn test_router_lists_all_tools() {
        let mut names: Vec<String> = tools()
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();

        let mut expected = TOOL_NAMES.to_vec();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_server_info_advertises_tools() {
        let info = tools().get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.instructions.as_deref(), Some(INSTRUCTIONS));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_a_tool_error() {
        let result = tools()
            .list_vehicles(Parameters(ListVehiclesArgs::default()))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));

        let content = serde_json::to_value(&result.content).unwrap();
        assert!(content[0]["text"]
            .as_str()
            .unwrap()
            .contains("Inventory API request failed"));
    }
}
