//! Cliente HTTP para la API de inventario
//!
//! Reenvía cada operación a la API REST y normaliza las respuestas
//! para el adaptador de herramientas: los errores HTTP se devuelven
//! como `{"error": ...}` en lugar de propagarse.

use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::utils::errors::VEHICLE_NOT_FOUND;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Inventory API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Cliente HTTP para la API de inventario
#[derive(Clone)]
pub struct InventoryApiClient {
    client: Client,
    base_url: String,
}

impl InventoryApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn vehicle_url(&self, id: i64) -> String {
        format!("{}/vehicles/{}", self.base_url, id)
    }

    pub async fn create_vehicle(
        &self,
        vehicle_data: &Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let resp = self
            .client
            .post(format!("{}/vehicles/", self.base_url))
            .json(vehicle_data)
            .send()
            .await?;
        normalize_response(resp).await
    }

    pub async fn list_vehicles(&self, skip: i64, limit: i64) -> Result<Value, ClientError> {
        let resp = self
            .client
            .get(format!("{}/vehicles/", self.base_url))
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await?;
        normalize_response(resp).await
    }

    pub async fn get_vehicle(&self, vehicle_id: i64) -> Result<Value, ClientError> {
        let resp = self.client.get(self.vehicle_url(vehicle_id)).send().await?;
        normalize_response(resp).await
    }

    pub async fn update_vehicle(
        &self,
        vehicle_id: i64,
        vehicle_data: &Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let resp = self
            .client
            .patch(self.vehicle_url(vehicle_id))
            .json(vehicle_data)
            .send()
            .await?;
        normalize_response(resp).await
    }

    pub async fn delete_vehicle(&self, vehicle_id: i64) -> Result<Value, ClientError> {
        let resp = self.client.delete(self.vehicle_url(vehicle_id)).send().await?;
        normalize_response(resp).await
    }
}

async fn normalize_response(resp: Response) -> Result<Value, ClientError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    let body = if bytes.is_empty() {
        None
    } else {
        Some(
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned())),
        )
    };

    if !status.is_success() {
        tracing::debug!("Inventory API answered {}", status);
    }
    Ok(normalize(status, body))
}

/// Traducir status + cuerpo a la forma que devuelven las herramientas
pub fn normalize(status: StatusCode, body: Option<Value>) -> Value {
    match status {
        StatusCode::NOT_FOUND => json!({ "error": VEHICLE_NOT_FOUND }),
        StatusCode::NO_CONTENT => json!({ "status": "deleted" }),
        s if s.is_success() => body.unwrap_or(Value::Null),
        s => json!({
            "error": body.unwrap_or_else(|| Value::String(s.to_string()))
        }),
    }
}
