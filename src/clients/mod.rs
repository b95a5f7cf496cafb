//! Clients - HTTP Clients
//!
//! This module contains the HTTP client the tool adapter uses to reach the inventory API.

pub mod inventory_client;

pub use inventory_client::{ClientError, InventoryApiClient};
