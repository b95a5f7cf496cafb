//! Configuración del adaptador de herramientas

use anyhow::{bail, Result};
use std::env;

use super::environment::parse_or;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct ToolsConfig {
    /// URL base de la API de inventario a la que se reenvían las llamadas
    pub api_url: String,
    pub host: String,
    pub port: u16,
}

impl ToolsConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            bail!("API_URL must be an http(s) URL, got '{}'", api_url);
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            host: lookup("TOOLS_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or("TOOLS_PORT", &lookup, 8001)?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
