//! Configuración de base de datos
//!
//! Este módulo lee la configuración de PostgreSQL: URL, tamaño del pool,
//! material TLS para mutual-TLS y nivel de log de sentencias SQL.

use anyhow::{bail, Result};
use log::LevelFilter;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::environment::parse_or;

/// Certificados para conectar con `sslmode=verify-full`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    pub ca_cert: PathBuf,
    pub client_cert: PathBuf,
    pub client_key: PathBuf,
}

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub tls: Option<TlsConfig>,
    pub log_statements: LevelFilter,
}

impl DatabaseConfig {
    /// Leer la configuración desde el entorno del proceso
    pub fn from_env(development: bool) -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), development)
    }

    pub fn from_lookup<F>(lookup: F, development: bool) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match lookup("DATABASE_URL").or_else(|| lookup("DATABASE_URI")) {
            Some(url) if !url.trim().is_empty() => url,
            _ => bail!("DATABASE_URL must be set in environment variables"),
        };

        let tls = Self::tls_from_lookup(&lookup)?;

        // En desarrollo se registran las sentencias; en producción solo si se pide
        let default_log = if development {
            LevelFilter::Debug
        } else {
            LevelFilter::Off
        };

        let max_connections = parse_or("DB_MAX_CONNECTIONS", &lookup, 10)?;
        let min_connections = parse_or("DB_MIN_CONNECTIONS", &lookup, 1)?;
        if min_connections > max_connections {
            bail!(
                "DB_MIN_CONNECTIONS ({}) cannot exceed DB_MAX_CONNECTIONS ({})",
                min_connections,
                max_connections
            );
        }

        Ok(Self {
            url,
            max_connections,
            min_connections,
            connect_timeout: Duration::from_secs(parse_or("DB_CONNECT_TIMEOUT_SECS", &lookup, 30)?),
            tls,
            log_statements: parse_or("DB_LOG_STATEMENTS", &lookup, default_log)?,
        })
    }

    fn tls_from_lookup<F>(lookup: &F) -> Result<Option<TlsConfig>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let keys = ["DB_CERT_CA_PATH", "DB_CLIENT_CERT_PATH", "DB_CLIENT_KEY_PATH"];
        let values: Vec<Option<String>> = keys
            .iter()
            .map(|key| lookup(key).filter(|v| !v.trim().is_empty()))
            .collect();

        match values.as_slice() {
            [None, None, None] => Ok(None),
            [Some(ca), Some(cert), Some(key)] => Ok(Some(TlsConfig {
                ca_cert: PathBuf::from(ca),
                client_cert: PathBuf::from(cert),
                client_key: PathBuf::from(key),
            })),
            _ => {
                let missing: Vec<&str> = keys
                    .iter()
                    .zip(&values)
                    .filter(|(_, v)| v.is_none())
                    .map(|(k, _)| *k)
                    .collect();
                bail!(
                    "Missing database TLS environment variables: {} \
                     (DB_CERT_CA_PATH, DB_CLIENT_CERT_PATH and DB_CLIENT_KEY_PATH go together)",
                    missing.join(", ")
                )
            }
        }
    }
}

impl TlsConfig {
    /// Verificar que los ficheros existen antes de abrir el pool
    pub fn ensure_files_exist(&self) -> Result<()> {
        for path in [&self.ca_cert, &self.client_cert, &self.client_key] {
            if !path.is_file() {
                bail!("Certificate file not found: {}", path.display());
            }
        }
        Ok(())
    }
}
