//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de base de datos, variables de entorno
//! y del adaptador de herramientas.

pub mod database;
pub mod environment;
pub mod tools;

pub use database::{DatabaseConfig, TlsConfig};
pub use environment::*;
pub use tools::ToolsConfig;
