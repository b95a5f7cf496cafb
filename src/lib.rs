//! Apex Auto Inventory
//!
//! API CRUD de inventario de vehículos sobre PostgreSQL, más un adaptador
//! que publica las mismas operaciones como herramientas para agentes.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod server;
pub mod state;
pub mod tools;
pub mod utils;
