//! Business Directory API
//!
//! Backend del directorio de empresas: listados, reseñas, promociones,
//! autenticación y dashboards. Ver `routes::create_app` para el router
//! completo.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
