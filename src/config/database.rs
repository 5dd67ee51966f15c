//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de PostgreSQL con SQLx.
//! El pool se crea una sola vez en el arranque y viaja dentro del AppState.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};

use crate::config::environment::EnvironmentConfig;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub require_ssl: bool,
}

impl DatabaseConfig {
    /// Derivar la configuración del pool de las variables de entorno
    pub fn from_environment(config: &EnvironmentConfig, url: String) -> Self {
        Self {
            url,
            max_connections: config.database_max_connections,
            min_connections: config.database_min_connections,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
            require_ssl: config.database_ssl,
        }
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        let mut options = PgConnectOptions::from_str(&self.url)?;
        if self.require_ssl {
            options = options.ssl_mode(PgSslMode::Require);
        }

        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect_with(options)
            .await
    }
}
