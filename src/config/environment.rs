//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. A diferencia del
//! resto de variables, DATABASE_URL es opcional: su ausencia selecciona
//! el modo estático en memoria.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub database_url: Option<String>,
    pub database_ssl: bool,
    pub database_max_connections: u32,
    pub database_min_connections: u32,
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-change-me".to_string()),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            database_ssl: env::var("DATABASE_SSL")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .expect("DATABASE_MAX_CONNECTIONS must be a valid number"),
            database_min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("DATABASE_MIN_CONNECTIONS must be a valid number"),
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl EnvironmentConfig {
    /// Configuración fija para tests, sin leer el entorno
    pub fn for_tests() -> Self {
        Self {
            environment: "test".to_string(),
            port: 0,
            host: "127.0.0.1".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: 3600,
            cors_origins: vec![],
            database_url: None,
            database_ssl: false,
            database_max_connections: 5,
            database_min_connections: 1,
        }
    }
}
