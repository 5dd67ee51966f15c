//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP con el envelope uniforme.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::response::ApiResponse;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is not active")]
    AccountInactive,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),

            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),

            // Email inexistente y contraseña incorrecta comparten mensaje:
            // el caller no puede saber si la cuenta existe
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Credenciales inválidas".to_string())
            }

            AppError::AccountInactive => {
                (StatusCode::FORBIDDEN, "La cuenta no está activa".to_string())
            }

            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),

            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),

            AppError::Jwt(msg) => (StatusCode::UNAUTHORIZED, msg),

            AppError::Database(msg) => {
                log::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }

            AppError::Internal(msg) => {
                log::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} con id '{}' no encontrado", resource, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_maps_to_unauthorized() {
        let response = AppError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_account_inactive_maps_to_forbidden() {
        let response = AppError::AccountInactive.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_database_error_hides_detail() {
        let response =
            AppError::Database("connection refused at 10.0.0.5:5432".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_helper() {
        let err = not_found_error("Empresa", "abc");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
