//! DTOs de autenticación
//!
//! Los campos requeridos llegan como Option: su ausencia es un error de
//! validación del caller (400), no un fallo de deserialización.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::{User, UserRole, UserStatus};

/// Request de login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request de registro
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Response de usuario (sin password_hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            status: user.status,
            phone: user.phone,
            location: user.location,
            created_at: user.created_at,
        }
    }
}

/// Data del login exitoso: token + usuario saneado
#[derive(Debug, Serialize)]
pub struct AuthData {
    pub token: String,
    pub user: UserResponse,
}
