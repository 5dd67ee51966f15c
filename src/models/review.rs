//! Modelo de Review
//!
//! Reseñas de empresas. Una review referencia a su empresa por id;
//! la referencia puede quedar colgando y este layer lo tolera.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Review - mapea exactamente a la tabla reviews
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub company_id: Uuid,
    pub user_name: String,
    pub title: String,
    pub comment: String,
    pub rating: f64,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Review con el nombre de su empresa resuelto vía join.
/// `company_name` es None cuando la referencia no resuelve.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReviewWithCompany {
    pub id: Uuid,
    pub company_id: Uuid,
    pub user_name: String,
    pub title: String,
    pub comment: String,
    pub rating: f64,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub company_name: Option<String>,
}
