//! DTOs de reviews

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::review::ReviewWithCompany;

/// Nombre mostrado cuando la empresa referenciada no existe
pub const UNKNOWN_COMPANY: &str = "Unknown company";

/// Query params del listado de reviews
#[derive(Debug, Deserialize)]
pub struct ReviewSearchParams {
    pub search: Option<String>,
}

/// Review anotada con el nombre de su empresa
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub user_name: String,
    pub title: String,
    pub comment: String,
    pub rating: f64,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub company_name: String,
}

impl From<ReviewWithCompany> for ReviewResponse {
    fn from(review: ReviewWithCompany) -> Self {
        Self {
            id: review.id,
            company_id: review.company_id,
            user_name: review.user_name,
            title: review.title,
            comment: review.comment,
            rating: review.rating,
            is_verified: review.is_verified,
            created_at: review.created_at,
            company_name: review
                .company_name
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
        }
    }
}
