//! Modelo de Promotion
//!
//! Unidades de marketing programadas. Este core solo las lee:
//! listar activas ordenadas y obtener por id. La creación/edición
//! vive en el tooling de admin, fuera de este repositorio.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de una promoción
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "promotion_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PromotionStatus {
    Active,
    Inactive,
    Scheduled,
}

/// Estadística opcional del popup (ej. "500+ empresas")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupStat {
    pub label: String,
    pub value: String,
}

/// Payload anidado del popup de una promoción
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionPopup {
    pub subtitle: String,
    pub image_url: String,
    pub price: String,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<PopupStat>>,
}

/// Promotion - mapea exactamente a la tabla promotions (popup como JSONB)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Promotion {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
    pub button_color: Option<String>,
    pub text_color: Option<String>,
    pub status: PromotionStatus,
    pub display_order: i32,
    pub popup: Json<PromotionPopup>,
    pub created_at: DateTime<Utc>,
}
