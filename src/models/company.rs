//! Modelo de Company
//!
//! Este módulo contiene el struct Company y sus entidades asociadas
//! (horarios de atención y redes sociales). Mapea exactamente al schema
//! PostgreSQL con primary key 'id' y slug único.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del ciclo de vida de una empresa.
/// Las transiciones son acción del admin, nunca de este core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "company_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CompanyStatus {
    Active,
    Pending,
    Suspended,
    Rejected,
}

/// Company principal - mapea exactamente a la tabla companies
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub cover_url: Option<String>,
    pub rating: f64,
    pub review_count: i32,
    pub view_count: i32,
    pub is_verified: bool,
    pub is_featured: bool,
    pub is_premium: bool,
    pub status: CompanyStatus,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Horario de atención por día de la semana (0 = lunes)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BusinessHour {
    pub company_id: Uuid,
    pub day_of_week: i16,
    pub opens_at: Option<NaiveTime>,
    pub closes_at: Option<NaiveTime>,
    pub is_closed: bool,
}

/// Plataforma de red social soportada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "social_platform", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
}

/// Red social de una empresa
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SocialLink {
    pub company_id: Uuid,
    pub platform: SocialPlatform,
    pub url: String,
}

/// Filtros para el listado público de empresas
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
}
