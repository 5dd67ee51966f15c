//! DTOs de empresas

use serde::Serialize;

use crate::models::company::{BusinessHour, Company, SocialLink};
use crate::models::review::Review;

/// Detalle de una empresa: ficha completa para la página de perfil
#[derive(Debug, Serialize)]
pub struct CompanyDetailResponse {
    #[serde(flatten)]
    pub company: Company,
    pub business_hours: Vec<BusinessHour>,
    pub social_links: Vec<SocialLink>,
    pub reviews: Vec<Review>,
}

/// Datos de referencia para los filtros del frontend
#[derive(Debug, Serialize)]
pub struct ReferenceData {
    pub categories: Vec<String>,
    pub cities: Vec<String>,
}
