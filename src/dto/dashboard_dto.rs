//! DTOs de los dashboards

use serde::Serialize;

/// Agregados globales para el panel de administración
#[derive(Debug, Serialize)]
pub struct AdminOverview {
    pub total_companies: i64,
    pub pending_companies: i64,
    pub total_users: i64,
    pub total_reviews: i64,
    pub active_promotions: i64,
}

/// Agregados del dashboard de un dueño sobre sus empresas
#[derive(Debug, Serialize)]
pub struct OwnerOverview {
    pub total_companies: i64,
    pub total_reviews: i64,
    pub average_rating: f64,
    pub total_views: i64,
}
