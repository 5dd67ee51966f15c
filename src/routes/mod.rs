//! Rutas de la API
//!
//! Ensambla el router completo: endpoints públicos, dashboard con
//! autenticación y panel de admin, con CORS y trazas HTTP.

pub mod admin_routes;
pub mod auth_routes;
pub mod company_routes;
pub mod dashboard_routes;
pub mod promotion_routes;
pub mod review_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Crear el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() || state.config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_routes::create_auth_router())
        .nest(
            "/api",
            company_routes::create_company_router()
                .merge(review_routes::create_review_router())
                .merge(promotion_routes::create_promotion_router()),
        )
        .nest(
            "/api/dashboard",
            dashboard_routes::create_dashboard_router(state.clone()),
        )
        .nest("/api/admin", admin_routes::create_admin_router(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check del servicio
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "business-directory",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
