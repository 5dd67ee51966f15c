use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::company_controller::CompanyController;
use crate::dto::company_dto::{CompanyDetailResponse, ReferenceData};
use crate::dto::response::ApiResponse;
use crate::models::company::{Company, CompanyFilters};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_company_router() -> Router<AppState> {
    Router::new()
        .route("/companies", get(list_companies))
        .route("/companies/:id", get(get_company_by_id))
        .route("/companies/slug/:slug", get(get_company_by_slug))
        .route("/categories", get(get_categories))
        .route("/reference-data", get(get_reference_data))
}

async fn list_companies(
    State(state): State<AppState>,
    Query(filters): Query<CompanyFilters>,
) -> Result<Json<ApiResponse<Vec<Company>>>, AppError> {
    let controller = CompanyController::new(state.store.clone());
    let companies = controller.list(filters).await?;
    Ok(Json(ApiResponse::success(companies)))
}

async fn get_company_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Company>>, AppError> {
    let controller = CompanyController::new(state.store.clone());
    let company = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(company)))
}

async fn get_company_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<CompanyDetailResponse>>, AppError> {
    let controller = CompanyController::new(state.store.clone());
    let detail = controller.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(detail)))
}

async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BTreeMap<String, i64>>>, AppError> {
    let controller = CompanyController::new(state.store.clone());
    let counts = controller.category_counts().await?;
    Ok(Json(ApiResponse::success(counts)))
}

async fn get_reference_data(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ReferenceData>>, AppError> {
    let controller = CompanyController::new(state.store.clone());
    let data = controller.reference_data().await?;
    Ok(Json(ApiResponse::success(data)))
}
