use axum::{
    extract::{Extension, State},
    middleware,
    routing::get,
    Json, Router,
};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::OwnerOverview;
use crate::dto::response::ApiResponse;
use crate::dto::review_dto::ReviewResponse;
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::models::company::Company;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/overview", get(overview))
        .route("/companies", get(companies))
        .route("/reviews", get(reviews))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn overview(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<OwnerOverview>>, AppError> {
    let controller = DashboardController::new(state.store.clone());
    let data = controller.owner_overview(&user).await?;
    Ok(Json(ApiResponse::success(data)))
}

async fn companies(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<Company>>>, AppError> {
    let controller = DashboardController::new(state.store.clone());
    let companies = controller.owner_companies(&user).await?;
    Ok(Json(ApiResponse::success(companies)))
}

async fn reviews(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<ReviewResponse>>>, AppError> {
    let controller = DashboardController::new(state.store.clone());
    let reviews = controller.owner_reviews(&user).await?;
    Ok(Json(ApiResponse::success(reviews)))
}
