use axum::{
    extract::{Extension, State},
    middleware,
    routing::get,
    Json, Router,
};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::AdminOverview;
use crate::dto::response::ApiResponse;
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/overview", get(overview))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn overview(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<AdminOverview>>, AppError> {
    let controller = DashboardController::new(state.store.clone());
    let data = controller.admin_overview(&user).await?;
    Ok(Json(ApiResponse::success(data)))
}
