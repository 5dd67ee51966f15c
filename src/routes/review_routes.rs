use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::review_controller::ReviewController;
use crate::dto::response::ApiResponse;
use crate::dto::review_dto::{ReviewResponse, ReviewSearchParams};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_review_router() -> Router<AppState> {
    Router::new().route("/reviews", get(list_reviews))
}

async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<ReviewSearchParams>,
) -> Result<Json<ApiResponse<Vec<ReviewResponse>>>, AppError> {
    let controller = ReviewController::new(state.store.clone());
    let reviews = controller.list(params.search).await?;
    Ok(Json(ApiResponse::success(reviews)))
}
