use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::promotion_controller::PromotionController;
use crate::dto::response::ApiResponse;
use crate::models::promotion::Promotion;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_promotion_router() -> Router<AppState> {
    Router::new()
        .route("/promotions", get(list_promotions))
        .route("/promotions/:id", get(get_promotion))
}

async fn list_promotions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Promotion>>>, AppError> {
    let controller = PromotionController::new(state.store.clone());
    let promotions = controller.list().await?;
    Ok(Json(ApiResponse::success(promotions)))
}

async fn get_promotion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Promotion>>, AppError> {
    let controller = PromotionController::new(state.store.clone());
    let promotion = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(promotion)))
}
