use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{AuthData, LoginRequest, RegisterRequest, UserResponse};
use crate::dto::response::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthData>>, AppError> {
    let controller = AuthController::new(state.store.clone(), JwtConfig::from(&state.config));
    let data = controller.login(request).await?;
    Ok(Json(ApiResponse::success(data)))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), AppError> {
    let controller = AuthController::new(state.store.clone(), JwtConfig::from(&state.config));
    let user = controller.register(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(user))))
}
