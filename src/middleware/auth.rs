//! Middleware de autenticación JWT
//!
//! Este módulo maneja la autenticación JWT: extracción del token,
//! verificación y carga del usuario autenticado en la request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    models::user::{UserRole, UserStatus},
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{extract_token_from_header, verify_token, JwtConfig},
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let token = extract_token_from_header(auth_header)?;

    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &jwt_config)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    // El token puede sobrevivir al usuario: verificar contra el store
    let user = state
        .store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

    if user.status != UserStatus::Active {
        return Err(AppError::AccountInactive);
    }

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        email: user.email,
        role: user.role,
    });

    Ok(next.run(request).await)
}
