//! Controlador de autenticación
//!
//! Login y registro de usuarios del directorio.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::dto::auth_dto::{AuthData, LoginRequest, RegisterRequest, UserResponse};
use crate::models::user::{NewUser, UserRole, UserStatus};
use crate::repositories::DynStore;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::{validate_email, validate_phone};

pub struct AuthController {
    store: DynStore,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(store: DynStore, jwt_config: JwtConfig) -> Self {
        Self { store, jwt_config }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthData, AppError> {
        let email = request.email.as_deref().map(str::trim).unwrap_or_default();
        let password = request.password.as_deref().unwrap_or_default();

        if email.is_empty() {
            return Err(AppError::Validation("El email es requerido".to_string()));
        }

        if password.is_empty() {
            return Err(AppError::Validation("La contraseña es requerida".to_string()));
        }

        // Email inexistente y contraseña incorrecta devuelven el mismo
        // error: el caller no puede enumerar cuentas
        let user = self
            .store
            .find_user_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let valid = verify(password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        if user.status != UserStatus::Active {
            return Err(AppError::AccountInactive);
        }

        let token = generate_token(user.id, user.role.as_str(), &self.jwt_config)?;

        Ok(AuthData {
            token,
            user: UserResponse::from(user),
        })
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<UserResponse, AppError> {
        let email = request.email.as_deref().map(str::trim).unwrap_or_default();
        let password = request.password.as_deref().unwrap_or_default();
        let full_name = request.full_name.as_deref().map(str::trim).unwrap_or_default();

        if email.is_empty() {
            return Err(AppError::Validation("El email es requerido".to_string()));
        }

        if validate_email(email).is_err() {
            return Err(AppError::Validation("Email inválido".to_string()));
        }

        if password.len() < 8 {
            return Err(AppError::Validation(
                "La contraseña debe tener al menos 8 caracteres".to_string(),
            ));
        }

        if full_name.is_empty() {
            return Err(AppError::Validation("El nombre completo es requerido".to_string()));
        }

        if let Some(ref phone) = request.phone {
            if !phone.is_empty() && validate_phone(phone).is_err() {
                return Err(AppError::Validation("Teléfono inválido".to_string()));
            }
        }

        // Verificar que el email no exista
        if self.store.find_user_by_email(email).await?.is_some() {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        let password_hash = hash(password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let role = request
            .role
            .as_deref()
            .map(UserRole::from)
            .unwrap_or(UserRole::User);

        let new_user = NewUser {
            email: email.to_string(),
            password_hash,
            full_name: full_name.to_string(),
            role,
            phone: request.phone.filter(|p| !p.is_empty()),
            location: request.location.filter(|l| !l.is_empty()),
        };

        let user = self.store.create_user(new_user).await?;

        Ok(UserResponse::from(user))
    }
}
