//! Controlador de dashboards
//!
//! Vistas agregadas con scope por rol: el dueño ve sus empresas y
//! sus reviews; el admin ve los totales del directorio.

use crate::dto::dashboard_dto::{AdminOverview, OwnerOverview};
use crate::dto::review_dto::ReviewResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::company::{Company, CompanyStatus};
use crate::repositories::DynStore;
use crate::utils::errors::AppError;

pub struct DashboardController {
    store: DynStore,
}

impl DashboardController {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    pub async fn owner_overview(&self, user: &AuthenticatedUser) -> Result<OwnerOverview, AppError> {
        let companies = self.store.companies_by_owner(user.user_id).await?;
        let reviews = self.store.reviews_by_owner(user.user_id).await?;

        let total_views: i64 = companies.iter().map(|c| c.view_count as i64).sum();
        let average_rating = if companies.is_empty() {
            0.0
        } else {
            companies.iter().map(|c| c.rating).sum::<f64>() / companies.len() as f64
        };

        Ok(OwnerOverview {
            total_companies: companies.len() as i64,
            total_reviews: reviews.len() as i64,
            average_rating,
            total_views,
        })
    }

    /// Empresas del dueño en cualquier estado, pendientes incluidas
    pub async fn owner_companies(&self, user: &AuthenticatedUser) -> Result<Vec<Company>, AppError> {
        self.store.companies_by_owner(user.user_id).await
    }

    pub async fn owner_reviews(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<Vec<ReviewResponse>, AppError> {
        let reviews = self.store.reviews_by_owner(user.user_id).await?;

        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }

    pub async fn admin_overview(&self, user: &AuthenticatedUser) -> Result<AdminOverview, AppError> {
        if user.role != crate::models::user::UserRole::Admin {
            return Err(AppError::Forbidden(
                "Se requiere rol de administrador".to_string(),
            ));
        }

        let total_companies = self.store.count_companies().await?;
        let pending_companies = self
            .store
            .count_companies_with_status(CompanyStatus::Pending)
            .await?;
        let total_users = self.store.count_users().await?;
        let total_reviews = self.store.count_reviews().await?;
        let active_promotions = self.store.count_active_promotions().await?;

        Ok(AdminOverview {
            total_companies,
            pending_companies,
            total_users,
            total_reviews,
            active_promotions,
        })
    }
}
