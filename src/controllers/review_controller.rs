//! Controlador de reviews

use crate::dto::review_dto::ReviewResponse;
use crate::repositories::DynStore;
use crate::utils::errors::AppError;

pub struct ReviewController {
    store: DynStore,
}

impl ReviewController {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    /// Listado global con búsqueda; el nombre de empresa no resuelto
    /// cae en "Unknown company" al convertir a response
    pub async fn list(&self, search: Option<String>) -> Result<Vec<ReviewResponse>, AppError> {
        let search = search.as_deref().map(str::trim).filter(|s| !s.is_empty());

        let reviews = self.store.list_reviews(search).await?;

        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }
}
