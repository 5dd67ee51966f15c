//! Controlador de promociones
//!
//! Solo lectura: el ciclo de vida de las promociones lo maneja
//! el tooling de admin fuera de este core.

use uuid::Uuid;

use crate::models::promotion::Promotion;
use crate::repositories::DynStore;
use crate::utils::errors::AppError;

pub struct PromotionController {
    store: DynStore,
}

impl PromotionController {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Promotion>, AppError> {
        self.store.list_active_promotions().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Promotion, AppError> {
        self.store
            .find_promotion_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Promoción no encontrada".to_string()))
    }
}
