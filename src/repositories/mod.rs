//! Record Store del directorio
//!
//! Un único contrato de consultas (`RecordStore`) con dos backends:
//! PostgreSQL (`PgStore`) y colecciones estáticas en memoria
//! (`StaticStore`). El backend se elige una sola vez al arrancar;
//! la lógica de negocio nunca pregunta cuál está detrás.

pub mod memory;
pub mod postgres;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::company::{BusinessHour, Company, CompanyFilters, CompanyStatus, SocialLink};
use crate::models::promotion::Promotion;
use crate::models::review::{Review, ReviewWithCompany};
use crate::models::user::{NewUser, User};
use crate::utils::errors::AppResult;

/// Handle compartido al store seleccionado
pub type DynStore = Arc<dyn RecordStore>;

/// Contrato de consultas del Record Store.
///
/// Todas las operaciones son de solo lectura salvo `create_user`.
/// "No encontrado" en los lookups individuales es `Ok(None)`,
/// nunca un error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    // --- Companies ---

    /// Listado público: solo empresas activas, filtros opcionales
    async fn list_companies(&self, filters: &CompanyFilters) -> AppResult<Vec<Company>>;

    async fn find_company_by_id(&self, id: Uuid) -> AppResult<Option<Company>>;

    async fn find_company_by_slug(&self, slug: &str) -> AppResult<Option<Company>>;

    /// Empresas asociadas a un dueño, en cualquier estado
    async fn companies_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Company>>;

    /// Mapping categoría → cantidad sobre empresas activas,
    /// ordenado ascendente por clave
    async fn category_counts(&self) -> AppResult<BTreeMap<String, i64>>;

    async fn distinct_categories(&self) -> AppResult<Vec<String>>;

    /// Ciudades únicas ordenadas; excluye valores vacíos o ausentes
    async fn distinct_cities(&self) -> AppResult<Vec<String>>;

    async fn business_hours(&self, company_id: Uuid) -> AppResult<Vec<BusinessHour>>;

    async fn social_links(&self, company_id: Uuid) -> AppResult<Vec<SocialLink>>;

    // --- Reviews ---

    /// Reviews con nombre de empresa resuelto; `search` matchea
    /// case-insensitive contra autor, título o nombre de empresa
    async fn list_reviews(&self, search: Option<&str>) -> AppResult<Vec<ReviewWithCompany>>;

    async fn reviews_for_company(&self, company_id: Uuid) -> AppResult<Vec<Review>>;

    /// Reviews sobre las empresas de un dueño
    async fn reviews_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<ReviewWithCompany>>;

    // --- Promotions ---

    /// Promociones activas ordenadas por display_order
    async fn list_active_promotions(&self) -> AppResult<Vec<Promotion>>;

    async fn find_promotion_by_id(&self, id: Uuid) -> AppResult<Option<Promotion>>;

    // --- Users ---

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Persistir un usuario nuevo; email duplicado → Conflict
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    // --- Contadores para el panel de admin ---

    async fn count_companies(&self) -> AppResult<i64>;

    async fn count_companies_with_status(&self, status: CompanyStatus) -> AppResult<i64>;

    async fn count_users(&self) -> AppResult<i64>;

    async fn count_reviews(&self) -> AppResult<i64>;

    async fn count_active_promotions(&self) -> AppResult<i64>;
}
