//! Controlador de empresas
//!
//! Listado público, fichas por id/slug, conteo por categorías y
//! datos de referencia para los filtros.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::dto::company_dto::{CompanyDetailResponse, ReferenceData};
use crate::models::company::{Company, CompanyFilters};
use crate::repositories::DynStore;
use crate::utils::errors::AppError;

pub struct CompanyController {
    store: DynStore,
}

impl CompanyController {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, filters: CompanyFilters) -> Result<Vec<Company>, AppError> {
        self.store.list_companies(&filters).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Company, AppError> {
        self.store
            .find_company_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empresa no encontrada".to_string()))
    }

    /// Ficha completa de la empresa para su página de perfil
    pub async fn get_by_slug(&self, slug: &str) -> Result<CompanyDetailResponse, AppError> {
        let company = self
            .store
            .find_company_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Empresa no encontrada".to_string()))?;

        let business_hours = self.store.business_hours(company.id).await?;
        let social_links = self.store.social_links(company.id).await?;
        let reviews = self.store.reviews_for_company(company.id).await?;

        Ok(CompanyDetailResponse {
            company,
            business_hours,
            social_links,
            reviews,
        })
    }

    pub async fn category_counts(&self) -> Result<BTreeMap<String, i64>, AppError> {
        self.store.category_counts().await
    }

    pub async fn reference_data(&self) -> Result<ReferenceData, AppError> {
        let categories = self.store.distinct_categories().await?;
        let cities = self.store.distinct_cities().await?;

        Ok(ReferenceData { categories, cities })
    }
}
