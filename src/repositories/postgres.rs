//! Backend PostgreSQL del Record Store
//!
//! Implementa el contrato `RecordStore` con SQLx sobre un pool
//! de conexiones creado una sola vez en el arranque.

use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::company::{BusinessHour, Company, CompanyFilters, CompanyStatus, SocialLink};
use crate::models::promotion::Promotion;
use crate::models::review::{Review, ReviewWithCompany};
use crate::models::user::{NewUser, User};
use crate::repositories::RecordStore;
use crate::utils::errors::{AppError, AppResult};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn list_companies(&self, filters: &CompanyFilters) -> AppResult<Vec<Company>> {
        let result = sqlx::query_as::<_, Company>(
            r#"
            SELECT * FROM companies
            WHERE status = 'active'
            AND ($1::text IS NULL OR name ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%')
            AND ($2::text IS NULL OR lower(category) = lower($2))
            AND ($3::text IS NULL OR lower(city) = lower($3))
            ORDER BY is_featured DESC, rating DESC, name ASC
            "#,
        )
        .bind(filters.search.as_deref())
        .bind(filters.category.as_deref())
        .bind(filters.city.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando empresas: {}", e)))?;

        Ok(result)
    }

    async fn find_company_by_id(&self, id: Uuid) -> AppResult<Option<Company>> {
        let result = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error buscando empresa: {}", e)))?;

        Ok(result)
    }

    async fn find_company_by_slug(&self, slug: &str) -> AppResult<Option<Company>> {
        let result = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error buscando empresa por slug: {}", e)))?;

        Ok(result)
    }

    async fn companies_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Company>> {
        let result = sqlx::query_as::<_, Company>(
            "SELECT * FROM companies WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando empresas del dueño: {}", e)))?;

        Ok(result)
    }

    async fn category_counts(&self) -> AppResult<BTreeMap<String, i64>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT category, COUNT(*) FROM companies
            WHERE status = 'active'
            GROUP BY category
            ORDER BY category ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error contando categorías: {}", e)))?;

        Ok(rows.into_iter().collect())
    }

    async fn distinct_categories(&self) -> AppResult<Vec<String>> {
        let result: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT category FROM companies WHERE status = 'active' ORDER BY category ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando categorías: {}", e)))?;

        Ok(result)
    }

    async fn distinct_cities(&self) -> AppResult<Vec<String>> {
        let result: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT city FROM companies
            WHERE status = 'active' AND city IS NOT NULL AND city <> ''
            ORDER BY city ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando ciudades: {}", e)))?;

        Ok(result)
    }

    async fn business_hours(&self, company_id: Uuid) -> AppResult<Vec<BusinessHour>> {
        let result = sqlx::query_as::<_, BusinessHour>(
            r#"
            SELECT company_id, day_of_week, opens_at, closes_at, is_closed
            FROM business_hours
            WHERE company_id = $1
            ORDER BY day_of_week ASC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando horarios: {}", e)))?;

        Ok(result)
    }

    async fn social_links(&self, company_id: Uuid) -> AppResult<Vec<SocialLink>> {
        let result = sqlx::query_as::<_, SocialLink>(
            "SELECT company_id, platform, url FROM social_links WHERE company_id = $1",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando redes sociales: {}", e)))?;

        Ok(result)
    }

    async fn list_reviews(&self, search: Option<&str>) -> AppResult<Vec<ReviewWithCompany>> {
        let result = sqlx::query_as::<_, ReviewWithCompany>(
            r#"
            SELECT r.id, r.company_id, r.user_name, r.title, r.comment,
                   r.rating, r.is_verified, r.created_at,
                   c.name AS company_name
            FROM reviews r
            LEFT JOIN companies c ON c.id = r.company_id
            WHERE ($1::text IS NULL
                OR r.user_name ILIKE '%' || $1 || '%'
                OR r.title ILIKE '%' || $1 || '%'
                OR c.name ILIKE '%' || $1 || '%')
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(search)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando reviews: {}", e)))?;

        Ok(result)
    }

    async fn reviews_for_company(&self, company_id: Uuid) -> AppResult<Vec<Review>> {
        let result = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE company_id = $1 ORDER BY created_at DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando reviews de la empresa: {}", e)))?;

        Ok(result)
    }

    async fn reviews_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<ReviewWithCompany>> {
        let result = sqlx::query_as::<_, ReviewWithCompany>(
            r#"
            SELECT r.id, r.company_id, r.user_name, r.title, r.comment,
                   r.rating, r.is_verified, r.created_at,
                   c.name AS company_name
            FROM reviews r
            JOIN companies c ON c.id = r.company_id
            WHERE c.owner_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando reviews del dueño: {}", e)))?;

        Ok(result)
    }

    async fn list_active_promotions(&self) -> AppResult<Vec<Promotion>> {
        let result = sqlx::query_as::<_, Promotion>(
            r#"
            SELECT * FROM promotions
            WHERE status = 'active'
            ORDER BY display_order ASC, created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando promociones: {}", e)))?;

        Ok(result)
    }

    async fn find_promotion_by_id(&self, id: Uuid) -> AppResult<Option<Promotion>> {
        let result = sqlx::query_as::<_, Promotion>("SELECT * FROM promotions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error buscando promoción: {}", e)))?;

        Ok(result)
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error buscando usuario por email: {}", e)))?;

        Ok(result)
    }

    async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error buscando usuario: {}", e)))?;

        Ok(result)
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                id, email, password_hash, full_name, role, status,
                phone, location, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, 'active', $6, $7, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.full_name)
        .bind(new_user.role)
        .bind(&new_user.phone)
        .bind(&new_user.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("El email ya está registrado".to_string())
            }
            _ => AppError::Database(format!("Error creando usuario: {}", e)),
        })?;

        Ok(result)
    }

    async fn count_companies(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error contando empresas: {}", e)))?;

        Ok(count)
    }

    async fn count_companies_with_status(&self, status: CompanyStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error contando empresas por estado: {}", e)))?;

        Ok(count)
    }

    async fn count_users(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error contando usuarios: {}", e)))?;

        Ok(count)
    }

    async fn count_reviews(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error contando reviews: {}", e)))?;

        Ok(count)
    }

    async fn count_active_promotions(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM promotions WHERE status = 'active'")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error contando promociones: {}", e)))?;

        Ok(count)
    }
}
