//! Backend estático en memoria del Record Store
//!
//! Fallback cuando no hay DATABASE_URL configurada: el mismo contrato
//! de consultas computado sobre colecciones seed. Solo los usuarios
//! van detrás de un RwLock porque el registro escribe.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::{Duration, NaiveTime, Utc};
use sqlx::types::Json;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::company::{
    BusinessHour, Company, CompanyFilters, CompanyStatus, SocialLink, SocialPlatform,
};
use crate::models::promotion::{PopupStat, Promotion, PromotionPopup, PromotionStatus};
use crate::models::review::{Review, ReviewWithCompany};
use crate::models::user::{NewUser, User, UserRole, UserStatus};
use crate::repositories::RecordStore;
use crate::utils::errors::{AppError, AppResult};

pub struct StaticStore {
    companies: Vec<Company>,
    business_hours: Vec<BusinessHour>,
    social_links: Vec<SocialLink>,
    reviews: Vec<Review>,
    promotions: Vec<Promotion>,
    users: RwLock<Vec<User>>,
}

impl StaticStore {
    pub fn new(
        companies: Vec<Company>,
        business_hours: Vec<BusinessHour>,
        social_links: Vec<SocialLink>,
        reviews: Vec<Review>,
        promotions: Vec<Promotion>,
        users: Vec<User>,
    ) -> Self {
        Self {
            companies,
            business_hours,
            social_links,
            reviews,
            promotions,
            users: RwLock::new(users),
        }
    }

    /// Construir el store con el dataset estático del directorio.
    /// Los hashes de contraseña se calculan al arrancar.
    pub fn seeded() -> AppResult<Self> {
        let now = Utc::now();

        let admin_id = Uuid::new_v4();
        let owner_id = Uuid::new_v4();
        let inactive_id = Uuid::new_v4();

        let hash = |password: &str| -> AppResult<String> {
            bcrypt::hash(password, bcrypt::DEFAULT_COST)
                .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))
        };

        let users = vec![
            User {
                id: admin_id,
                email: "admin@addisdirectory.com".to_string(),
                password_hash: hash("admin1234")?,
                full_name: "Administrador".to_string(),
                role: UserRole::Admin,
                status: UserStatus::Active,
                phone: None,
                location: None,
                created_at: now - Duration::days(120),
                updated_at: now - Duration::days(120),
            },
            User {
                id: owner_id,
                email: "selam@bolecafe.com".to_string(),
                password_hash: hash("owner1234")?,
                full_name: "Selam Bekele".to_string(),
                role: UserRole::Owner,
                status: UserStatus::Active,
                phone: Some("+251 911 234 567".to_string()),
                location: Some("Addis Ababa".to_string()),
                created_at: now - Duration::days(90),
                updated_at: now - Duration::days(10),
            },
            User {
                id: inactive_id,
                email: "suspended@addisdirectory.com".to_string(),
                password_hash: hash("suspended1")?,
                full_name: "Cuenta Suspendida".to_string(),
                role: UserRole::User,
                status: UserStatus::Inactive,
                phone: None,
                location: None,
                created_at: now - Duration::days(60),
                updated_at: now - Duration::days(5),
            },
        ];

        let seed_company = |slug: &str,
                            name: &str,
                            category: &str,
                            city: Option<&str>,
                            owner: Option<Uuid>,
                            status: CompanyStatus,
                            rating: f64,
                            review_count: i32,
                            view_count: i32,
                            is_featured: bool| Company {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            name: name.to_string(),
            description: None,
            category: category.to_string(),
            subcategory: None,
            city: city.map(str::to_string),
            region: None,
            country: Some("Ethiopia".to_string()),
            latitude: None,
            longitude: None,
            email: None,
            phone: None,
            website: None,
            logo_url: None,
            cover_url: None,
            rating,
            review_count,
            view_count,
            is_verified: false,
            is_featured,
            is_premium: false,
            status,
            owner_id: owner,
            created_at: now - Duration::days(30),
            updated_at: now - Duration::days(1),
        };

        let mut bole_cafe = seed_company(
            "bole-cafe",
            "Bole Cafe",
            "Food",
            Some("Addis Ababa"),
            Some(owner_id),
            CompanyStatus::Active,
            4.6,
            2,
            380,
            true,
        );
        bole_cafe.description = Some(
            "Café de especialidad en el corazón de Bole, con granos de Yirgacheffe y Sidamo."
                .to_string(),
        );
        bole_cafe.email = Some("hola@bolecafe.com".to_string());
        bole_cafe.phone = Some("+251 911 234 567".to_string());
        bole_cafe.website = Some("https://bolecafe.com".to_string());
        bole_cafe.is_verified = true;

        let mut merkato = seed_company(
            "merkato-electronics",
            "Merkato Electronics",
            "Retail",
            Some("Addis Ababa"),
            None,
            CompanyStatus::Active,
            4.1,
            1,
            210,
            false,
        );
        merkato.description =
            Some("Electrónica y repuestos en el mercado abierto más grande de África.".to_string());

        let mut hawassa_lodge = seed_company(
            "hawassa-lakeside-lodge",
            "Hawassa Lakeside Lodge",
            "Hospitality",
            Some("Hawassa"),
            None,
            CompanyStatus::Active,
            4.8,
            0,
            95,
            false,
        );
        hawassa_lodge.is_verified = true;

        // Tienda solo online: sin ciudad, no debe aparecer en reference-data
        let sheba = seed_company(
            "sheba-online-store",
            "Sheba Online Store",
            "Retail",
            None,
            None,
            CompanyStatus::Active,
            3.9,
            0,
            60,
            false,
        );

        // Pendiente de aprobación: visible solo en el dashboard del dueño
        let lalibela = seed_company(
            "lalibela-tours",
            "Lalibela Tours",
            "Travel",
            Some("Lalibela"),
            Some(owner_id),
            CompanyStatus::Pending,
            0.0,
            0,
            0,
            false,
        );

        let business_hours = (0..7)
            .map(|day| BusinessHour {
                company_id: bole_cafe.id,
                day_of_week: day,
                opens_at: if day < 6 { NaiveTime::from_hms_opt(7, 30, 0) } else { None },
                closes_at: if day < 6 { NaiveTime::from_hms_opt(20, 0, 0) } else { None },
                is_closed: day == 6,
            })
            .collect();

        let social_links = vec![
            SocialLink {
                company_id: bole_cafe.id,
                platform: SocialPlatform::Facebook,
                url: "https://facebook.com/bolecafe".to_string(),
            },
            SocialLink {
                company_id: bole_cafe.id,
                platform: SocialPlatform::Instagram,
                url: "https://instagram.com/bolecafe".to_string(),
            },
        ];

        let reviews = vec![
            Review {
                id: Uuid::new_v4(),
                company_id: bole_cafe.id,
                user_name: "Abel Tesfaye".to_string(),
                title: "El mejor macchiato de la ciudad".to_string(),
                comment: "Atención rápida y granos recién tostados.".to_string(),
                rating: 5.0,
                is_verified: true,
                created_at: now - Duration::days(3),
            },
            Review {
                id: Uuid::new_v4(),
                company_id: bole_cafe.id,
                user_name: "Hanna Girma".to_string(),
                title: "Buen ambiente".to_string(),
                comment: "Ideal para trabajar por las mañanas.".to_string(),
                rating: 4.0,
                is_verified: false,
                created_at: now - Duration::days(12),
            },
            Review {
                id: Uuid::new_v4(),
                company_id: merkato.id,
                user_name: "Dawit Alemu".to_string(),
                title: "Precios justos".to_string(),
                comment: "Encontré el repuesto que buscaba en minutos.".to_string(),
                rating: 4.0,
                is_verified: false,
                created_at: now - Duration::days(7),
            },
            // Referencia colgante a propósito: la empresa ya no existe
            Review {
                id: Uuid::new_v4(),
                company_id: Uuid::new_v4(),
                user_name: "Marta Yohannes".to_string(),
                title: "Cerraron hace meses".to_string(),
                comment: "El local ya no está en esa dirección.".to_string(),
                rating: 2.0,
                is_verified: false,
                created_at: now - Duration::days(45),
            },
        ];

        let promotions = vec![
            Promotion {
                id: Uuid::new_v4(),
                title: "Destaca tu negocio".to_string(),
                description: "Aparece primero en los resultados de tu categoría.".to_string(),
                button_text: "Empezar".to_string(),
                button_link: "/premium".to_string(),
                button_color: Some("#f59e0b".to_string()),
                text_color: Some("#1f2937".to_string()),
                status: PromotionStatus::Active,
                display_order: 2,
                popup: Json(PromotionPopup {
                    subtitle: "Plan Premium".to_string(),
                    image_url: "/images/promos/premium.png".to_string(),
                    price: "1200 ETB/mes".to_string(),
                    features: vec![
                        "Posición destacada".to_string(),
                        "Insignia verificada".to_string(),
                        "Estadísticas de visitas".to_string(),
                    ],
                    stats: Some(vec![PopupStat {
                        label: "Empresas listadas".to_string(),
                        value: "500+".to_string(),
                    }]),
                }),
                created_at: now - Duration::days(20),
            },
            Promotion {
                id: Uuid::new_v4(),
                title: "Registra tu empresa gratis".to_string(),
                description: "Crea tu perfil y recibe reseñas de tus clientes.".to_string(),
                button_text: "Registrarme".to_string(),
                button_link: "/register".to_string(),
                button_color: None,
                text_color: None,
                status: PromotionStatus::Active,
                display_order: 1,
                popup: Json(PromotionPopup {
                    subtitle: "Plan Gratuito".to_string(),
                    image_url: "/images/promos/free.png".to_string(),
                    price: "0 ETB".to_string(),
                    features: vec![
                        "Perfil público".to_string(),
                        "Horarios y contacto".to_string(),
                    ],
                    stats: None,
                }),
                created_at: now - Duration::days(40),
            },
            Promotion {
                id: Uuid::new_v4(),
                title: "Campaña de temporada".to_string(),
                description: "Borrador de la campaña de fin de año.".to_string(),
                button_text: "Ver más".to_string(),
                button_link: "/campaigns/meskel".to_string(),
                button_color: None,
                text_color: None,
                status: PromotionStatus::Inactive,
                display_order: 3,
                popup: Json(PromotionPopup {
                    subtitle: "Meskel".to_string(),
                    image_url: "/images/promos/meskel.png".to_string(),
                    price: "800 ETB".to_string(),
                    features: vec![],
                    stats: None,
                }),
                created_at: now - Duration::days(5),
            },
        ];

        Ok(Self::new(
            vec![bole_cafe, merkato, hawassa_lodge, sheba, lalibela],
            business_hours,
            social_links,
            reviews,
            promotions,
            users,
        ))
    }

    fn resolve_company_name(&self, company_id: Uuid) -> Option<String> {
        self.companies
            .iter()
            .find(|c| c.id == company_id)
            .map(|c| c.name.clone())
    }

    fn annotate(&self, review: &Review) -> ReviewWithCompany {
        ReviewWithCompany {
            id: review.id,
            company_id: review.company_id,
            user_name: review.user_name.clone(),
            title: review.title.clone(),
            comment: review.comment.clone(),
            rating: review.rating,
            is_verified: review.is_verified,
            created_at: review.created_at,
            company_name: self.resolve_company_name(review.company_id),
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl RecordStore for StaticStore {
    async fn list_companies(&self, filters: &CompanyFilters) -> AppResult<Vec<Company>> {
        let mut result: Vec<Company> = self
            .companies
            .iter()
            .filter(|c| c.status == CompanyStatus::Active)
            .filter(|c| match filters.search.as_deref() {
                Some(term) => {
                    contains_ci(&c.name, term)
                        || c.description
                            .as_deref()
                            .map(|d| contains_ci(d, term))
                            .unwrap_or(false)
                }
                None => true,
            })
            .filter(|c| match filters.category.as_deref() {
                Some(category) => c.category.eq_ignore_ascii_case(category),
                None => true,
            })
            .filter(|c| match filters.city.as_deref() {
                Some(city) => c
                    .city
                    .as_deref()
                    .map(|value| value.eq_ignore_ascii_case(city))
                    .unwrap_or(false),
                None => true,
            })
            .cloned()
            .collect();

        result.sort_by(|a, b| {
            b.is_featured
                .cmp(&a.is_featured)
                .then(b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal))
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(result)
    }

    async fn find_company_by_id(&self, id: Uuid) -> AppResult<Option<Company>> {
        Ok(self.companies.iter().find(|c| c.id == id).cloned())
    }

    async fn find_company_by_slug(&self, slug: &str) -> AppResult<Option<Company>> {
        Ok(self.companies.iter().find(|c| c.slug == slug).cloned())
    }

    async fn companies_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Company>> {
        let mut result: Vec<Company> = self
            .companies
            .iter()
            .filter(|c| c.owner_id == Some(owner_id))
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn category_counts(&self) -> AppResult<BTreeMap<String, i64>> {
        let mut counts = BTreeMap::new();
        for company in self.companies.iter().filter(|c| c.status == CompanyStatus::Active) {
            *counts.entry(company.category.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    async fn distinct_categories(&self) -> AppResult<Vec<String>> {
        let categories: BTreeSet<String> = self
            .companies
            .iter()
            .filter(|c| c.status == CompanyStatus::Active)
            .map(|c| c.category.clone())
            .collect();

        Ok(categories.into_iter().collect())
    }

    async fn distinct_cities(&self) -> AppResult<Vec<String>> {
        let cities: BTreeSet<String> = self
            .companies
            .iter()
            .filter(|c| c.status == CompanyStatus::Active)
            .filter_map(|c| c.city.clone())
            .filter(|city| !city.trim().is_empty())
            .collect();

        Ok(cities.into_iter().collect())
    }

    async fn business_hours(&self, company_id: Uuid) -> AppResult<Vec<BusinessHour>> {
        let mut result: Vec<BusinessHour> = self
            .business_hours
            .iter()
            .filter(|h| h.company_id == company_id)
            .cloned()
            .collect();

        result.sort_by_key(|h| h.day_of_week);
        Ok(result)
    }

    async fn social_links(&self, company_id: Uuid) -> AppResult<Vec<SocialLink>> {
        Ok(self
            .social_links
            .iter()
            .filter(|l| l.company_id == company_id)
            .cloned()
            .collect())
    }

    async fn list_reviews(&self, search: Option<&str>) -> AppResult<Vec<ReviewWithCompany>> {
        let mut result: Vec<ReviewWithCompany> = self
            .reviews
            .iter()
            .map(|r| self.annotate(r))
            .filter(|r| match search {
                Some(term) => {
                    contains_ci(&r.user_name, term)
                        || contains_ci(&r.title, term)
                        || r.company_name
                            .as_deref()
                            .map(|name| contains_ci(name, term))
                            .unwrap_or(false)
                }
                None => true,
            })
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn reviews_for_company(&self, company_id: Uuid) -> AppResult<Vec<Review>> {
        let mut result: Vec<Review> = self
            .reviews
            .iter()
            .filter(|r| r.company_id == company_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn reviews_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<ReviewWithCompany>> {
        let owned: Vec<Uuid> = self
            .companies
            .iter()
            .filter(|c| c.owner_id == Some(owner_id))
            .map(|c| c.id)
            .collect();

        let mut result: Vec<ReviewWithCompany> = self
            .reviews
            .iter()
            .filter(|r| owned.contains(&r.company_id))
            .map(|r| self.annotate(r))
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn list_active_promotions(&self) -> AppResult<Vec<Promotion>> {
        let mut result: Vec<Promotion> = self
            .promotions
            .iter()
            .filter(|p| p.status == PromotionStatus::Active)
            .cloned()
            .collect();

        result.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(result)
    }

    async fn find_promotion_by_id(&self, id: Uuid) -> AppResult<Option<Promotion>> {
        Ok(self.promotions.iter().find(|p| p.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            full_name: new_user.full_name,
            role: new_user.role,
            status: UserStatus::Active,
            phone: new_user.phone,
            location: new_user.location,
            created_at: now,
            updated_at: now,
        };

        users.push(user.clone());
        Ok(user)
    }

    async fn count_companies(&self) -> AppResult<i64> {
        Ok(self.companies.len() as i64)
    }

    async fn count_companies_with_status(&self, status: CompanyStatus) -> AppResult<i64> {
        Ok(self.companies.iter().filter(|c| c.status == status).count() as i64)
    }

    async fn count_users(&self) -> AppResult<i64> {
        Ok(self.users.read().await.len() as i64)
    }

    async fn count_reviews(&self) -> AppResult<i64> {
        Ok(self.reviews.len() as i64)
    }

    async fn count_active_promotions(&self) -> AppResult<i64> {
        Ok(self
            .promotions
            .iter()
            .filter(|p| p.status == PromotionStatus::Active)
            .count() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str, category: &str, city: Option<&str>, status: CompanyStatus) -> Company {
        let now = Utc::now();
        Company {
            id: Uuid::new_v4(),
            slug: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            description: None,
            category: category.to_string(),
            subcategory: None,
            city: city.map(str::to_string),
            region: None,
            country: None,
            latitude: None,
            longitude: None,
            email: None,
            phone: None,
            website: None,
            logo_url: None,
            cover_url: None,
            rating: 4.0,
            review_count: 0,
            view_count: 0,
            is_verified: false,
            is_featured: false,
            is_premium: false,
            status,
            owner_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn review(company_id: Uuid, user_name: &str, title: &str) -> Review {
        Review {
            id: Uuid::new_v4(),
            company_id,
            user_name: user_name.to_string(),
            title: title.to_string(),
            comment: "comentario".to_string(),
            rating: 4.0,
            is_verified: false,
            created_at: Utc::now(),
        }
    }

    fn store_with_companies(companies: Vec<Company>) -> StaticStore {
        StaticStore::new(companies, vec![], vec![], vec![], vec![], vec![])
    }

    #[tokio::test]
    async fn test_category_counts_sorted_by_key() {
        let store = store_with_companies(vec![
            company("Tienda A", "Retail", None, CompanyStatus::Active),
            company("Tienda B", "Retail", None, CompanyStatus::Active),
            company("Cafetería", "Food", None, CompanyStatus::Active),
        ]);

        let counts = store.category_counts().await.unwrap();
        let entries: Vec<(String, i64)> = counts.into_iter().collect();

        assert_eq!(
            entries,
            vec![("Food".to_string(), 1), ("Retail".to_string(), 2)]
        );
    }

    #[tokio::test]
    async fn test_category_counts_skip_non_active() {
        let store = store_with_companies(vec![
            company("Activa", "Retail", None, CompanyStatus::Active),
            company("Pendiente", "Retail", None, CompanyStatus::Pending),
        ]);

        let counts = store.category_counts().await.unwrap();
        assert_eq!(counts.get("Retail"), Some(&1));
    }

    #[tokio::test]
    async fn test_list_companies_search_is_case_insensitive() {
        let store = store_with_companies(vec![
            company("Bole Cafe", "Food", Some("Addis Ababa"), CompanyStatus::Active),
            company("Merkato Electronics", "Retail", Some("Addis Ababa"), CompanyStatus::Active),
        ]);

        let filters = CompanyFilters {
            search: Some("BOLE".to_string()),
            ..Default::default()
        };
        let result = store.list_companies(&filters).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bole Cafe");
    }

    #[tokio::test]
    async fn test_list_companies_excludes_pending() {
        let store = store_with_companies(vec![
            company("Activa", "Food", None, CompanyStatus::Active),
            company("Pendiente", "Food", None, CompanyStatus::Pending),
            company("Suspendida", "Food", None, CompanyStatus::Suspended),
        ]);

        let result = store.list_companies(&CompanyFilters::default()).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Activa");
    }

    #[tokio::test]
    async fn test_companies_by_owner_empty_is_ok() {
        let store = store_with_companies(vec![company(
            "Sin dueño",
            "Food",
            None,
            CompanyStatus::Active,
        )]);

        let result = store.companies_by_owner(Uuid::new_v4()).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_distinct_cities_excludes_empty_and_duplicates() {
        let store = store_with_companies(vec![
            company("A", "Food", Some("Hawassa"), CompanyStatus::Active),
            company("B", "Food", Some("Addis Ababa"), CompanyStatus::Active),
            company("C", "Food", Some("Addis Ababa"), CompanyStatus::Active),
            company("D", "Food", Some(""), CompanyStatus::Active),
            company("E", "Food", None, CompanyStatus::Active),
        ]);

        let cities = store.distinct_cities().await.unwrap();
        assert_eq!(cities, vec!["Addis Ababa".to_string(), "Hawassa".to_string()]);
    }

    #[tokio::test]
    async fn test_review_search_matches_company_name() {
        let bole = company("Bole Cafe", "Food", None, CompanyStatus::Active);
        let bole_id = bole.id;
        let store = StaticStore::new(
            vec![bole],
            vec![],
            vec![],
            vec![
                review(bole_id, "Abel", "Excelente servicio"),
                review(Uuid::new_v4(), "Hanna", "Otra reseña"),
            ],
            vec![],
            vec![],
        );

        // "bole" solo aparece en el nombre de la empresa, no en la review
        let result = store.list_reviews(Some("bole")).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].company_name.as_deref(), Some("Bole Cafe"));
    }

    #[tokio::test]
    async fn test_dangling_review_has_no_company_name() {
        let store = StaticStore::new(
            vec![],
            vec![],
            vec![],
            vec![review(Uuid::new_v4(), "Marta", "Ya no existe")],
            vec![],
            vec![],
        );

        let result = store.list_reviews(None).await.unwrap();
        assert_eq!(result.len(), 1);
        assert!(result[0].company_name.is_none());
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email_conflicts() {
        let store = StaticStore::seeded().unwrap();

        let duplicate = NewUser {
            email: "selam@bolecafe.com".to_string(),
            password_hash: "hash".to_string(),
            full_name: "Otro".to_string(),
            role: UserRole::User,
            phone: None,
            location: None,
        };

        let result = store.create_user(duplicate).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_seeded_promotions_active_and_ordered() {
        let store = StaticStore::seeded().unwrap();

        let promotions = store.list_active_promotions().await.unwrap();
        assert_eq!(promotions.len(), 2);
        assert!(promotions
            .windows(2)
            .all(|w| w[0].display_order <= w[1].display_order));

        let missing = store.find_promotion_by_id(Uuid::new_v4()).await.unwrap();
        assert!(missing.is_none());
    }
}
