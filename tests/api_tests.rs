//! Tests de integración de la API
//!
//! Ejercitan el router completo sobre el backend estático en memoria,
//! el mismo que arranca cuando no hay DATABASE_URL.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use business_directory::config::environment::EnvironmentConfig;
use business_directory::repositories::memory::StaticStore;
use business_directory::routes::create_app;
use business_directory::state::AppState;

fn test_app() -> Router {
    let store = StaticStore::seeded().expect("seed del store estático");
    let state = AppState::new(Arc::new(store), EnvironmentConfig::for_tests());
    create_app(state)
}

async fn read_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("leer body");
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    }
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, read_body(response).await)
}

async fn get_with_token(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, read_body(response).await)
}

async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, read_body(response).await)
}

async fn login_token(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = post_json(
        app,
        "/api/auth/login",
        json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["token"].as_str().expect("token").to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "business-directory");
}

#[tokio::test]
async fn test_login_success_excludes_password_hash() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "selam@bolecafe.com", "password": "owner1234" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["user"]["email"], "selam@bolecafe.com");
    assert_eq!(body["data"]["user"]["role"], "owner");
    assert!(body["data"]["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_are_indistinguishable() {
    let app = test_app();

    let (wrong_status, wrong_body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "selam@bolecafe.com", "password": "incorrecta" }),
    )
    .await;
    let (unknown_status, unknown_body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "noexiste@example.com", "password": "cualquiera" }),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    // Mismo envelope en ambos casos: sin fuga de existencia de cuentas
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_login_inactive_account_is_forbidden_even_with_valid_password() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "suspended@addisdirectory.com", "password": "suspended1" }),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_login_missing_fields_is_bad_request() {
    let app = test_app();

    let (status, _) = post_json(&app, "/api/auth/login", json!({ "password": "x" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "selam@bolecafe.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = test_app();

    let (status, _) = post_json(
        &app,
        "/api/auth/register",
        json!({ "password": "12345678", "full_name": "Sin Email" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        &app,
        "/api/auth/register",
        json!({ "email": "corto@example.com", "password": "1234", "full_name": "Clave Corta" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/auth/register",
        json!({
            "email": "selam@bolecafe.com",
            "password": "otraclave123",
            "full_name": "Duplicada"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_register_then_login_with_default_role() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/auth/register",
        json!({
            "email": "nuevo@example.com",
            "password": "clave12345",
            "full_name": "Usuario Nuevo"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["role"], "user");
    assert_eq!(body["data"]["status"], "active");
    assert!(body["data"].get("password_hash").is_none());

    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "nuevo@example.com", "password": "clave12345" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["full_name"], "Usuario Nuevo");
}

#[tokio::test]
async fn test_categories_counts_only_active_sorted_by_key() {
    let app = test_app();
    let (status, body) = get(&app, "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    // Lalibela Tours está pendiente: Travel no aparece
    assert_eq!(
        body["data"],
        json!({ "Food": 1, "Hospitality": 1, "Retail": 2 })
    );
}

#[tokio::test]
async fn test_reference_data_sorted_without_empty_values() {
    let app = test_app();
    let (status, body) = get(&app, "/api/reference-data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["categories"],
        json!(["Food", "Hospitality", "Retail"])
    );
    // Sheba no tiene ciudad y Lalibela no está activa
    assert_eq!(body["data"]["cities"], json!(["Addis Ababa", "Hawassa"]));
}

#[tokio::test]
async fn test_list_companies_with_filters() {
    let app = test_app();

    let (status, body) = get(&app, "/api/companies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 4);

    let (_, body) = get(&app, "/api/companies?search=BOLE").await;
    let companies = body["data"].as_array().unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0]["name"], "Bole Cafe");

    let (_, body) = get(&app, "/api/companies?category=retail").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = get(&app, "/api/companies?city=addis%20ababa").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_company_detail_by_slug() {
    let app = test_app();
    let (status, body) = get(&app, "/api/companies/slug/bole-cafe").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Bole Cafe");
    assert_eq!(body["data"]["business_hours"].as_array().unwrap().len(), 7);
    assert_eq!(body["data"]["social_links"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["reviews"].as_array().unwrap().len(), 2);

    let (status, body) = get(&app, "/api/companies/slug/no-existe").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_review_search_matches_company_name() {
    let app = test_app();
    let (status, body) = get(&app, "/api/reviews?search=bole").await;

    assert_eq!(status, StatusCode::OK);
    let reviews = body["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    for review in reviews {
        assert_eq!(review["company_name"], "Bole Cafe");
    }
}

#[tokio::test]
async fn test_dangling_review_shows_unknown_company() {
    let app = test_app();
    let (status, body) = get(&app, "/api/reviews").await;

    assert_eq!(status, StatusCode::OK);
    let reviews = body["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 4);
    assert!(reviews
        .iter()
        .any(|r| r["company_name"] == "Unknown company"));
}

#[tokio::test]
async fn test_promotions_active_and_ordered() {
    let app = test_app();
    let (status, body) = get(&app, "/api/promotions").await;

    assert_eq!(status, StatusCode::OK);
    let promotions = body["data"].as_array().unwrap();
    assert_eq!(promotions.len(), 2);
    assert_eq!(promotions[0]["display_order"], 1);
    assert_eq!(promotions[1]["display_order"], 2);
    assert!(promotions[0]["popup"]["features"].is_array());
}

#[tokio::test]
async fn test_promotion_unknown_id_is_not_found() {
    let app = test_app();
    let (status, body) = get(
        &app,
        "/api/promotions/00000000-0000-0000-0000-000000000000",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_dashboard_requires_token() {
    let app = test_app();

    let (status, _) = get(&app, "/api/dashboard/overview").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = get_with_token(&app, "/api/dashboard/overview", "token-basura").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_owner_dashboard_scopes_to_owned_companies() {
    let app = test_app();
    let token = login_token(&app, "selam@bolecafe.com", "owner1234").await;

    let (status, body) = get_with_token(&app, "/api/dashboard/overview", &token).await;
    assert_eq!(status, StatusCode::OK);
    // Bole Cafe (activa) + Lalibela Tours (pendiente)
    assert_eq!(body["data"]["total_companies"], 2);
    assert_eq!(body["data"]["total_reviews"], 2);
    assert_eq!(body["data"]["total_views"], 380);

    let (status, body) = get_with_token(&app, "/api/dashboard/companies", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, body) = get_with_token(&app, "/api/dashboard/reviews", &token).await;
    assert_eq!(status, StatusCode::OK);
    let reviews = body["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    for review in reviews {
        assert_eq!(review["company_name"], "Bole Cafe");
    }
}

#[tokio::test]
async fn test_admin_overview_requires_admin_role() {
    let app = test_app();

    let owner_token = login_token(&app, "selam@bolecafe.com", "owner1234").await;
    let (status, _) = get_with_token(&app, "/api/admin/overview", &owner_token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin_token = login_token(&app, "admin@addisdirectory.com", "admin1234").await;
    let (status, body) = get_with_token(&app, "/api/admin/overview", &admin_token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_companies"], 5);
    assert_eq!(body["data"]["pending_companies"], 1);
    assert_eq!(body["data"]["total_users"], 3);
    assert_eq!(body["data"]["total_reviews"], 4);
    assert_eq!(body["data"]["active_promotions"], 2);
}
