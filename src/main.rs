use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use business_directory::config::database::DatabaseConfig;
use business_directory::config::environment::EnvironmentConfig;
use business_directory::repositories::memory::StaticStore;
use business_directory::repositories::postgres::PgStore;
use business_directory::repositories::DynStore;
use business_directory::routes::create_app;
use business_directory::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🏢 Business Directory API");
    info!("=========================");

    let config = EnvironmentConfig::from_env();

    // Seleccionar el backend del Record Store una sola vez
    let store: DynStore = match config.database_url.clone() {
        Some(url) => {
            let db_config = DatabaseConfig::from_environment(&config, url);
            let pool = match db_config.create_pool().await {
                Ok(pool) => pool,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {}", e);
                    return Err(anyhow::anyhow!("Error de base de datos: {}", e));
                }
            };

            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("✅ PostgreSQL conectado y migraciones aplicadas");
            Arc::new(PgStore::new(pool))
        }
        None => {
            info!("📦 DATABASE_URL no configurada: usando el directorio estático en memoria");
            Arc::new(StaticStore::seeded()?)
        }
    };

    let app_state = AppState::new(store, config.clone());
    let app = create_app(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏢 Endpoints públicos:");
    info!("   GET  /api/companies - Listar empresas (search, category, city)");
    info!("   GET  /api/companies/:id - Obtener empresa");
    info!("   GET  /api/companies/slug/:slug - Ficha completa de empresa");
    info!("   GET  /api/categories - Conteo por categoría");
    info!("   GET  /api/reference-data - Categorías y ciudades");
    info!("   GET  /api/reviews - Listar reviews (search)");
    info!("   GET  /api/promotions - Promociones activas");
    info!("   GET  /api/promotions/:id - Obtener promoción");
    info!("🔐 Endpoints de autenticación:");
    info!("   POST /api/auth/login - Login");
    info!("   POST /api/auth/register - Registro");
    info!("📊 Endpoints de dashboard (requieren token):");
    info!("   GET  /api/dashboard/overview - Resumen del dueño");
    info!("   GET  /api/dashboard/companies - Empresas del dueño");
    info!("   GET  /api/dashboard/reviews - Reviews del dueño");
    info!("   GET  /api/admin/overview - Resumen de admin");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
