mod db;
mod domain;
mod error;
mod services;
mod state;
mod web;

use crate::domain::coach::{CoachEngine, ProgressStore};
use crate::state::{AppState, SharedState};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (catalog, store) = match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            tracing::info!("Connecting to database...");
            let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
            let pool = SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to connect to database: {}", e);
                    e
                })?;

            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations").run(&pool).await?;

            db::seed::seed_exercises(&pool).await?;
            let catalog = db::load_exercises(&pool).await?;
            tracing::info!("Loaded {} exercises from the catalog", catalog.len());

            let store: Arc<dyn ProgressStore> = Arc::new(db::Database::new(pool));
            (catalog, Some(store))
        }
        Err(_) => {
            // Running without persistence must be asked for explicitly so a
            // missing DATABASE_URL cannot silently drop workout logs.
            let degraded = std::env::var("RUN_WITHOUT_DB").map(|v| v == "1").unwrap_or(false);
            if !degraded {
                anyhow::bail!(
                    "DATABASE_URL missing (set RUN_WITHOUT_DB=1 to run without persistence)"
                );
            }
            tracing::warn!("RUN_WITHOUT_DB=1: using the built-in catalog, progress logging disabled");
            (db::seed::default_catalog(), None)
        }
    };

    let coach = CoachEngine::new(catalog, store);
    let shared: SharedState = Arc::new(AppState { coach });

    let app = web::routes(shared)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
        let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
        format!("0.0.0.0:{}", port)
    });
    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
