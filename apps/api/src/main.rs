mod config;
mod db;
mod documents;
mod errors;
mod extraction;
mod models;
mod profiles;
mod routes;
mod state;
mod storage;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::documents::resume::DocumentRenderer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{CareerStore, MemoryCareerStore, PgCareerStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathway API v{}", env!("CARGO_PKG_VERSION"));

    // Profile store: PostgreSQL when configured, otherwise process memory
    let store: Arc<dyn CareerStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            info!("PostgreSQL profile store initialized");
            Arc::new(PgCareerStore::new(pool))
        }
        None => {
            info!("DATABASE_URL not set; profiles are kept in memory");
            Arc::new(MemoryCareerStore::new())
        }
    };

    // Compile document templates once
    let renderer =
        Arc::new(DocumentRenderer::new().context("Failed to compile document templates")?);

    let state = AppState {
        config: config.clone(),
        store,
        renderer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
