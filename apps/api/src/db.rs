use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use tracing::info;

/// Creates a PostgreSQL connection pool and applies the bundled schema.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    // A plain string runs as a simple query, so the file may hold several statements.
    pool.execute(include_str!("../migrations/0001_career.sql"))
        .await
        .context("failed to apply career schema")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
