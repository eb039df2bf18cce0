use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::DatabaseConfig;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
  let pool = PgPoolOptions::new()
    .max_connections(config.max_connections)
    .acquire_timeout(config.connect_timeout)
    .connect(&config.url)
    .await
    .context("Failed to connect to the database")?;

  tracing::info!(max_connections = config.max_connections, "Database pool created");

  Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
  sqlx::migrate!("./migrations")
    .run(pool)
    .await
    .context("Failed to apply database migrations")?;

  tracing::info!("Database migrations applied successfully");

  Ok(())
}
