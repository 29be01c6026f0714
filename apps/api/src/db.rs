use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const MAX_CONNECTIONS: u32 = 10;

/// Opens the read-side pool onto the placement database.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to placement database...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .context("failed to connect to DATABASE_URL")?;

    info!("Placement database pool established ({MAX_CONNECTIONS} connections)");
    Ok(pool)
}
