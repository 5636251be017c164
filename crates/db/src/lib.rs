//! Data-access layer: pool construction, schema probing, the safe-query
//! boundary, and per-resource repositories.

pub mod models;
pub mod repositories;
pub mod safe;
pub mod schema;

use sqlx::postgres::PgPoolOptions;
use taskflow_core::types::Timestamp;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Connectivity probe. Returns the server clock on success.
pub async fn connection_timestamp(pool: &DbPool) -> Result<Timestamp, sqlx::Error> {
    let row: (Timestamp,) = sqlx::query_as("SELECT NOW()").fetch_one(pool).await?;
    Ok(row.0)
}
