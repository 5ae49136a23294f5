use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::store::PgDocumentStore;

const MAX_CONNECTIONS: u32 = 10;

/// Opens the PostgreSQL pool and prepares the document collections.
///
/// The pool is returned alongside the store so `main` can close it on shutdown.
pub async fn connect_store(database_url: &str, db_name: &str) -> Result<(PgPool, PgDocumentStore)> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
        .context("Failed to connect to the document store")?;

    info!("PostgreSQL connection pool established");

    let store = PgDocumentStore::new(pool.clone(), db_name.to_string());
    store
        .ensure_collections()
        .await
        .context("Failed to prepare document collections")?;

    Ok((pool, store))
}
