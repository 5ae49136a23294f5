use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::info;

use super::{Collection, DocumentStore, StoreError};

/// Document collections stored as JSONB rows, one table per collection,
/// inside the schema named by `DB_NAME`.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
    schema: String,
}

impl PgDocumentStore {
    /// `schema` must already be validated as a plain identifier.
    pub fn new(pool: PgPool, schema: String) -> Self {
        Self { pool, schema }
    }

    fn table(&self, collection: Collection) -> String {
        format!("\"{}\".\"{}\"", self.schema, collection.name())
    }

    /// Creates the schema and collection tables if missing.
    /// No unique index on the document id; ids are UUID v4.
    pub async fn ensure_collections(&self) -> Result<(), StoreError> {
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS \"{}\"", self.schema))
            .execute(&self.pool)
            .await?;

        for collection in Collection::ALL {
            sqlx::query(&format!(
                r#"
                CREATE TABLE IF NOT EXISTS {} (
                    seq         BIGSERIAL PRIMARY KEY,
                    doc         JSONB NOT NULL,
                    inserted_at TIMESTAMPTZ NOT NULL DEFAULT now()
                )
                "#,
                self.table(collection)
            ))
            .execute(&self.pool)
            .await?;
        }

        info!("Document collections ready in schema '{}'", self.schema);
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_one(&self, collection: Collection, document: Value) -> Result<(), StoreError> {
        // Append-only: INSERT, never UPDATE
        sqlx::query(&format!("INSERT INTO {} (doc) VALUES ($1)", self.table(collection)))
            .bind(document)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find(&self, collection: Collection, limit: i64) -> Result<Vec<Value>, StoreError> {
        let docs = sqlx::query_scalar::<_, Value>(&format!(
            "SELECT doc FROM {} ORDER BY seq LIMIT $1",
            self.table(collection)
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(docs)
    }
}
