//! Document store — append-only JSON collections.
//!
//! Handlers only see `Arc<dyn DocumentStore>`. Production uses
//! `PgDocumentStore` (JSONB rows in PostgreSQL); tests use the in-memory store.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgDocumentStore;

/// The collections this service writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    StatusChecks,
    EmailSessions,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::StatusChecks, Collection::EmailSessions];

    pub fn name(self) -> &'static str {
        match self {
            Collection::StatusChecks => "status_checks",
            Collection::EmailSessions => "email_sessions",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Document (de)serialization failed: {0}")]
    Document(#[from] serde_json::Error),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Appends one document. Never updates or replaces.
    async fn insert_one(&self, collection: Collection, document: Value) -> Result<(), StoreError>;

    /// Returns at most `limit` documents in the store's natural order.
    async fn find(&self, collection: Collection, limit: i64) -> Result<Vec<Value>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_names_are_distinct() {
        assert_ne!(
            Collection::StatusChecks.name(),
            Collection::EmailSessions.name()
        );
    }
}
