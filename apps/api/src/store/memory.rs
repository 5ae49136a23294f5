//! In-memory document store for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{Collection, DocumentStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<HashMap<Collection, Vec<Value>>>,
    inserts: AtomicUsize,
    fail_inserts: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every insert fails with a database error once set.
    pub fn failing_inserts() -> Self {
        let store = Self::default();
        store.fail_inserts.store(true, Ordering::SeqCst);
        store
    }

    /// Insert attempts, including failed ones.
    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn documents(&self, collection: Collection) -> Vec<Value> {
        self.docs
            .lock()
            .unwrap()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: Collection, document: Value) -> Result<(), StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        self.docs
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .push(document);
        Ok(())
    }

    async fn find(&self, collection: Collection, limit: i64) -> Result<Vec<Value>, StoreError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .documents(collection)
            .into_iter()
            .take(limit)
            .collect())
    }
}
