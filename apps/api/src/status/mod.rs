//! Status log — client check-ins, independent of reply drafting.

pub mod handlers;

use crate::models::status::StatusCheck;
use crate::store::{Collection, DocumentStore, StoreError};

/// Upper bound on records returned by a listing.
pub const STATUS_LIST_LIMIT: i64 = 1000;

pub async fn record_status_check(
    store: &dyn DocumentStore,
    client_name: String,
) -> Result<StatusCheck, StoreError> {
    let status = StatusCheck::new(client_name);
    store
        .insert_one(Collection::StatusChecks, serde_json::to_value(&status)?)
        .await?;
    Ok(status)
}

/// At most `STATUS_LIST_LIMIT` records in the store's natural order.
pub async fn list_status_checks(store: &dyn DocumentStore) -> Result<Vec<StatusCheck>, StoreError> {
    store
        .find(Collection::StatusChecks, STATUS_LIST_LIMIT)
        .await?
        .into_iter()
        .map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
        .collect()
}
