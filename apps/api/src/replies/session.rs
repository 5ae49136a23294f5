//! Session store — append-only audit trail of successful generate-replies calls.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::models::reply::{EmailReply, EmailSession};
use crate::store::{Collection, DocumentStore, StoreError};

/// Treats missing and blank optional fields alike.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl EmailSession {
    pub fn new(
        original_email: String,
        sender_name: Option<&str>,
        sender_email: Option<&str>,
        replies: Vec<EmailReply>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_email,
            sender_name: non_blank(sender_name),
            sender_email: non_blank(sender_email),
            replies,
            created_at: Utc::now(),
        }
    }
}

/// Writes one session document.
pub async fn record_session(
    store: &dyn DocumentStore,
    session: &EmailSession,
) -> Result<(), StoreError> {
    let document = serde_json::to_value(session)?;
    store.insert_one(Collection::EmailSessions, document).await?;
    info!(session_id = %session.id, "Email session recorded");
    Ok(())
}
