//! Axum route handlers for reply drafting.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::reply::{EmailRepliesResponse, EmailSession};
use crate::replies::session::record_session;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct EmailRequest {
    pub email_content: String,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub sender_email: Option<String>,
}

/// POST /api/generate-replies
///
/// Drafts four replies (professional, friendly, brief, detailed), records the
/// session, and returns the replies with the original email.
/// Nothing is recorded unless all four tones succeed, and a failed write
/// fails the request.
pub async fn handle_generate_replies(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<EmailRepliesResponse>, AppError> {
    if request.email_content.trim().is_empty() {
        return Err(AppError::Validation(
            "Email content cannot be empty".to_string(),
        ));
    }

    let replies = state
        .generator
        .generate_all(&request.email_content, request.sender_name.as_deref())
        .await?;

    let session = EmailSession::new(
        request.email_content.clone(),
        request.sender_name.as_deref(),
        request.sender_email.as_deref(),
        replies.clone(),
    );
    record_session(state.store.as_ref(), &session).await?;

    info!(session_id = %session.id, "Generated {} replies", replies.len());

    Ok(Json(EmailRepliesResponse {
        replies,
        original_email: request.email_content,
    }))
}
