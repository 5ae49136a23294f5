use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::replies::tone::Tone;

/// Characters of content kept in a preview before the ellipsis.
pub const PREVIEW_CHARS: usize = 100;
const PREVIEW_MARKER: &str = "...";

/// Display-oriented prefix of `content`.
///
/// Content of at most `PREVIEW_CHARS` characters is returned unchanged;
/// longer content is cut at that many characters and gets `...` appended.
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{PREVIEW_MARKER}", &content[..cut]),
        None => content.to_string(),
    }
}

/// One generated reply draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailReply {
    pub id: Uuid,
    pub tone: Tone,
    pub content: String,
    pub preview: String,
}

impl EmailReply {
    /// Fresh id, preview derived from `content`.
    pub fn new(tone: Tone, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            tone,
            preview: preview(&content),
            content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRepliesResponse {
    pub replies: Vec<EmailReply>,
    pub original_email: String,
}

/// Audit record of one successful generate-replies call. Write-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSession {
    pub id: Uuid,
    pub original_email: String,
    pub sender_name: Option<String>,
    pub sender_email: Option<String>,
    pub replies: Vec<EmailReply>,
    pub created_at: DateTime<Utc>,
}
