//! Reply generation — one completion per tone, fanned out and collected in tone order.
//!
//! Flow: build system/user prompts → provider.complete() per tone →
//!       EmailReply (fresh id + preview) in [professional, friendly, brief, detailed] order.
//!
//! All-or-nothing: the first failing tone aborts the batch and the
//! remaining in-flight calls are dropped.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{error, info};

use crate::errors::AppError;
use crate::llm_client::{CompletionProvider, CompletionRequest};
use crate::models::reply::EmailReply;
use crate::replies::prompts::{
    build_system_prompt, build_user_prompt, MAX_REPLY_TOKENS, REPLY_TEMPERATURE,
};
use crate::replies::tone::Tone;

/// Length of the email excerpt written to error logs.
const LOG_EXCERPT_CHARS: usize = 40;

fn excerpt(text: &str) -> String {
    text.chars()
        .take(LOG_EXCERPT_CHARS)
        .collect::<String>()
        .replace('\n', " ")
}

/// Drafts replies through the shared completion provider.
#[derive(Clone)]
pub struct ReplyGenerator {
    provider: Arc<dyn CompletionProvider>,
}

impl ReplyGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Generates one reply body in `tone`. No retries.
    pub async fn generate(
        &self,
        email_content: &str,
        tone: Tone,
        sender_name: Option<&str>,
    ) -> Result<String, AppError> {
        let system = build_system_prompt(tone.as_str(), sender_name);
        let user = build_user_prompt(tone.as_str(), email_content);

        let request = CompletionRequest {
            system: &system,
            user: &user,
            max_tokens: MAX_REPLY_TOKENS,
            temperature: REPLY_TEMPERATURE,
        };

        self.provider.complete(request).await.map_err(|e| {
            error!(
                tone = %tone,
                email_excerpt = %excerpt(email_content),
                "Reply generation failed: {e}"
            );
            AppError::Llm(e.redacted())
        })
    }

    /// Generates all four tones concurrently.
    /// Output order is the fixed tone order, not completion order.
    pub async fn generate_all(
        &self,
        email_content: &str,
        sender_name: Option<&str>,
    ) -> Result<Vec<EmailReply>, AppError> {
        let calls = Tone::ALL.into_iter().map(|tone| async move {
            let content = self.generate(email_content, tone, sender_name).await?;
            info!(tone = %tone, chars = content.chars().count(), "Reply generated");
            Ok::<_, AppError>(EmailReply::new(tone, content))
        });

        try_join_all(calls).await
    }
}
