//! LLM Client — the single point of entry for all completion calls.
//!
//! No other module talks to the provider over HTTP. Everything above this
//! layer depends on the `CompletionProvider` trait so handlers can run against
//! a scripted provider in tests.
//!
//! Speaks the OpenAI-compatible chat completions API. One request per call,
//! no retries.
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
pub mod testing;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Longest provider message forwarded to API callers.
const MAX_FORWARDED_MESSAGE_CHARS: usize = 200;

/// Strips anything that looks like a credential from a provider message and
/// bounds its length.
fn scrub_provider_message(message: &str) -> String {
    let scrubbed: Vec<&str> = message
        .split_whitespace()
        .map(|word| if looks_like_secret(word) { "[redacted]" } else { word })
        .collect();
    let joined = scrubbed.join(" ");

    match joined.char_indices().nth(MAX_FORWARDED_MESSAGE_CHARS) {
        Some((cut, _)) => format!("{}...", &joined[..cut]),
        None => joined,
    }
}

fn looks_like_secret(word: &str) -> bool {
    let token = word.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '-' && c != '_' && c != '*');
    token.contains("sk-")
        || token.contains("Bearer")
        || (token.len() >= 24
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '*'))
}

impl LlmError {
    /// Short description safe to hand back to API callers.
    /// Provider messages are forwarded only after scrubbing key-like tokens.
    pub fn redacted(&self) -> String {
        match self {
            LlmError::Http(e) if e.is_timeout() => "request to AI provider timed out".to_string(),
            LlmError::Http(_) => "could not reach AI provider".to_string(),
            LlmError::Api { status, message } => {
                let message = scrub_provider_message(message);
                if message.is_empty() {
                    format!("AI provider returned status {status}")
                } else {
                    format!("AI provider returned status {status}: {message}")
                }
            }
            LlmError::Parse(_) => "malformed response from AI provider".to_string(),
            LlmError::EmptyContent => "AI provider returned an empty reply".to_string(),
        }
    }
}

/// One system+user completion.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub system: &'a str,
    pub user: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Anything that can turn a prompt pair into generated text.
///
/// Carried in `AppState` as `Arc<dyn CompletionProvider>`.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the generated text, whitespace-trimmed and non-empty.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError>;

    fn model(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The HTTP completion client shared by every request.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: String, model: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build LLM HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url,
            model,
        })
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: request.system,
                },
                ChatMessage {
                    role: "user",
                    content: request.user,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Try to parse error message
            let message = serde_json::from_str::<ApiError>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(LlmError::EmptyContent)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
