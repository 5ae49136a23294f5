//! Scripted provider for handler and generator tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{CompletionProvider, CompletionRequest, LlmError};

/// Answers every prompt with a canned reply naming the requested tone.
/// Fails with a 500 API error when the prompt asks for `fail_on_tone`.
#[derive(Default)]
pub struct ScriptedProvider {
    fail_on_tone: Option<&'static str>,
    staggered: bool,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, String, u32, f32)>>,
    finished: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(tone: &'static str) -> Self {
        Self {
            fail_on_tone: Some(tone),
            ..Self::default()
        }
    }

    /// Answers after a per-tone delay: professional slowest, detailed fastest,
    /// so calls finish in reverse of the order they were issued.
    pub fn staggered(mut self) -> Self {
        self.staggered = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// (system, user, max_tokens, temperature) for every call, in arrival order.
    pub fn seen(&self) -> Vec<(String, String, u32, f32)> {
        self.seen.lock().unwrap().clone()
    }

    /// Tone labels in the order their calls finished.
    pub fn finished(&self) -> Vec<String> {
        self.finished.lock().unwrap().clone()
    }
}

fn requested_tone(user_prompt: &str) -> &str {
    user_prompt
        .strip_prefix("Please write a ")
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or("unknown")
}

fn delay_for(tone: &str) -> Duration {
    let millis = match tone {
        "professional" => 40,
        "friendly" => 30,
        "brief" => 20,
        _ => 10,
    };
    Duration::from_millis(millis)
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((
            request.system.to_string(),
            request.user.to_string(),
            request.max_tokens,
            request.temperature,
        ));

        let tone = requested_tone(request.user).to_string();
        if self.staggered {
            tokio::time::sleep(delay_for(&tone)).await;
        }
        self.finished.lock().unwrap().push(tone.clone());

        if self.fail_on_tone == Some(tone.as_str()) {
            return Err(LlmError::Api {
                status: 500,
                message: "scripted failure".to_string(),
            });
        }

        Ok(format!("Dear sender,\n\nThis is the {tone} reply.\n\nBest regards"))
    }

    fn model(&self) -> &str {
        "scripted"
    }
}
