// Email reply drafting: tone templates, prompt building, the four-tone
// fan-out and the session audit trail.
// All completion calls go through llm_client::CompletionProvider.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod session;
pub mod tone;
