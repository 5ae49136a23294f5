// Prompt templates for reply drafting.

use crate::replies::tone::instruction_for;

/// Output budget per reply.
pub const MAX_REPLY_TOKENS: u32 = 500;
/// Mild variance between runs.
pub const REPLY_TEMPERATURE: f32 = 0.7;

const ASSISTANT_ROLE: &str =
    "You are an AI email assistant that helps users craft appropriate email replies.";

const GUIDELINES: &str = "Guidelines:
- Match the formality level of the original email
- Be helpful and responsive to their requests/questions
- Keep the reply relevant to the original email content
- Sign off appropriately for the tone
- Don't include subject lines or email headers
- Just provide the email body content";

/// System prompt: role, tone instruction, guidelines, then the sender's name if known.
pub fn build_system_prompt(tone_label: &str, sender_name: Option<&str>) -> String {
    let sender_context = sender_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| format!(" The sender's name is {name}."))
        .unwrap_or_default();

    format!(
        "{ASSISTANT_ROLE} {}\n\n{GUIDELINES}{sender_context}",
        instruction_for(tone_label)
    )
}

/// User prompt: the email verbatim between `---` delimiters.
pub fn build_user_prompt(tone_label: &str, email_content: &str) -> String {
    format!(
        "Please write a {tone_label} email reply to the following email:\n\n\
         ---\n{email_content}\n---\n\n\
         Write only the email body content (no subject line or headers)."
    )
}
