//! Tone templates — maps a tone to the style instruction placed in the system prompt.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Writing style of a generated reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Friendly,
    Brief,
    Detailed,
}

impl Tone {
    /// Every reply batch is produced in exactly this order.
    pub const ALL: [Tone; 4] = [Tone::Professional, Tone::Friendly, Tone::Brief, Tone::Detailed];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Brief => "brief",
            Tone::Detailed => "detailed",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Tone::Professional => {
                "Write a professional, formal email reply. \
                 Use appropriate business language and maintain a courteous tone."
            }
            Tone::Friendly => {
                "Write a warm, friendly email reply. \
                 Use a conversational tone while remaining respectful and positive."
            }
            Tone::Brief => {
                "Write a concise, direct email reply. \
                 Get straight to the point while remaining polite. Keep it short and clear."
            }
            Tone::Detailed => {
                "Write a comprehensive, empathetic email reply. \
                 Provide thorough responses and show understanding of the sender's concerns."
            }
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tone '{0}'")]
pub struct UnknownTone(pub String);

impl FromStr for Tone {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTone(s.to_string()))
    }
}

/// Style instruction for a tone label. Unknown labels get the professional one.
pub fn instruction_for(label: &str) -> &'static str {
    label
        .parse::<Tone>()
        .unwrap_or(Tone::Professional)
        .instruction()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let labels: Vec<&str> = Tone::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(labels, ["professional", "friendly", "brief", "detailed"]);
    }

    #[test]
    fn test_each_tone_has_distinct_instruction() {
        assert!(Tone::Professional.instruction().contains("formal"));
        assert!(Tone::Friendly.instruction().contains("warm"));
        assert!(Tone::Brief.instruction().contains("concise"));
        assert!(Tone::Detailed.instruction().contains("empathetic"));
    }

    #[test]
    fn test_unknown_label_falls_back_to_professional() {
        assert_eq!(instruction_for("sarcastic"), Tone::Professional.instruction());
        assert_eq!(instruction_for(""), Tone::Professional.instruction());
    }

    #[test]
    fn test_known_label_lookup() {
        assert_eq!(instruction_for("brief"), Tone::Brief.instruction());
        assert_eq!(instruction_for("Friendly"), Tone::Friendly.instruction());
    }

    #[test]
    fn test_parse_round_trips_display() {
        for tone in Tone::ALL {
            assert_eq!(tone.to_string().parse::<Tone>(), Ok(tone));
        }
        assert_eq!(
            "loud".parse::<Tone>(),
            Err(UnknownTone("loud".to_string()))
        );
    }

    #[test]
    fn test_unknown_tone_error_message() {
        let err = "loud".parse::<Tone>().unwrap_err();
        assert_eq!(err.to_string(), "unknown tone 'loud'");
    }

    #[test]
    fn test_serde_uses_lowercase_labels() {
        assert_eq!(serde_json::to_string(&Tone::Brief).unwrap(), "\"brief\"");
        let tone: Tone = serde_json::from_str("\"detailed\"").unwrap();
        assert_eq!(tone, Tone::Detailed);
    }
}
