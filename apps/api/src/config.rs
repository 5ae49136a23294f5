use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Schema holding the document collections.
    pub db_name: String,
    pub openai_api_key: String,
    pub llm_model: String,
    pub llm_base_url: String,
    pub llm_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

// Hand-written so the credential and connection string never reach the logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("db_name", &self.db_name)
            .field("llm_model", &self.llm_model)
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish_non_exhaustive()
    }
}

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let db_name = require("DB_NAME")?;
        if !is_plain_identifier(&db_name) {
            bail!("DB_NAME must be a plain identifier ([A-Za-z_][A-Za-z0-9_]*), got '{db_name}'");
        }

        Ok(Config {
            database_url: require("DATABASE_URL")?,
            db_name,
            openai_api_key: require("OPENAI_API_KEY")?,
            llm_model: or_default("LLM_MODEL", DEFAULT_MODEL),
            llm_base_url: or_default("LLM_BASE_URL", DEFAULT_LLM_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            llm_timeout_secs: or_default("LLM_TIMEOUT_SECS", "60")
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            request_timeout_secs: or_default("REQUEST_TIMEOUT_SECS", "120")
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            port: or_default("PORT", "8001")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: or_default("RUST_LOG", "info"),
        })
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("DATABASE_URL", "postgres://localhost/mail"),
        ("DB_NAME", "email_helper"),
        ("OPENAI_API_KEY", "sk-test"),
    ];

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(REQUIRED)).unwrap();
        assert_eq!(config.llm_model, "gpt-4");
        assert_eq!(config.llm_base_url, DEFAULT_LLM_BASE_URL);
        assert_eq!(config.port, 8001);
        assert_eq!(config.llm_timeout_secs, 60);
        assert_eq!(config.request_timeout_secs, 120);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&REQUIRED[..2])).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_blank_required_value_is_fatal() {
        let mut pairs = REQUIRED.to_vec();
        pairs[0] = ("DATABASE_URL", "   ");
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());
    }

    #[test]
    fn test_db_name_must_be_identifier() {
        let mut pairs = REQUIRED.to_vec();
        pairs[1] = ("DB_NAME", "mail; DROP SCHEMA public");
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(err.to_string().contains("DB_NAME"));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "not-a-port"));
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("LLM_BASE_URL", "http://localhost:9000/v1/"));
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.llm_base_url, "http://localhost:9000/v1");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = Config::from_lookup(lookup_from(REQUIRED)).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-test"));
        assert!(!rendered.contains("postgres://"));
    }
}
