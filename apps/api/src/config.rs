use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_CHAT_URL, PLACEHOLDER_API_KEY};

/// Application configuration loaded from environment variables.
///
/// `DEEPSEEK_API_KEY` intentionally has no hard requirement: it defaults to
/// the placeholder sentinel so the service can boot without a key, and the
/// LLM client refuses calls until a real key is configured.
#[derive(Debug, Clone)]
pub struct Config {
    pub deepseek_api_key: String,
    pub deepseek_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            deepseek_api_key: std::env::var("DEEPSEEK_API_KEY")
                .unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string()),
            deepseek_api_url: std::env::var("DEEPSEEK_API_URL")
                .unwrap_or_else(|_| DEFAULT_CHAT_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// True when no real API key has been provided.
    pub fn llm_unconfigured(&self) -> bool {
        self.deepseek_api_key.is_empty() || self.deepseek_api_key == PLACEHOLDER_API_KEY
    }
}
