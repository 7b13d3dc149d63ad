//! LLM Client — the single point of entry for all chat-completion calls in Lerna.
//!
//! ARCHITECTURAL RULE: No other module may call the DeepSeek API directly.
//! All LLM interactions MUST go through this module.
//!
//! One blocking round-trip per invocation: no retries, no backoff, no
//! streaming. The credential is checked against the placeholder sentinel
//! before any network I/O so a misconfigured deployment fails fast without
//! ever leaving the process.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// DeepSeek chat-completions endpoint used when `DEEPSEEK_API_URL` is unset.
pub const DEFAULT_CHAT_URL: &str = "https://api.deepseek.com/v1/chat/completions";

/// Sentinel shipped in sample configs; treated as "no credential configured".
pub const PLACEHOLDER_API_KEY: &str = "your-deepseek-api-key-here";

/// The model used for all LLM calls in Lerna.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "deepseek-chat";

/// Default generation parameters, matching the product's tuning.
pub const MAX_TOKENS: u32 = 1000;
pub const TEMPERATURE: f32 = 0.7;

/// Hard budget for one round-trip to the completion endpoint.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM API key is not configured (set DEEPSEEK_API_KEY)")]
    Configuration,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("completion response is missing the expected choices structure")]
    ResponseShape,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
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
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatApiError {
    error: ChatApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ChatApiErrorBody {
    message: String,
}

/// Explicit client configuration, injected rather than read from globals.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_URL.to_string(),
            api_key: PLACEHOLDER_API_KEY.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// The single LLM client used by all services in Lerna.
/// Wraps the chat-completions API with a fixed timeout and no retry policy.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    config: ChatConfig,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.timeout)
                .build()
                .expect("Failed to build HTTP client"),
            config,
        }
    }

    /// Fails with `Configuration` when the credential is absent or still the
    /// placeholder. Must run before any request is sent.
    fn check_credential(&self) -> Result<(), LlmError> {
        if self.config.api_key.is_empty() || self.config.api_key == PLACEHOLDER_API_KEY {
            return Err(LlmError::Configuration);
        }
        Ok(())
    }

    /// Sends one user message to the completion endpoint and returns the
    /// first choice's text content, trimmed.
    pub async fn chat(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        self.check_credential()?;

        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
            temperature,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            // Try to parse error message
            let message = serde_json::from_str::<ChatApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let completion: ChatResponse =
            serde_json::from_str(&body).map_err(|_| LlmError::ResponseShape)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LlmError::ResponseShape)?;

        Ok(content.trim().to_string())
    }
}
