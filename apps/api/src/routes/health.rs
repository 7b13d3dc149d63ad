use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus whether the LLM credential is configured, so
/// operators can spot a placeholder key without hitting an AI endpoint.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "lerna-api",
        "llm_configured": !state.config.llm_unconfigured()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm_client::{ChatClient, ChatConfig, PLACEHOLDER_API_KEY};

    fn state_with_key(api_key: &str) -> AppState {
        AppState {
            llm: ChatClient::new(ChatConfig {
                api_key: api_key.to_string(),
                ..ChatConfig::default()
            }),
            config: Config {
                deepseek_api_key: api_key.to_string(),
                deepseek_api_url: "http://127.0.0.1:1/v1/chat/completions".to_string(),
                port: 8000,
                rust_log: "info".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_health_reports_placeholder_key_as_unconfigured() {
        let Json(body) = health_handler(State(state_with_key(PLACEHOLDER_API_KEY))).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["llm_configured"], false);
    }

    #[tokio::test]
    async fn test_health_reports_real_key_as_configured() {
        let Json(body) = health_handler(State(state_with_key("sk-live-key"))).await;
        assert_eq!(body["llm_configured"], true);
    }
}
