mod config;
mod errors;
mod evaluation;
mod llm_client;
mod quiz;
mod reports;
mod routes;
mod state;
mod training;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{ChatClient, ChatConfig, REQUEST_TIMEOUT};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Lerna API v{}", env!("CARGO_PKG_VERSION"));

    if config.llm_unconfigured() {
        warn!("DEEPSEEK_API_KEY is not set; AI endpoints will refuse calls until configured");
    }

    // Initialize LLM client with an explicit, injected configuration
    let llm = ChatClient::new(ChatConfig {
        endpoint: config.deepseek_api_url.clone(),
        api_key: config.deepseek_api_key.clone(),
        timeout: REQUEST_TIMEOUT,
    });
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        llm,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
