mod assistant;
mod config;
mod errors;
mod extract;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::{DisabledAssistant, LlmAssistant, SkillAssistant};
use crate::config::Config;
use crate::llm_client::{LlmClient, LlmSettings};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skills API v{}", env!("CARGO_PKG_VERSION"));

    // In-memory store, seeded with the default categories
    let store = Store::new().with_policy(config.reference_policy);
    info!(
        "Store initialized ({} categories, reference policy: {:?})",
        store.category_count(),
        store.policy()
    );

    let assistant = build_assistant(&config)?;

    let state = AppState {
        store: store.into_shared(),
        assistant,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped; in-memory data discarded");
    Ok(())
}

/// Picks the language-model backend: the hosted model when a key is set,
/// otherwise a backend that fails every call.
fn build_assistant(config: &Config) -> Result<Arc<dyn SkillAssistant>> {
    match &config.anthropic_api_key {
        Some(key) => {
            let settings = LlmSettings {
                timeout: Duration::from_secs(config.llm_timeout_secs),
                max_retries: config.llm_max_retries,
            };
            let client = LlmClient::new(key.clone(), settings)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Ok(Arc::new(LlmAssistant(client)))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; /api/translate and /api/recommend will fail");
            Ok(Arc::new(DisabledAssistant))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
