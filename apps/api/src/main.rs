mod config;
mod db;
mod documents;
mod embedding;
mod errors;
mod llm_client;
mod models;
mod prompts;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::embedding::EmbeddingClient;
use crate::llm_client::LlmClient;
use crate::prompts::PromptRegistry;
use crate::routes::build_router;
use crate::scoring::improvement::ImprovementConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Uplift API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize embeddings client
    let embeddings = EmbeddingClient::new(config.openai_api_key.clone());
    info!(
        "Embeddings client initialized (model: {})",
        embedding::EMBEDDING_MODEL
    );

    // Build the prompt registry once; handlers share it by reference.
    let prompt_registry = Arc::new(PromptRegistry::new());

    // Improvement loop bounds. The overall deadline leaves headroom for one
    // extra attempt's worth of assessment and preview calls.
    let improvement = ImprovementConfig {
        max_retries: config.max_improvement_retries,
        attempt_timeout: Duration::from_secs(config.improvement_attempt_timeout_secs),
        loop_deadline: Duration::from_secs(
            config.improvement_attempt_timeout_secs
                * u64::from(config.max_improvement_retries.max(1) + 1),
        ),
    };
    info!(
        "Improvement loop: max {} attempts, {}s per attempt",
        improvement.max_retries,
        improvement.attempt_timeout.as_secs()
    );

    // Build app state
    let state = AppState {
        db,
        llm,
        embeddings,
        prompts: prompt_registry,
        config: config.clone(),
        improvement,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
