use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::embedding::EmbeddingClient;
use crate::llm_client::LlmClient;
use crate::prompts::PromptRegistry;
use crate::scoring::improvement::ImprovementConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    pub embeddings: EmbeddingClient,
    /// Immutable prompt registry, built once at startup and injected here
    /// rather than living as process-global state.
    pub prompts: Arc<PromptRegistry>,
    pub config: Config,
    /// Bounds for the score-improvement loop, derived from config.
    pub improvement: ImprovementConfig,
}
