use anyhow::{Context, Result};

use crate::prompts::Language;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    pub openai_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Analysis language when a request does not specify one.
    pub default_language: Language,
    /// Attempt budget for the score-improvement loop.
    pub max_improvement_retries: u32,
    /// Per-attempt wall-clock budget for a generate+embed round trip.
    pub improvement_attempt_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string())
                .parse::<Language>()
                .map_err(|e| anyhow::anyhow!("DEFAULT_LANGUAGE: {e}"))?,
            max_improvement_retries: std::env::var("MAX_IMPROVEMENT_RETRIES")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<u32>()
                .context("MAX_IMPROVEMENT_RETRIES must be a non-negative integer")?,
            improvement_attempt_timeout_secs: std::env::var("IMPROVEMENT_ATTEMPT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "90".to_string())
                .parse::<u64>()
                .context("IMPROVEMENT_ATTEMPT_TIMEOUT_SECS must be a number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
