/// LLM Client — the single point of entry for all Claude generation calls.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Everything that needs generated text goes through the `GenerationProvider`
/// trait, which this client implements.
///
/// Model: claude-sonnet-4-5 (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::ProviderError;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all generation calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";
const DEFAULT_MAX_TOKENS: u32 = 8192;
/// Hard output cap. Caller-supplied bounds above this are clamped down.
const MAX_OUTPUT_TOKENS: u32 = 16384;
const MAX_TRANSPORT_RETRIES: u32 = 3;

/// Per-call generation knobs. Callers may bound output length; the provider
/// caps it internally at `MAX_OUTPUT_TOKENS`.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub max_tokens: Option<u32>,
}

/// Normalized provider output.
///
/// Models sometimes answer with JSON and sometimes with prose, and some
/// transports hand back pre-parsed objects. Callers get exactly one of two
/// shapes, decided once at ingestion.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    StructuredJson(Value),
    RawText(String),
}

impl GenerationResult {
    /// Normalizes raw model text: fence-stripped content that parses as a
    /// JSON object or array becomes `StructuredJson`, everything else stays
    /// `RawText`.
    pub fn from_text(text: &str) -> Self {
        let stripped = strip_json_fences(text);
        let trimmed = stripped.trim();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
                return GenerationResult::StructuredJson(value);
            }
        }
        GenerationResult::RawText(stripped.to_string())
    }

    /// The response as a JSON value, parsing raw text on demand.
    pub fn as_json(&self) -> Result<Value, ProviderError> {
        match self {
            GenerationResult::StructuredJson(value) => Ok(value.clone()),
            GenerationResult::RawText(text) => {
                serde_json::from_str(text).map_err(ProviderError::Parse)
            }
        }
    }

    /// The response as plain text. Structured responses are re-serialized.
    pub fn into_text(self) -> String {
        match self {
            GenerationResult::RawText(text) => text,
            GenerationResult::StructuredJson(value) => value.to_string(),
        }
    }
}

/// Turns a prompt into generated text. Implemented by `LlmClient` in
/// production and by scripted stubs in tests.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, ProviderError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// The single LLM client used by all services.
/// Wraps the Anthropic Messages API with transport retry logic.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a raw call to the Claude API, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        max_tokens: u32,
    ) -> Result<LlmResponse, ProviderError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<ProviderError> = None;

        for attempt in 0..MAX_TRANSPORT_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(ProviderError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(ProviderError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse error message
                let message = serde_json::from_str::<AnthropicError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(ProviderError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                llm_response.usage.input_tokens, llm_response.usage.output_tokens
            );

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(ProviderError::RateLimited {
            retries: MAX_TRANSPORT_RETRIES,
        }))
    }
}

#[async_trait]
impl GenerationProvider for LlmClient {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, ProviderError> {
        let max_tokens = options
            .max_tokens
            .unwrap_or(DEFAULT_MAX_TOKENS)
            .min(MAX_OUTPUT_TOKENS);

        let response = self.call(prompt, prompts::GENERATION_SYSTEM, max_tokens).await?;
        let text = response.text().ok_or(ProviderError::EmptyContent)?;

        Ok(GenerationResult::from_text(text))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
