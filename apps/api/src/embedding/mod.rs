//! Embeddings client — OpenAI `text-embedding-3-small` behind the
//! `EmbeddingProvider` trait.
//!
//! Vectors are only comparable when produced by the same model; every vector
//! this service scores comes from the one client built at startup.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ProviderError;

const OPENAI_EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";
/// Embedding model for all similarity scoring. Hardcoded: mixing vectors
/// from different models silently corrupts every score.
pub const EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Turns text into a fixed-length vector. Implemented by `EmbeddingClient`
/// in production and by scripted stubs in tests.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError>;
}

#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
}

/// OpenAI embeddings API client.
#[derive(Clone)]
pub struct EmbeddingClient {
    client: Client,
    api_key: String,
}

impl EmbeddingClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for EmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        let response = self
            .client
            .post(OPENAI_EMBEDDINGS_URL)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingsRequest {
                model: EMBEDDING_MODEL,
                input: text,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: EmbeddingsResponse = response.json().await?;
        let datum = parsed
            .data
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyContent)?;

        debug!(
            "Embedded {} chars into {} dimensions",
            text.len(),
            datum.embedding.len()
        );

        Ok(datum.embedding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeddings_request_serializes_model_and_input() {
        let request = EmbeddingsRequest {
            model: EMBEDDING_MODEL,
            input: "Rust engineer",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "text-embedding-3-small");
        assert_eq!(json["input"], "Rust engineer");
    }

    #[test]
    fn test_embeddings_response_takes_first_datum() {
        let json = r#"{"data": [{"embedding": [0.1, 0.2]}, {"embedding": [0.9]}]}"#;
        let parsed: EmbeddingsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data[0].embedding, vec![0.1, 0.2]);
    }
}
