//! Structured keyword extraction over uploaded documents.
//!
//! Extraction is best-effort: a provider failure or a response that does not
//! match the schema stores an empty keyword list. Upload never fails because
//! extraction did.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::{GenerationOptions, GenerationProvider};
use crate::prompts::{render, Language, PromptRegistry};

/// Keyword document stored in `processed_resumes` / `processed_jobs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedKeywords {
    pub extracted_keywords: Vec<String>,
}

/// JSON schema text embedded into the structured-extraction prompts.
pub const KEYWORDS_SCHEMA: &str = r#"{
  "extracted_keywords": ["string"]
}"#;

/// Runs structured keyword extraction with the named registry template
/// (`structured_resume` or `structured_job`). Any failure degrades to an
/// empty list.
pub async fn extract_keywords(
    llm: &dyn GenerationProvider,
    prompts: &PromptRegistry,
    template_name: &'static str,
    language: Language,
    text: &str,
) -> ExtractedKeywords {
    let Some(template) = prompts.get(template_name, language) else {
        warn!("Extraction template {template_name} missing from registry");
        return ExtractedKeywords::default();
    };

    let prompt = render(template, &[("schema", KEYWORDS_SCHEMA), ("text", text)]);

    let value = match llm.generate(&prompt, &GenerationOptions::default()).await {
        Ok(result) => match result.as_json() {
            Ok(value) => value,
            Err(e) => {
                warn!("Extraction response was not JSON: {e}");
                return ExtractedKeywords::default();
            }
        },
        Err(e) => {
            warn!("Extraction call failed: {e}");
            return ExtractedKeywords::default();
        }
    };

    match serde_json::from_value::<ExtractedKeywords>(value) {
        Ok(keywords) => keywords,
        Err(e) => {
            warn!("Extraction output did not match schema: {e}");
            ExtractedKeywords::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::STRUCTURED_RESUME;
    use crate::scoring::testing::ScriptedGenerator;

    #[tokio::test]
    async fn test_extracts_keywords_from_structured_response() {
        let llm = ScriptedGenerator::new(vec![
            r#"{"extracted_keywords": ["Rust", "PostgreSQL", "gRPC"]}"#,
        ]);
        let registry = PromptRegistry::new();

        let keywords =
            extract_keywords(&llm, &registry, STRUCTURED_RESUME, Language::En, "resume text").await;
        assert_eq!(keywords.extracted_keywords, vec!["Rust", "PostgreSQL", "gRPC"]);
    }

    #[tokio::test]
    async fn test_schema_mismatch_degrades_to_empty_list() {
        let llm = ScriptedGenerator::new(vec![r#"{"keywords": ["wrong", "shape"]}"#]);
        let registry = PromptRegistry::new();

        let keywords =
            extract_keywords(&llm, &registry, STRUCTURED_RESUME, Language::En, "resume text").await;
        assert!(keywords.extracted_keywords.is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_degrades_to_empty_list() {
        let llm = ScriptedGenerator::new(vec![]);
        let registry = PromptRegistry::new();

        let keywords =
            extract_keywords(&llm, &registry, STRUCTURED_RESUME, Language::En, "resume text").await;
        assert!(keywords.extracted_keywords.is_empty());
    }

    #[tokio::test]
    async fn test_prompt_embeds_schema_and_document() {
        let llm = ScriptedGenerator::new(vec![r#"{"extracted_keywords": []}"#]);
        let registry = PromptRegistry::new();

        extract_keywords(&llm, &registry, STRUCTURED_RESUME, Language::En, "the resume body").await;

        let prompt = llm.last_prompt().unwrap();
        assert!(prompt.contains("extracted_keywords"));
        assert!(prompt.contains("the resume body"));
    }
}
