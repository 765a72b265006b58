//! Domain-compatibility assessment.
//!
//! Cosine similarity rewards surface overlap, so a surgeon's resume can
//! score respectably against a software job. The assessor asks the
//! generation model to classify how compatible the two professional areas
//! are and returns a damping multiplier applied to the raw score.
//!
//! Fail-open: classification failures of any kind yield a fixed fallback
//! assessment. Scoring must never abort because classification failed.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::ProviderError;
use crate::llm_client::{GenerationOptions, GenerationProvider};
use crate::prompts::Language;
use crate::scoring::prompts::compatibility_prompt;

/// Classification input beyond this many characters is not sent to the
/// model. Coarse domain classification does not need the full documents;
/// this is a cost and latency control, not a correctness requirement.
const ASSESSMENT_INPUT_CHARS: usize = 2000;

/// Ordinal compatibility scale. Variant order matters: `Ord` follows
/// increasing compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLevel {
    Incompatible,
    Low,
    Moderate,
    High,
    Excellent,
}

impl CompatibilityLevel {
    /// Designer multiplier anchor for each level, monotone across the scale.
    pub fn default_multiplier(&self) -> f64 {
        match self {
            CompatibilityLevel::Incompatible => 0.2,
            CompatibilityLevel::Low => 0.4,
            CompatibilityLevel::Moderate => 0.6,
            CompatibilityLevel::High => 0.8,
            CompatibilityLevel::Excellent => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityLevel::Incompatible => "incompatible",
            CompatibilityLevel::Low => "low",
            CompatibilityLevel::Moderate => "moderate",
            CompatibilityLevel::High => "high",
            CompatibilityLevel::Excellent => "excellent",
        }
    }
}

/// One classification outcome. Produced fresh per call; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityAssessment {
    pub level: CompatibilityLevel,
    /// Damping factor in (0, 1] applied to the raw similarity score.
    pub multiplier: f64,
    pub reasons: Vec<String>,
    pub resume_area: String,
    pub job_area: String,
}

/// JSON shape the classifier prompt demands.
#[derive(Debug, Deserialize)]
struct RawAssessment {
    compatibility_level: CompatibilityLevel,
    score_multiplier: f64,
    #[serde(default)]
    reasons: Vec<String>,
    #[serde(default)]
    resume_area: String,
    #[serde(default)]
    job_area: String,
}

pub struct CompatibilityAssessor {
    language: Language,
    fallback_level: CompatibilityLevel,
}

impl CompatibilityAssessor {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            fallback_level: CompatibilityLevel::Moderate,
        }
    }

    /// Overrides the level used when classification fails.
    #[allow(dead_code)]
    pub fn with_fallback_level(mut self, level: CompatibilityLevel) -> Self {
        self.fallback_level = level;
        self
    }

    /// Classifies domain compatibility between a resume and a job posting.
    ///
    /// One provider call, no retry at this layer: a single failure goes
    /// straight to the fallback, which is why this does not return `Result`.
    pub async fn assess(
        &self,
        llm: &dyn GenerationProvider,
        resume_text: &str,
        job_text: &str,
    ) -> CompatibilityAssessment {
        let prompt = compatibility_prompt(
            self.language,
            truncate_chars(resume_text, ASSESSMENT_INPUT_CHARS),
            truncate_chars(job_text, ASSESSMENT_INPUT_CHARS),
        );

        match classify(llm, &prompt).await {
            Ok(assessment) => {
                info!(
                    "Compatibility: {} (multiplier {:.2}), {} vs {}",
                    assessment.level.as_str(),
                    assessment.multiplier,
                    assessment.resume_area,
                    assessment.job_area
                );
                assessment
            }
            Err(e) => {
                warn!("Compatibility classification failed, using fallback: {e}");
                self.fallback_assessment()
            }
        }
    }

    /// The fixed assessment used when classification fails.
    pub fn fallback_assessment(&self) -> CompatibilityAssessment {
        CompatibilityAssessment {
            level: self.fallback_level,
            multiplier: self.fallback_level.default_multiplier(),
            reasons: vec![fallback_reason(self.language).to_string()],
            resume_area: String::new(),
            job_area: String::new(),
        }
    }
}

async fn classify(
    llm: &dyn GenerationProvider,
    prompt: &str,
) -> Result<CompatibilityAssessment, ProviderError> {
    let result = llm.generate(prompt, &GenerationOptions::default()).await?;
    let value = result.as_json()?;
    let raw: RawAssessment = serde_json::from_value(value).map_err(ProviderError::Parse)?;

    Ok(CompatibilityAssessment {
        level: raw.compatibility_level,
        multiplier: sanitize_multiplier(raw.score_multiplier, raw.compatibility_level),
        reasons: raw.reasons,
        resume_area: raw.resume_area,
        job_area: raw.job_area,
    })
}

/// First `max` characters of `text`, respecting char boundaries.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Models occasionally return multipliers outside (0, 1]; those fall back to
/// the level's anchor so the assessment invariant holds.
fn sanitize_multiplier(value: f64, level: CompatibilityLevel) -> f64 {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        value
    } else {
        level.default_multiplier()
    }
}

fn fallback_reason(language: Language) -> &'static str {
    match language {
        Language::En => "Automatic compatibility analysis unavailable",
        Language::Pt => "Análise automática de compatibilidade não disponível",
        Language::Es => "Análisis automático de compatibilidad no disponible",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::testing::ScriptedGenerator;

    #[tokio::test]
    async fn test_assess_parses_structured_response() {
        let llm = ScriptedGenerator::new(vec![
            r#"{"compatibility_level": "high", "score_multiplier": 0.8,
                "reasons": ["adjacent stacks"], "resume_area": "backend", "job_area": "platform"}"#,
        ]);
        let assessment = CompatibilityAssessor::new(Language::En)
            .assess(&llm, "resume", "job")
            .await;

        assert_eq!(assessment.level, CompatibilityLevel::High);
        assert!((assessment.multiplier - 0.8).abs() < 1e-9);
        assert_eq!(assessment.reasons, vec!["adjacent stacks"]);
        assert_eq!(assessment.resume_area, "backend");
    }

    #[tokio::test]
    async fn test_assess_accepts_fenced_json() {
        let llm = ScriptedGenerator::new(vec![
            "```json\n{\"compatibility_level\": \"excellent\", \"score_multiplier\": 1.0}\n```",
        ]);
        let assessment = CompatibilityAssessor::new(Language::En)
            .assess(&llm, "resume", "job")
            .await;
        assert_eq!(assessment.level, CompatibilityLevel::Excellent);
    }

    #[tokio::test]
    async fn test_malformed_response_yields_fallback() {
        let llm = ScriptedGenerator::new(vec!["I think these are fairly compatible overall."]);
        let assessment = CompatibilityAssessor::new(Language::En)
            .assess(&llm, "resume", "job")
            .await;

        assert_eq!(assessment.level, CompatibilityLevel::Moderate);
        assert!((assessment.multiplier - 0.6).abs() < 1e-9);
        assert_eq!(
            assessment.reasons,
            vec!["Automatic compatibility analysis unavailable"]
        );
    }

    #[tokio::test]
    async fn test_provider_error_yields_fallback() {
        // Empty script: the stub errors on any call.
        let llm = ScriptedGenerator::new(vec![]);
        let assessment = CompatibilityAssessor::new(Language::Pt)
            .assess(&llm, "resume", "job")
            .await;

        assert_eq!(assessment.level, CompatibilityLevel::Moderate);
        assert_eq!(
            assessment.reasons,
            vec!["Análise automática de compatibilidade não disponível"]
        );
    }

    #[tokio::test]
    async fn test_configured_fallback_level_is_respected() {
        let llm = ScriptedGenerator::new(vec!["not json"]);
        let assessment = CompatibilityAssessor::new(Language::En)
            .with_fallback_level(CompatibilityLevel::High)
            .assess(&llm, "resume", "job")
            .await;
        assert_eq!(assessment.level, CompatibilityLevel::High);
        assert!((assessment.multiplier - 0.8).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_inputs_are_truncated_before_prompting() {
        let llm = ScriptedGenerator::new(vec![
            r#"{"compatibility_level": "moderate", "score_multiplier": 0.6}"#,
        ]);
        let long_resume = "x".repeat(10_000);
        CompatibilityAssessor::new(Language::En)
            .assess(&llm, &long_resume, "job")
            .await;

        let prompt = llm.last_prompt().unwrap();
        assert!(prompt.len() < 6_000, "prompt was {} chars", prompt.len());
    }

    #[test]
    fn test_truncate_chars_respects_multibyte_boundaries() {
        let text = "é".repeat(3000);
        let truncated = truncate_chars(&text, 2000);
        assert_eq!(truncated.chars().count(), 2000);
    }

    #[test]
    fn test_truncate_chars_short_input_untouched() {
        assert_eq!(truncate_chars("short", 2000), "short");
    }

    #[test]
    fn test_multiplier_anchors_are_monotone() {
        let levels = [
            CompatibilityLevel::Incompatible,
            CompatibilityLevel::Low,
            CompatibilityLevel::Moderate,
            CompatibilityLevel::High,
            CompatibilityLevel::Excellent,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].default_multiplier() < pair[1].default_multiplier());
        }
    }

    #[test]
    fn test_out_of_range_multiplier_falls_back_to_anchor() {
        assert_eq!(sanitize_multiplier(1.7, CompatibilityLevel::Low), 0.4);
        assert_eq!(sanitize_multiplier(0.0, CompatibilityLevel::High), 0.8);
        assert_eq!(sanitize_multiplier(-0.3, CompatibilityLevel::Moderate), 0.6);
        assert_eq!(sanitize_multiplier(f64::NAN, CompatibilityLevel::Excellent), 1.0);
        assert_eq!(sanitize_multiplier(0.55, CompatibilityLevel::Moderate), 0.55);
    }

    #[test]
    fn test_level_deserializes_lowercase() {
        let level: CompatibilityLevel = serde_json::from_str("\"incompatible\"").unwrap();
        assert_eq!(level, CompatibilityLevel::Incompatible);
    }
}
