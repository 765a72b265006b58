//! Iterative score improvement — the bounded-retry optimization loop.
//!
//! Each attempt asks the generation model to rewrite the resume, re-embeds
//! the candidate, and re-scores it against the job-keyword embedding. The
//! first candidate that beats the best score wins (greedy accept, early
//! exit): attempts are expensive model calls, so we trade optimality for
//! latency. Attempts are strictly sequential — attempt N's prompt carries
//! the best-so-far text and score.
//!
//! Failure policy is asymmetric: compatibility classification fails open
//! (the assessor substitutes a fallback), while generation and embedding
//! failures inside an attempt fail closed and abort the run.

use std::time::Duration;

use tokio::time::{timeout, Instant};
use tracing::{info, warn};

use crate::embedding::EmbeddingProvider;
use crate::errors::AppError;
use crate::llm_client::{GenerationOptions, GenerationProvider};
use crate::prompts::{render, Language, PromptRegistry, RESUME_IMPROVEMENT};
use crate::scoring::compatibility::{CompatibilityAssessor, CompatibilityLevel};
use crate::scoring::similarity::cosine_similarity;

/// Bounds for one `improve_resume` run.
#[derive(Debug, Clone)]
pub struct ImprovementConfig {
    /// Attempt budget. The loop stops after this many rejected candidates.
    pub max_retries: u32,
    /// Wall-clock budget for one generate+embed round trip.
    pub attempt_timeout: Duration,
    /// Overall deadline across all attempts.
    pub loop_deadline: Duration,
}

impl Default for ImprovementConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            attempt_timeout: Duration::from_secs(90),
            loop_deadline: Duration::from_secs(480),
        }
    }
}

/// Everything one run needs from the caller. All borrowed; the loop owns
/// nothing beyond its invocation.
#[derive(Debug, Clone, Copy)]
pub struct ImprovementInputs<'a> {
    pub resume_text: &'a str,
    pub resume_keywords: &'a str,
    pub job_text: &'a str,
    pub job_keywords: &'a str,
    /// Compatibility-validated score the loop must beat.
    pub baseline_score: f64,
    pub job_keywords_embedding: &'a [f32],
}

/// Winner across all attempts. `best_score >= baseline_score` always holds:
/// the loop never returns a worse score than it started with.
#[derive(Debug, Clone)]
pub struct ImprovementResult {
    pub best_text: String,
    pub best_score: f64,
    /// Generation attempts actually made (0 when skipped as incompatible).
    pub attempts: u32,
}

/// Runs the improvement loop: compatibility gate, then up to `max_retries`
/// sequential rewrite attempts with greedy accept.
pub async fn improve_resume(
    generation: &dyn GenerationProvider,
    embeddings: &dyn EmbeddingProvider,
    prompts: &PromptRegistry,
    language: Language,
    inputs: ImprovementInputs<'_>,
    config: &ImprovementConfig,
) -> Result<ImprovementResult, AppError> {
    // Incompatible pairings are never optimized: rewriting a surgeon's
    // resume toward a software job invites fabricated alignment.
    let assessment = CompatibilityAssessor::new(language)
        .assess(generation, inputs.resume_text, inputs.job_text)
        .await;

    if assessment.level == CompatibilityLevel::Incompatible {
        warn!(
            "Skipping optimization: incompatible areas ({} vs {})",
            assessment.resume_area, assessment.job_area
        );
        return Ok(ImprovementResult {
            best_text: inputs.resume_text.to_string(),
            best_score: inputs.baseline_score,
            attempts: 0,
        });
    }

    let template = prompts.get(RESUME_IMPROVEMENT, language).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!("resume_improvement prompt missing from registry"))
    })?;

    let deadline = Instant::now() + config.loop_deadline;
    let best_text = inputs.resume_text;
    let best_score = inputs.baseline_score;

    for attempt in 1..=config.max_retries {
        info!("Improvement attempt {attempt}/{}", config.max_retries);

        let current_score = format!("{best_score:.4}");
        let prompt = render(
            template,
            &[
                ("raw_job_description", inputs.job_text),
                ("extracted_job_keywords", inputs.job_keywords),
                ("raw_resume", best_text),
                ("extracted_resume_keywords", inputs.resume_keywords),
                ("current_cosine_similarity", &current_score),
            ],
        );

        let candidate = run_attempt(generation, embeddings, &prompt, config, deadline).await?;
        let score = cosine_similarity(
            Some(&candidate.embedding),
            Some(inputs.job_keywords_embedding),
        );

        if score > best_score {
            info!(
                "Attempt {attempt} improved score {:.4} -> {:.4}, accepting",
                best_score, score
            );
            return Ok(ImprovementResult {
                best_text: candidate.text,
                best_score: score,
                attempts: attempt,
            });
        }

        info!(
            "Attempt {attempt} scored {:.4}, best so far {:.4} — candidate discarded",
            score, best_score
        );
    }

    Ok(ImprovementResult {
        best_text: best_text.to_string(),
        best_score,
        attempts: config.max_retries,
    })
}

struct Candidate {
    text: String,
    embedding: Vec<f32>,
}

/// One generate+embed round trip under the per-attempt budget, capped by the
/// overall deadline. Timeouts surface as `AppError::Timeout`, distinct from
/// provider failures.
async fn run_attempt(
    generation: &dyn GenerationProvider,
    embeddings: &dyn EmbeddingProvider,
    prompt: &str,
    config: &ImprovementConfig,
    deadline: Instant,
) -> Result<Candidate, AppError> {
    let remaining = deadline.saturating_duration_since(Instant::now());
    if remaining.is_zero() {
        return Err(AppError::Timeout(config.loop_deadline));
    }
    let budget = config.attempt_timeout.min(remaining);

    timeout(budget, async {
        let text = generation
            .generate(prompt, &GenerationOptions::default())
            .await?
            .into_text();
        let embedding = embeddings.embed(&text).await?;
        Ok::<_, AppError>(Candidate { text, embedding })
    })
    .await
    .map_err(|_| AppError::Timeout(budget))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::testing::{ScriptedEmbedder, ScriptedGenerator};

    const MODERATE_ASSESSMENT: &str =
        r#"{"compatibility_level": "moderate", "score_multiplier": 0.6,
            "reasons": [], "resume_area": "backend", "job_area": "platform"}"#;

    const INCOMPATIBLE_ASSESSMENT: &str =
        r#"{"compatibility_level": "incompatible", "score_multiplier": 0.2,
            "reasons": ["different fields"], "resume_area": "surgery", "job_area": "software"}"#;

    const ORIGINAL_RESUME: &str = "Jane Doe\njane@example.com\n\n## Experience\nBackend work.";

    fn inputs(baseline: f64, job_embedding: &[f32]) -> ImprovementInputs<'_> {
        ImprovementInputs {
            resume_text: ORIGINAL_RESUME,
            resume_keywords: "Rust, SQL",
            job_text: "Platform team seeks backend engineer.",
            job_keywords: "Rust, Kubernetes, SQL",
            baseline_score: baseline,
            job_keywords_embedding: job_embedding,
        }
    }

    fn config(max_retries: u32) -> ImprovementConfig {
        ImprovementConfig {
            max_retries,
            ..ImprovementConfig::default()
        }
    }

    #[tokio::test]
    async fn test_scenario_second_attempt_wins_third_never_runs() {
        // Baseline 0.45, candidate scores 0.40, 0.50, 0.30: attempt 1 is
        // rejected, attempt 2 accepted immediately, attempt 3 never invoked.
        let job_embedding = [1.0_f32, 0.0];
        let generation = ScriptedGenerator::new(vec![
            MODERATE_ASSESSMENT,
            "candidate a",
            "candidate b",
            "candidate c",
        ]);
        let embeddings = ScriptedEmbedder::new(vec![
            ScriptedEmbedder::unit_vector_with_cosine(0.40),
            ScriptedEmbedder::unit_vector_with_cosine(0.50),
            ScriptedEmbedder::unit_vector_with_cosine(0.30),
        ]);
        let registry = PromptRegistry::new();

        let result = improve_resume(
            &generation,
            &embeddings,
            &registry,
            Language::En,
            inputs(0.45, &job_embedding),
            &config(3),
        )
        .await
        .unwrap();

        assert_eq!(result.best_text, "candidate b");
        assert!((result.best_score - 0.50).abs() < 1e-4, "score was {}", result.best_score);
        assert_eq!(result.attempts, 2);
        // 1 assessment + 2 attempts; attempt 3 never invoked.
        assert_eq!(generation.calls(), 3);
        assert_eq!(embeddings.calls(), 2);
    }

    #[tokio::test]
    async fn test_greedy_early_exit_on_first_improvement() {
        let job_embedding = [1.0_f32, 0.0];
        let generation = ScriptedGenerator::new(vec![MODERATE_ASSESSMENT, "better resume"]);
        let embeddings =
            ScriptedEmbedder::new(vec![ScriptedEmbedder::unit_vector_with_cosine(0.90)]);
        let registry = PromptRegistry::new();

        let result = improve_resume(
            &generation,
            &embeddings,
            &registry,
            Language::En,
            inputs(0.30, &job_embedding),
            &config(5),
        )
        .await
        .unwrap();

        assert_eq!(result.best_text, "better resume");
        assert_eq!(result.attempts, 1);
        assert_eq!(generation.calls(), 2);
        assert_eq!(embeddings.calls(), 1);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_original_after_exactly_max_retries() {
        let job_embedding = [1.0_f32, 0.0];
        let generation = ScriptedGenerator::new(vec![
            MODERATE_ASSESSMENT,
            "worse a",
            "worse b",
            "worse c",
        ]);
        let embeddings = ScriptedEmbedder::new(vec![
            ScriptedEmbedder::unit_vector_with_cosine(0.20),
            ScriptedEmbedder::unit_vector_with_cosine(0.35),
            ScriptedEmbedder::unit_vector_with_cosine(0.10),
        ]);
        let registry = PromptRegistry::new();

        let result = improve_resume(
            &generation,
            &embeddings,
            &registry,
            Language::En,
            inputs(0.45, &job_embedding),
            &config(3),
        )
        .await
        .unwrap();

        assert_eq!(result.best_text, ORIGINAL_RESUME);
        assert_eq!(result.best_score, 0.45);
        assert_eq!(result.attempts, 3);
        assert_eq!(generation.calls(), 4);
        assert_eq!(embeddings.calls(), 3);
    }

    #[tokio::test]
    async fn test_incompatible_pairing_short_circuits_with_zero_attempts() {
        let job_embedding = [1.0_f32, 0.0];
        let generation = ScriptedGenerator::new(vec![INCOMPATIBLE_ASSESSMENT]);
        let embeddings = ScriptedEmbedder::new(vec![]);
        let registry = PromptRegistry::new();

        let result = improve_resume(
            &generation,
            &embeddings,
            &registry,
            Language::En,
            inputs(0.45, &job_embedding),
            &config(5),
        )
        .await
        .unwrap();

        assert_eq!(result.best_text, ORIGINAL_RESUME);
        assert_eq!(result.best_score, 0.45);
        assert_eq!(result.attempts, 0);
        // Only the assessment call; no rewrite attempts, no embeddings.
        assert_eq!(generation.calls(), 1);
        assert_eq!(embeddings.calls(), 0);
    }

    #[tokio::test]
    async fn test_monotonic_non_regression() {
        // Even when every candidate is worse, the returned score never drops
        // below the baseline.
        let job_embedding = [1.0_f32, 0.0];
        let generation = ScriptedGenerator::new(vec![MODERATE_ASSESSMENT, "worse"]);
        let embeddings =
            ScriptedEmbedder::new(vec![ScriptedEmbedder::unit_vector_with_cosine(0.05)]);
        let registry = PromptRegistry::new();

        let baseline = 0.62;
        let result = improve_resume(
            &generation,
            &embeddings,
            &registry,
            Language::En,
            inputs(baseline, &job_embedding),
            &config(1),
        )
        .await
        .unwrap();

        assert!(result.best_score >= baseline);
    }

    #[tokio::test]
    async fn test_generation_failure_aborts_the_run() {
        // Script covers only the assessment; the first attempt's generate
        // call fails and must propagate (fail-closed), not degrade.
        let job_embedding = [1.0_f32, 0.0];
        let generation = ScriptedGenerator::new(vec![MODERATE_ASSESSMENT]);
        let embeddings = ScriptedEmbedder::new(vec![]);
        let registry = PromptRegistry::new();

        let result = improve_resume(
            &generation,
            &embeddings,
            &registry,
            Language::En,
            inputs(0.45, &job_embedding),
            &config(3),
        )
        .await;

        assert!(matches!(result, Err(AppError::Provider(_))));
    }

    #[tokio::test]
    async fn test_embedding_failure_aborts_the_run() {
        let job_embedding = [1.0_f32, 0.0];
        let generation = ScriptedGenerator::new(vec![MODERATE_ASSESSMENT, "candidate"]);
        let embeddings = ScriptedEmbedder::new(vec![]);
        let registry = PromptRegistry::new();

        let result = improve_resume(
            &generation,
            &embeddings,
            &registry,
            Language::En,
            inputs(0.45, &job_embedding),
            &config(3),
        )
        .await;

        assert!(matches!(result, Err(AppError::Provider(_))));
    }

    #[tokio::test]
    async fn test_attempt_prompt_carries_best_text_and_score() {
        let job_embedding = [1.0_f32, 0.0];
        let generation = ScriptedGenerator::new(vec![MODERATE_ASSESSMENT, "candidate"]);
        let embeddings =
            ScriptedEmbedder::new(vec![ScriptedEmbedder::unit_vector_with_cosine(0.99)]);
        let registry = PromptRegistry::new();

        improve_resume(
            &generation,
            &embeddings,
            &registry,
            Language::En,
            inputs(0.4512, &job_embedding),
            &config(1),
        )
        .await
        .unwrap();

        let prompt = generation.last_prompt().unwrap();
        assert!(prompt.contains(ORIGINAL_RESUME));
        assert!(prompt.contains("0.4512"));
        assert!(prompt.contains("Rust, Kubernetes, SQL"));
    }

    #[tokio::test]
    async fn test_zero_retries_returns_baseline_without_attempts() {
        let job_embedding = [1.0_f32, 0.0];
        let generation = ScriptedGenerator::new(vec![MODERATE_ASSESSMENT]);
        let embeddings = ScriptedEmbedder::new(vec![]);
        let registry = PromptRegistry::new();

        let result = improve_resume(
            &generation,
            &embeddings,
            &registry,
            Language::En,
            inputs(0.45, &job_embedding),
            &config(0),
        )
        .await
        .unwrap();

        assert_eq!(result.best_text, ORIGINAL_RESUME);
        assert_eq!(result.best_score, 0.45);
        assert_eq!(generation.calls(), 1);
    }
}
