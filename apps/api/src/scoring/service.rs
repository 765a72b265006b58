//! Score-improvement pipeline — fetch, embed, score, damp, improve, report.
//!
//! Flow: load resume + job → embed resume and job keywords concurrently →
//! raw cosine → compatibility assessment → validated baseline → improvement
//! loop → structured preview → analysis. The validated (damped) score is the
//! score of record: it is both the optimization floor and the originally
//! reported score.

use serde::Serialize;
use serde_json::Value;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::documents::extract::ExtractedKeywords;
use crate::embedding::EmbeddingProvider;
use crate::errors::AppError;
use crate::llm_client::{GenerationOptions, GenerationProvider};
use crate::models::job::{JobRow, ProcessedJobRow};
use crate::models::preview::{ResumePreview, RESUME_PREVIEW_SCHEMA};
use crate::models::resume::{ProcessedResumeRow, ResumeRow};
use crate::prompts::{render, Language, PromptRegistry, STRUCTURED_RESUME};
use crate::scoring::adjust::adjust_score;
use crate::scoring::compatibility::CompatibilityAssessor;
use crate::scoring::improvement::{improve_resume, ImprovementConfig, ImprovementInputs};
use crate::scoring::report::{build_analysis, Suggestion};
use crate::scoring::similarity::cosine_similarity;

/// Final pipeline output returned to the caller.
#[derive(Debug, Serialize)]
pub struct ImprovementExecution {
    pub resume_id: Uuid,
    pub job_id: Uuid,
    /// Compatibility-validated score of the original resume.
    pub original_score: f64,
    /// Score after optimization. Never below `original_score`.
    pub new_score: f64,
    pub updated_resume: String,
    pub resume_preview: Option<Value>,
    pub details: String,
    pub commentary: String,
    pub improvements: Vec<Suggestion>,
}

/// Runs the full scoring-and-improvement pipeline for one resume/job pair.
#[allow(clippy::too_many_arguments)]
pub async fn run_improvement(
    pool: &PgPool,
    llm: &dyn GenerationProvider,
    embeddings: &dyn EmbeddingProvider,
    prompts: &PromptRegistry,
    language: Language,
    config: &ImprovementConfig,
    resume_id: Uuid,
    job_id: Uuid,
) -> Result<ImprovementExecution, AppError> {
    let (resume, processed_resume) = fetch_resume(pool, resume_id).await?;
    let (job, processed_job) = fetch_job(pool, job_id).await?;

    let resume_keywords =
        join_keywords(processed_resume.as_ref().and_then(|p| p.extracted_keywords.as_deref()));
    let job_keywords =
        join_keywords(processed_job.as_ref().and_then(|p| p.extracted_keywords.as_deref()));

    // Independent embeddings; concurrent purely for throughput.
    let (resume_embedding, job_keywords_embedding) = tokio::try_join!(
        embeddings.embed(&resume.content),
        embeddings.embed(&job_keywords),
    )?;

    let raw_score = cosine_similarity(Some(&job_keywords_embedding), Some(&resume_embedding));

    let assessment = CompatibilityAssessor::new(language)
        .assess(llm, &resume.content, &job.content)
        .await;
    let (validated_score, warnings) = adjust_score(raw_score, &assessment, language);

    info!(
        "Scores for resume {resume_id} ({}): raw cosine {:.3}, validated {:.3} ({})",
        language.as_str(),
        raw_score,
        validated_score,
        assessment.level.as_str()
    );

    let result = improve_resume(
        llm,
        embeddings,
        prompts,
        language,
        ImprovementInputs {
            resume_text: &resume.content,
            resume_keywords: &resume_keywords,
            job_text: &job.content,
            job_keywords: &job_keywords,
            baseline_score: validated_score,
            job_keywords_embedding: &job_keywords_embedding,
        },
        config,
    )
    .await?;

    let resume_preview = preview_resume(llm, prompts, language, &result.best_text).await?;

    let analysis = build_analysis(
        validated_score,
        result.best_score,
        &job_keywords,
        &resume_keywords,
        assessment.level,
        &warnings,
        language,
    );

    info!(
        "Improvement finished for resume {resume_id}: {:.3} -> {:.3} after {} attempts",
        validated_score, result.best_score, result.attempts
    );

    Ok(ImprovementExecution {
        resume_id,
        job_id,
        original_score: validated_score,
        new_score: result.best_score,
        updated_resume: result.best_text,
        resume_preview,
        details: analysis.details,
        commentary: analysis.commentary,
        improvements: analysis.improvements,
    })
}

async fn fetch_resume(
    pool: &PgPool,
    resume_id: Uuid,
) -> Result<(ResumeRow, Option<ProcessedResumeRow>), AppError> {
    let resume = sqlx::query_as::<_, ResumeRow>(
        "SELECT resume_id, content, content_type, created_at FROM resumes WHERE resume_id = $1",
    )
    .bind(resume_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    let processed = sqlx::query_as::<_, ProcessedResumeRow>(
        "SELECT resume_id, extracted_keywords, processed_at FROM processed_resumes WHERE resume_id = $1",
    )
    .bind(resume_id)
    .fetch_optional(pool)
    .await?;

    if processed.is_none() {
        warn!("No processed entry for resume {resume_id}; scoring with empty keywords");
    }

    Ok((resume, processed))
}

async fn fetch_job(
    pool: &PgPool,
    job_id: Uuid,
) -> Result<(JobRow, Option<ProcessedJobRow>), AppError> {
    let job = sqlx::query_as::<_, JobRow>(
        "SELECT job_id, content, created_at FROM jobs WHERE job_id = $1",
    )
    .bind(job_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let processed = sqlx::query_as::<_, ProcessedJobRow>(
        "SELECT job_id, extracted_keywords, processed_at FROM processed_jobs WHERE job_id = $1",
    )
    .bind(job_id)
    .fetch_optional(pool)
    .await?;

    if processed.is_none() {
        warn!("No processed entry for job {job_id}; scoring with empty keywords");
    }

    Ok((job, processed))
}

/// Joins a stored keyword document into the comma-separated form the prompts
/// and embeddings consume. Missing rows and decode failures both degrade to
/// an empty string.
fn join_keywords(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match serde_json::from_str::<ExtractedKeywords>(raw) {
        Ok(parsed) => parsed.extracted_keywords.join(", "),
        Err(e) => {
            warn!("Could not decode stored keywords, treating as empty: {e}");
            String::new()
        }
    }
}

/// Structured preview of the winning resume for the dashboard.
///
/// Best-effort on shape: a response that fails preview validation yields
/// `None`. Provider failures still propagate — by this point the
/// optimization already spent real money and silent partial output would
/// mask the error.
async fn preview_resume(
    llm: &dyn GenerationProvider,
    prompts: &PromptRegistry,
    language: Language,
    resume_text: &str,
) -> Result<Option<Value>, AppError> {
    let Some(template) = prompts.get(STRUCTURED_RESUME, language) else {
        return Ok(None);
    };
    let prompt = render(
        template,
        &[("schema", RESUME_PREVIEW_SCHEMA), ("text", resume_text)],
    );

    let result = llm.generate(&prompt, &GenerationOptions::default()).await?;
    let value = match result.as_json() {
        Ok(value) => value,
        Err(e) => {
            info!("Resume preview response was not JSON: {e}");
            return Ok(None);
        }
    };

    match serde_json::from_value::<ResumePreview>(value.clone()) {
        Ok(_) => Ok(Some(value)),
        Err(e) => {
            info!("Resume preview failed validation: {e}");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_keywords_happy_path() {
        let raw = r#"{"extracted_keywords": ["Rust", "SQL", "gRPC"]}"#;
        assert_eq!(join_keywords(Some(raw)), "Rust, SQL, gRPC");
    }

    #[test]
    fn test_join_keywords_missing_row() {
        assert_eq!(join_keywords(None), "");
    }

    #[test]
    fn test_join_keywords_malformed_json() {
        assert_eq!(join_keywords(Some("{broken")), "");
        assert_eq!(join_keywords(Some(r#"{"other": 1}"#)), "");
    }

    #[test]
    fn test_join_keywords_empty_list() {
        assert_eq!(join_keywords(Some(r#"{"extracted_keywords": []}"#)), "");
    }
}
