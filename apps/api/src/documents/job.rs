//! Job-description intake — stores the raw text and runs keyword extraction.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::documents::extract::extract_keywords;
use crate::errors::AppError;
use crate::llm_client::GenerationProvider;
use crate::prompts::{Language, PromptRegistry, STRUCTURED_JOB};

/// Stores a job description and its extracted keywords, returning the new
/// job id.
pub async fn store_job(
    pool: &PgPool,
    llm: &dyn GenerationProvider,
    prompts: &PromptRegistry,
    language: Language,
    content: String,
) -> Result<Uuid, AppError> {
    if content.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description content is empty".to_string(),
        ));
    }

    let job_id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO jobs (job_id, content)
        VALUES ($1, $2)
        "#,
    )
    .bind(job_id)
    .bind(&content)
    .execute(pool)
    .await?;

    let keywords = extract_keywords(llm, prompts, STRUCTURED_JOB, language, &content).await;
    let encoded = serde_json::to_string(&keywords)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode keywords: {e}")))?;

    sqlx::query(
        r#"
        INSERT INTO processed_jobs (job_id, extracted_keywords)
        VALUES ($1, $2)
        "#,
    )
    .bind(job_id)
    .bind(encoded)
    .execute(pool)
    .await?;

    info!(
        "Stored job {job_id} with {} extracted keywords",
        keywords.extracted_keywords.len()
    );
    Ok(job_id)
}
