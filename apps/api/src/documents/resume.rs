//! Resume intake — converts an uploaded file to text, stores it, and runs
//! keyword extraction.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::documents::extract::{extract_keywords, ExtractedKeywords};
use crate::errors::AppError;
use crate::llm_client::GenerationProvider;
use crate::prompts::{Language, PromptRegistry, STRUCTURED_RESUME};

const PDF_MIME: &str = "application/pdf";

/// Converts uploaded bytes to text. PDFs are extracted in memory; anything
/// else is treated as UTF-8 text/markdown.
pub fn convert_to_text(bytes: &[u8], content_type: Option<&str>) -> Result<String, AppError> {
    if content_type == Some(PDF_MIME) {
        return pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Validation(format!("Could not extract text from PDF: {e}")));
    }

    String::from_utf8(bytes.to_vec())
        .map_err(|_| AppError::Validation("Uploaded file is not valid UTF-8 text".to_string()))
}

/// Stores a resume and its extracted keywords, returning the new resume id.
pub async fn store_resume(
    pool: &PgPool,
    llm: &dyn GenerationProvider,
    prompts: &PromptRegistry,
    language: Language,
    content: String,
) -> Result<Uuid, AppError> {
    if content.trim().is_empty() {
        return Err(AppError::Validation("Resume content is empty".to_string()));
    }

    let resume_id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO resumes (resume_id, content, content_type)
        VALUES ($1, $2, 'md')
        "#,
    )
    .bind(resume_id)
    .bind(&content)
    .execute(pool)
    .await?;

    let keywords = extract_keywords(llm, prompts, STRUCTURED_RESUME, language, &content).await;
    store_processed_resume(pool, resume_id, &keywords).await?;

    info!(
        "Stored resume {resume_id} with {} extracted keywords",
        keywords.extracted_keywords.len()
    );
    Ok(resume_id)
}

async fn store_processed_resume(
    pool: &PgPool,
    resume_id: Uuid,
    keywords: &ExtractedKeywords,
) -> Result<(), AppError> {
    let encoded = serde_json::to_string(keywords)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode keywords: {e}")))?;

    sqlx::query(
        r#"
        INSERT INTO processed_resumes (resume_id, extracted_keywords)
        VALUES ($1, $2)
        "#,
    )
    .bind(resume_id)
    .bind(encoded)
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let text = convert_to_text(b"Jane Doe\nEngineer", Some("text/markdown")).unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }

    #[test]
    fn test_missing_content_type_treated_as_text() {
        let text = convert_to_text(b"plain body", None).unwrap();
        assert_eq!(text, "plain body");
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let result = convert_to_text(&[0xff, 0xfe, 0x00], Some("text/plain"));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_garbage_pdf_rejected() {
        let result = convert_to_text(b"not a pdf", Some(PDF_MIME));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
