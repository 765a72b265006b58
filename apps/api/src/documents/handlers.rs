//! Axum route handlers for document intake.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::documents::job::store_job;
use crate::documents::resume::{convert_to_text, store_resume};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub resume_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UploadJobRequest {
    pub job_description: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadJobResponse {
    pub job_id: Uuid,
}

/// POST /api/v1/resumes/upload
///
/// Multipart upload: a `file` part carrying a PDF or plain text/markdown
/// resume. Returns the stored resume id.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResumeResponse>, AppError> {
    let mut content: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        content = Some(convert_to_text(&bytes, content_type.as_deref())?);
    }

    let content =
        content.ok_or_else(|| AppError::Validation("Missing 'file' field in upload".to_string()))?;

    let resume_id = store_resume(
        &state.db,
        &state.llm,
        &state.prompts,
        state.config.default_language,
        content,
    )
    .await?;

    Ok(Json(UploadResumeResponse { resume_id }))
}

/// POST /api/v1/jobs/upload
///
/// JSON upload of a raw job description. Returns the stored job id.
pub async fn handle_upload_job(
    State(state): State<AppState>,
    Json(request): Json<UploadJobRequest>,
) -> Result<Json<UploadJobResponse>, AppError> {
    let language = match request.language.as_deref() {
        Some(code) => code.parse().map_err(AppError::Validation)?,
        None => state.config.default_language,
    };

    let job_id = store_job(
        &state.db,
        &state.llm,
        &state.prompts,
        language,
        request.job_description,
    )
    .await?;

    Ok(Json(UploadJobResponse { job_id }))
}
