//! Axum route handlers for the scoring API.

use axum::{extract::State, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::scoring::service::{run_improvement, ImprovementExecution};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    pub resume_id: Uuid,
    pub job_id: Uuid,
    #[serde(default)]
    pub language: Option<String>,
}

/// POST /api/v1/resumes/improve
///
/// Full pipeline: embed → score → compatibility-validate → improvement loop
/// → preview → analysis. Returns both the validated original score and the
/// optimized score.
pub async fn handle_improve(
    State(state): State<AppState>,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<ImprovementExecution>, AppError> {
    let language = match request.language.as_deref() {
        Some(code) => code.parse().map_err(AppError::Validation)?,
        None => state.config.default_language,
    };

    let execution = run_improvement(
        &state.db,
        &state.llm,
        &state.embeddings,
        &state.prompts,
        language,
        &state.improvement,
        request.resume_id,
        request.job_id,
    )
    .await?;

    Ok(Json(execution))
}
