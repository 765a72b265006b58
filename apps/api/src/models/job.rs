use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub job_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Keyword-extraction output for a job posting. Same lenient-JSON contract
/// as `ProcessedResumeRow`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProcessedJobRow {
    pub job_id: Uuid,
    pub extracted_keywords: Option<String>,
    pub processed_at: DateTime<Utc>,
}
