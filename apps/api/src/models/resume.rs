use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub resume_id: Uuid,
    pub content: String,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

/// Keyword-extraction output for a resume.
///
/// `extracted_keywords` is a JSON-encoded `{"extracted_keywords": [...]}`
/// document; it is parsed leniently downstream and any decode failure
/// degrades to an empty keyword list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProcessedResumeRow {
    pub resume_id: Uuid,
    pub extracted_keywords: Option<String>,
    pub processed_at: DateTime<Utc>,
}
