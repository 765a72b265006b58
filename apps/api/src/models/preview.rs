//! Structured resume preview — the shape the dashboard renders after
//! optimization. Validation is best-effort: a response that does not match
//! this shape yields no preview, never an error.

use serde::{Deserialize, Serialize};

/// JSON schema text embedded into the `structured_resume` prompt.
pub const RESUME_PREVIEW_SCHEMA: &str = r#"{
  "personal": {
    "name": "string",
    "email": "string",
    "phone": "string",
    "location": "string"
  },
  "summary": "string",
  "experiences": [
    {
      "title": "string",
      "company": "string",
      "start_date": "YYYY-MM-DD",
      "end_date": "YYYY-MM-DD or Present",
      "highlights": ["string"]
    }
  ],
  "education": [
    {
      "degree": "string",
      "institution": "string",
      "start_date": "YYYY-MM-DD",
      "end_date": "YYYY-MM-DD or Present"
    }
  ],
  "skills": ["string"]
}"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumePreview {
    pub personal: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_deserializes_minimal_document() {
        let json = r#"{
            "personal": {"name": "Jane Doe"},
            "skills": ["Rust", "SQL"]
        }"#;
        let preview: ResumePreview = serde_json::from_str(json).unwrap();
        assert_eq!(preview.personal.name, "Jane Doe");
        assert_eq!(preview.skills.len(), 2);
        assert!(preview.experiences.is_empty());
    }

    #[test]
    fn test_preview_rejects_document_without_personal() {
        let json = r#"{"summary": "no header"}"#;
        let result: Result<ResumePreview, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_constant_is_valid_json() {
        serde_json::from_str::<serde_json::Value>(RESUME_PREVIEW_SCHEMA).unwrap();
    }
}
