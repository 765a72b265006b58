//! Prompt registry — an immutable name+language → template map built once at
//! startup and passed by reference into every component that resolves
//! prompts by name. No process-global lookup.
//!
//! Templates use `{placeholder}` slots filled by [`render`]. The
//! compatibility-classification prompt is not registered here; it lives
//! beside its only consumer in `scoring::prompts` (each service keeps its
//! task prompts next to itself).

pub mod templates;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Analysis language. Unlisted languages fall back to English templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
    Es,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
            Language::Es => "es",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            "es" => Ok(Language::Es),
            other => Err(format!("unsupported language '{other}' (expected en, pt, es)")),
        }
    }
}

/// Registered template names.
pub const RESUME_IMPROVEMENT: &str = "resume_improvement";
pub const STRUCTURED_RESUME: &str = "structured_resume";
pub const STRUCTURED_JOB: &str = "structured_job";

/// Immutable prompt lookup. Built once in `main`, carried as
/// `Arc<PromptRegistry>` in `AppState`.
pub struct PromptRegistry {
    templates: HashMap<(&'static str, Language), &'static str>,
}

impl PromptRegistry {
    pub fn new() -> Self {
        let mut templates = HashMap::new();

        templates.insert(
            (RESUME_IMPROVEMENT, Language::En),
            templates::RESUME_IMPROVEMENT_EN,
        );
        templates.insert(
            (RESUME_IMPROVEMENT, Language::Pt),
            templates::RESUME_IMPROVEMENT_PT,
        );
        templates.insert(
            (RESUME_IMPROVEMENT, Language::Es),
            templates::RESUME_IMPROVEMENT_ES,
        );

        templates.insert((STRUCTURED_RESUME, Language::En), templates::STRUCTURED_RESUME_EN);
        templates.insert((STRUCTURED_RESUME, Language::Pt), templates::STRUCTURED_RESUME_PT);
        templates.insert((STRUCTURED_RESUME, Language::Es), templates::STRUCTURED_RESUME_ES);

        templates.insert((STRUCTURED_JOB, Language::En), templates::STRUCTURED_JOB_EN);
        templates.insert((STRUCTURED_JOB, Language::Pt), templates::STRUCTURED_JOB_PT);
        templates.insert((STRUCTURED_JOB, Language::Es), templates::STRUCTURED_JOB_ES);

        Self { templates }
    }

    /// Language-specific template for `name`, falling back to English when no
    /// variant exists for the requested language.
    pub fn get(&self, name: &'static str, language: Language) -> Option<&'static str> {
        self.templates
            .get(&(name, language))
            .or_else(|| self.templates.get(&(name, Language::En)))
            .copied()
    }
}

impl Default for PromptRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills `{placeholder}` slots in a template. Placeholders absent from
/// `values` are left untouched.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_resolves_all_names_in_all_languages() {
        let registry = PromptRegistry::new();
        for name in [RESUME_IMPROVEMENT, STRUCTURED_RESUME, STRUCTURED_JOB] {
            for language in [Language::En, Language::Pt, Language::Es] {
                assert!(
                    registry.get(name, language).is_some(),
                    "missing template: {name}/{}",
                    language.as_str()
                );
            }
        }
    }

    #[test]
    fn test_improvement_templates_carry_required_placeholders() {
        let registry = PromptRegistry::new();
        for language in [Language::En, Language::Pt, Language::Es] {
            let template = registry.get(RESUME_IMPROVEMENT, language).unwrap();
            for placeholder in [
                "{raw_job_description}",
                "{extracted_job_keywords}",
                "{raw_resume}",
                "{extracted_resume_keywords}",
                "{current_cosine_similarity}",
            ] {
                assert!(
                    template.contains(placeholder),
                    "{} template missing {placeholder}",
                    language.as_str()
                );
            }
        }
    }

    #[test]
    fn test_render_replaces_placeholders() {
        let out = render("score is {score} for {name}", &[("score", "0.82"), ("name", "Jane")]);
        assert_eq!(out, "score is 0.82 for Jane");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders_untouched() {
        let out = render("{known} and {unknown}", &[("known", "x")]);
        assert_eq!(out, "x and {unknown}");
    }

    #[test]
    fn test_language_parse_and_default() {
        assert_eq!("pt".parse::<Language>().unwrap(), Language::Pt);
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::En);
    }
}
