// Prompts owned by the scoring service: compatibility classification.
// The improvement prompt is resolved by name from the registry; this one has
// a single consumer and lives next to it.

use crate::prompts::{render, Language};

const COMPATIBILITY_EN: &str = r#"Analyze the professional compatibility between this resume and job posting.

RESUME:
{resume_excerpt}

JOB:
{job_excerpt}

Respond ONLY in JSON format:
{
    "compatibility_level": "incompatible" | "low" | "moderate" | "high" | "excellent",
    "score_multiplier": 0.2,
    "reasons": ["reason 1", "reason 2"],
    "resume_area": "resume area",
    "job_area": "job area"
}

Criteria:
- incompatible (0.2): completely different areas (e.g., marketing vs medicine)
- low (0.4): related areas but with large gaps
- moderate (0.6): some skill overlap
- high (0.8): good compatibility
- excellent (1.0): perfect compatibility"#;

const COMPATIBILITY_PT: &str = r#"Analise a compatibilidade profissional entre este currículo e vaga de emprego.

CURRÍCULO:
{resume_excerpt}

VAGA:
{job_excerpt}

Responda APENAS no formato JSON:
{
    "compatibility_level": "incompatible" | "low" | "moderate" | "high" | "excellent",
    "score_multiplier": 0.2,
    "reasons": ["motivo 1", "motivo 2"],
    "resume_area": "área do currículo",
    "job_area": "área da vaga"
}

Critérios:
- incompatible (0.2): áreas totalmente diferentes (ex: marketing vs medicina)
- low (0.4): áreas relacionadas mas com gaps grandes
- moderate (0.6): alguma sobreposição de habilidades
- high (0.8): boa compatibilidade
- excellent (1.0): compatibilidade perfeita"#;

const COMPATIBILITY_ES: &str = r#"Analiza la compatibilidad profesional entre este currículum y oferta de trabajo.

CURRÍCULUM:
{resume_excerpt}

TRABAJO:
{job_excerpt}

Responde SOLO en formato JSON:
{
    "compatibility_level": "incompatible" | "low" | "moderate" | "high" | "excellent",
    "score_multiplier": 0.2,
    "reasons": ["razón 1", "razón 2"],
    "resume_area": "área del currículum",
    "job_area": "área del trabajo"
}

Criterios:
- incompatible (0.2): áreas completamente diferentes (ej: marketing vs medicina)
- low (0.4): áreas relacionadas pero con grandes brechas
- moderate (0.6): alguna superposición de habilidades
- high (0.8): buena compatibilidad
- excellent (1.0): compatibilidad perfecta"#;

/// Builds the compatibility-classification prompt for the given language.
/// Excerpts are expected to be pre-truncated by the assessor.
pub fn compatibility_prompt(language: Language, resume_excerpt: &str, job_excerpt: &str) -> String {
    let template = match language {
        Language::En => COMPATIBILITY_EN,
        Language::Pt => COMPATIBILITY_PT,
        Language::Es => COMPATIBILITY_ES,
    };
    render(
        template,
        &[
            ("resume_excerpt", resume_excerpt),
            ("job_excerpt", job_excerpt),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_excerpts() {
        let prompt = compatibility_prompt(Language::En, "ten years of surgery", "senior Rust role");
        assert!(prompt.contains("ten years of surgery"));
        assert!(prompt.contains("senior Rust role"));
        assert!(prompt.contains("compatibility_level"));
    }

    #[test]
    fn test_prompt_localized_per_language() {
        let pt = compatibility_prompt(Language::Pt, "r", "j");
        let es = compatibility_prompt(Language::Es, "r", "j");
        assert!(pt.contains("CURRÍCULO:"));
        assert!(es.contains("CURRÍCULUM:"));
    }
}
