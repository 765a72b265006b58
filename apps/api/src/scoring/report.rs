//! Analysis reporting — turns final scores and compatibility data into
//! human-readable commentary and suggestions. Deterministic string assembly;
//! no model calls.

use serde::Serialize;

use crate::prompts::Language;
use crate::scoring::adjust::percent;
use crate::scoring::compatibility::CompatibilityLevel;

/// Final analysis block returned to the caller alongside the scores.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub details: String,
    pub commentary: String,
    pub improvements: Vec<Suggestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub suggestion: String,
    #[serde(rename = "lineNumber")]
    pub line_number: Option<u32>,
}

struct ReportLabels {
    title: &'static str,
    scoring: &'static str,
    original: &'static str,
    optimized: &'static str,
    improvement: &'static str,
    status: &'static str,
    keywords: &'static str,
    job_keywords: &'static str,
    resume_keywords: &'static str,
    coverage: &'static str,
    observations: &'static str,
    methodology: &'static str,
    methodology_text: &'static str,
}

const LABELS_EN: ReportLabels = ReportLabels {
    title: "Detailed Compatibility Analysis",
    scoring: "Scoring:",
    original: "Original score",
    optimized: "Optimized score",
    improvement: "Improvement",
    status: "Status",
    keywords: "Keyword analysis:",
    job_keywords: "Job keywords",
    resume_keywords: "Resume keywords",
    coverage: "Coverage rate",
    observations: "Observations:",
    methodology: "Methodology:",
    methodology_text: "The system combines text-embedding similarity with an AI \
        professional-compatibility check: scores reflect semantic overlap, damped \
        when the professional areas do not match.",
};

const LABELS_PT: ReportLabels = ReportLabels {
    title: "Análise de Compatibilidade Detalhada",
    scoring: "Pontuação:",
    original: "Score original",
    optimized: "Score otimizado",
    improvement: "Melhoria",
    status: "Status",
    keywords: "Análise de palavras-chave:",
    job_keywords: "Palavras-chave da vaga",
    resume_keywords: "Palavras-chave no currículo",
    coverage: "Taxa de cobertura",
    observations: "Observações:",
    methodology: "Metodologia:",
    methodology_text: "O sistema combina similaridade de embeddings de texto com uma \
        verificação de compatibilidade profissional por IA: os scores refletem a \
        sobreposição semântica, amortecida quando as áreas profissionais não coincidem.",
};

const LABELS_ES: ReportLabels = ReportLabels {
    title: "Análisis de Compatibilidad Detallado",
    scoring: "Puntuación:",
    original: "Puntuación original",
    optimized: "Puntuación optimizada",
    improvement: "Mejora",
    status: "Estado",
    keywords: "Análisis de palabras clave:",
    job_keywords: "Palabras clave del trabajo",
    resume_keywords: "Palabras clave del currículum",
    coverage: "Tasa de cobertura",
    observations: "Observaciones:",
    methodology: "Metodología:",
    methodology_text: "El sistema combina la similitud de embeddings de texto con una \
        verificación de compatibilidad profesional por IA: las puntuaciones reflejan la \
        superposición semántica, amortiguada cuando las áreas profesionales no coinciden.",
};

fn labels(language: Language) -> &'static ReportLabels {
    match language {
        Language::En => &LABELS_EN,
        Language::Pt => &LABELS_PT,
        Language::Es => &LABELS_ES,
    }
}

/// Builds the full analysis: commentary selected by compatibility level and
/// score thresholds, level-appropriate suggestions, and a details block with
/// the score breakdown and keyword coverage.
pub fn build_analysis(
    original_score: f64,
    new_score: f64,
    job_keywords: &str,
    resume_keywords: &str,
    level: CompatibilityLevel,
    warnings: &[String],
    language: Language,
) -> Analysis {
    let improvement = new_score - original_score;
    let commentary = commentary(language, level, original_score, new_score);

    let mut suggestions: Vec<String> = suggestions_for(level, language)
        .iter()
        .map(|s| s.to_string())
        .collect();
    if improvement > 0.0 {
        suggestions.insert(0, improvement_line(language, improvement));
    }

    let details = details_block(
        language,
        level,
        original_score,
        new_score,
        job_keywords,
        resume_keywords,
        warnings,
    );

    Analysis {
        details,
        commentary,
        improvements: suggestions
            .into_iter()
            .map(|suggestion| Suggestion {
                suggestion,
                line_number: None,
            })
            .collect(),
    }
}

fn commentary(
    language: Language,
    level: CompatibilityLevel,
    original_score: f64,
    new_score: f64,
) -> String {
    let pct = percent(new_score);
    let original_pct = percent(original_score);

    match level {
        CompatibilityLevel::Incompatible => match language {
            Language::En => format!(
                "Incompatibility detected between professional areas. Score adjusted to {pct}% (was {original_pct}%)."
            ),
            Language::Pt => format!(
                "Incompatibilidade detectada entre áreas profissionais. Score ajustado para {pct}% (era {original_pct}%)."
            ),
            Language::Es => format!(
                "Incompatibilidad detectada entre áreas profesionales. Puntuación ajustada a {pct}% (era {original_pct}%)."
            ),
        },
        CompatibilityLevel::Low => match language {
            Language::En => format!("Limited compatibility detected. Score adjusted to {pct}%."),
            Language::Pt => format!("Compatibilidade limitada detectada. Score ajustado para {pct}%."),
            Language::Es => format!("Compatibilidad limitada detectada. Puntuación ajustada a {pct}%."),
        },
        _ => threshold_commentary(language, pct),
    }
}

/// Canned commentary by score band: >=90 excellent, >=80 good, >=70
/// moderate, below that low.
fn threshold_commentary(language: Language, pct: i64) -> String {
    let texts: [&str; 4] = match language {
        Language::En => [
            "Excellent compatibility! Your resume is very well aligned with the job requirements.",
            "Good compatibility. Your resume demonstrates relevant qualifications for the position.",
            "Moderate compatibility. There are some areas that can be improved for better alignment.",
            "Low compatibility. Consider highlighting more relevant experiences for this job.",
        ],
        Language::Pt => [
            "Excelente compatibilidade! Seu currículo está muito bem alinhado com os requisitos da vaga.",
            "Boa compatibilidade. Seu currículo demonstra qualificações relevantes para a posição.",
            "Compatibilidade moderada. Há algumas áreas que podem ser melhoradas para maior alinhamento.",
            "Baixa compatibilidade. Considere destacar mais experiências relevantes para esta vaga.",
        ],
        Language::Es => [
            "¡Excelente compatibilidad! Tu currículum está muy bien alineado con los requisitos del trabajo.",
            "Buena compatibilidad. Tu currículum demuestra calificaciones relevantes para la posición.",
            "Compatibilidad moderada. Hay algunas áreas que pueden mejorarse para mejor alineación.",
            "Baja compatibilidad. Considera destacar más experiencias relevantes para este trabajo.",
        ],
    };

    let index = if pct >= 90 {
        0
    } else if pct >= 80 {
        1
    } else if pct >= 70 {
        2
    } else {
        3
    };
    texts[index].to_string()
}

fn suggestions_for(level: CompatibilityLevel, language: Language) -> &'static [&'static str] {
    match (language, level) {
        (Language::En, CompatibilityLevel::Incompatible) => &[
            "Very different professional areas detected",
            "Consider jobs more aligned with your experience",
            "If you want to change areas, consider transition courses",
            "Identify and highlight transferable skills",
        ],
        (Language::En, CompatibilityLevel::Low) => &[
            "There is potential but with significant gaps",
            "Consider developing area-specific competencies",
            "Highlight relevant experiences even if indirect",
        ],
        (Language::En, CompatibilityLevel::Moderate) => &[
            "Highlight transferable skills and related experiences",
            "Emphasize applicable universal competencies",
            "Quantify results that demonstrate capability",
        ],
        (Language::En, _) => &[
            "Good professional compatibility detected",
            "Continue highlighting your main competencies",
            "Quantify specific results and impact",
        ],
        (Language::Pt, CompatibilityLevel::Incompatible) => &[
            "Áreas profissionais muito diferentes detectadas",
            "Considere vagas mais alinhadas com sua experiência",
            "Se deseja mudar de área, considere cursos de transição",
            "Identifique e destaque habilidades transferíveis",
        ],
        (Language::Pt, CompatibilityLevel::Low) => &[
            "Há potencial mas com gaps significativos",
            "Considere desenvolver competências específicas da área",
            "Destaque experiências relevantes mesmo que indiretas",
        ],
        (Language::Pt, CompatibilityLevel::Moderate) => &[
            "Destaque habilidades transferíveis e experiências relacionadas",
            "Enfatize competências universais aplicáveis",
            "Quantifique resultados que demonstrem capacidade",
        ],
        (Language::Pt, _) => &[
            "Boa compatibilidade profissional detectada",
            "Continue destacando suas principais competências",
            "Quantifique resultados e impacto específicos",
        ],
        (Language::Es, CompatibilityLevel::Incompatible) => &[
            "Áreas profesionales muy diferentes detectadas",
            "Considera trabajos más alineados con tu experiencia",
            "Si quieres cambiar de área, considera cursos de transición",
            "Identifica y destaca habilidades transferibles",
        ],
        (Language::Es, CompatibilityLevel::Low) => &[
            "Hay potencial pero con brechas significativas",
            "Considera desarrollar competencias específicas del área",
            "Destaca experiencias relevantes aunque sean indirectas",
        ],
        (Language::Es, CompatibilityLevel::Moderate) => &[
            "Destaca habilidades transferibles y experiencias relacionadas",
            "Enfatiza competencias universales aplicables",
            "Cuantifica resultados que demuestren capacidad",
        ],
        (Language::Es, _) => &[
            "Buena compatibilidad profesional detectada",
            "Continúa destacando tus principales competencias",
            "Cuantifica resultados e impacto específicos",
        ],
    }
}

fn improvement_line(language: Language, improvement: f64) -> String {
    match language {
        Language::En => format!("Score improved by {improvement:.2} points after optimization"),
        Language::Pt => format!("Score melhorado em {improvement:.2} pontos após otimização"),
        Language::Es => format!("Puntuación mejorada en {improvement:.2} puntos después de la optimización"),
    }
}

fn count_keywords(keywords: &str) -> usize {
    keywords.split(',').filter(|k| !k.trim().is_empty()).count()
}

fn details_block(
    language: Language,
    level: CompatibilityLevel,
    original_score: f64,
    new_score: f64,
    job_keywords: &str,
    resume_keywords: &str,
    warnings: &[String],
) -> String {
    let t = labels(language);
    let improvement = new_score - original_score;
    let job_count = count_keywords(job_keywords);
    let resume_count = count_keywords(resume_keywords);
    let coverage = if job_count > 0 {
        resume_count * 100 / job_count
    } else {
        0
    };

    let mut out = format!(
        "{}\n\n{}\n- {}: {:.3} ({}%)",
        t.title,
        t.scoring,
        t.original,
        original_score,
        percent(original_score)
    );

    // Only worth a line when the optimization actually moved the needle.
    if improvement > 0.01 {
        out.push_str(&format!(
            "\n- {}: {:.3} ({}%)\n- {}: +{:.3}",
            t.optimized,
            new_score,
            percent(new_score),
            t.improvement,
            improvement
        ));
    }

    out.push_str(&format!("\n- {}: {}", t.status, level.as_str()));

    out.push_str(&format!(
        "\n\n{}\n- {}: {}\n- {}: {}\n- {}: {}%",
        t.keywords, t.job_keywords, job_count, t.resume_keywords, resume_count, t.coverage, coverage
    ));

    if !warnings.is_empty() {
        let shown: Vec<&str> = warnings.iter().take(2).map(String::as_str).collect();
        out.push_str(&format!("\n\n{} {}", t.observations, shown.join("; ")));
    }

    out.push_str(&format!("\n\n{}\n{}", t.methodology, t.methodology_text));
    out
}
