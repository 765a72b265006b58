//! Score adjustment — applies the compatibility multiplier to a raw
//! similarity score and phrases the adjustment for the user.

use crate::prompts::Language;
use crate::scoring::compatibility::{CompatibilityAssessment, CompatibilityLevel};

/// Applies the damping multiplier and builds adjustment warnings.
///
/// The product is clamped to [0, 1]: raw cosine output is not guaranteed to
/// land in that range, and the adjusted value is rendered downstream as a
/// percentage. Warning policy: Incompatible gets an explicit reduction
/// warning, Low/Moderate a milder one, High/Excellent none; the assessment's
/// own reasons follow in order.
pub fn adjust_score(
    raw_score: f64,
    assessment: &CompatibilityAssessment,
    language: Language,
) -> (f64, Vec<String>) {
    let adjusted = (raw_score * assessment.multiplier).clamp(0.0, 1.0);

    let mut warnings = Vec::new();
    match assessment.level {
        CompatibilityLevel::Incompatible => {
            warnings.push(adjustment_warning(language, raw_score, adjusted, true));
        }
        CompatibilityLevel::Low | CompatibilityLevel::Moderate => {
            warnings.push(adjustment_warning(language, raw_score, adjusted, false));
        }
        CompatibilityLevel::High | CompatibilityLevel::Excellent => {}
    }
    warnings.extend(assessment.reasons.iter().cloned());

    (adjusted, warnings)
}

/// Integer percentage the way the reports render scores.
pub(crate) fn percent(score: f64) -> i64 {
    (score * 100.0) as i64
}

fn adjustment_warning(language: Language, from: f64, to: f64, incompatible: bool) -> String {
    let (from, to) = (percent(from), percent(to));
    match (language, incompatible) {
        (Language::En, true) => format!(
            "Score reduced from {from}% to {to}% due to professional area incompatibility"
        ),
        (Language::En, false) => {
            format!("Score adjusted from {from}% to {to}% due to limited compatibility")
        }
        (Language::Pt, true) => format!(
            "Score ajustado de {from}% para {to}% devido à incompatibilidade entre áreas"
        ),
        (Language::Pt, false) => {
            format!("Score ajustado de {from}% para {to}% por compatibilidade limitada")
        }
        (Language::Es, true) => format!(
            "Puntuación ajustada de {from}% a {to}% debido a incompatibilidad entre áreas"
        ),
        (Language::Es, false) => {
            format!("Puntuación ajustada de {from}% a {to}% por compatibilidad limitada")
        }
    }
}
