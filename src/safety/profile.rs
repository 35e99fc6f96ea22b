//! Quick per-supplement safety overview

use super::contraindications::{has_pregnancy_contraindication, MAX_ADULT_AGE, MIN_ADULT_AGE};
use crate::models::{
    RiskLevel, SideEffectSeverity, SupplementRecord, SupplementSafetyProfile, UserProfile,
};

/// Summarize concerns for one supplement and one user
///
/// Concerns are raised for a pregnancy contraindication (when pregnant), an
/// age outside the adult range, and any severe documented side effect.
/// More than two concerns is high risk; any concern is medium.
pub fn supplement_safety_profile(
    supplement: &SupplementRecord,
    profile: &UserProfile,
) -> SupplementSafetyProfile {
    let mut result = SupplementSafetyProfile {
        supplement_id: supplement.id.clone(),
        ..Default::default()
    };

    let mut concern = |text: &str, polish_text: &str, rec: &str, polish_rec: &str| {
        result.concerns.push(text.to_string());
        result.polish_concerns.push(polish_text.to_string());
        result.recommendations.push(rec.to_string());
        result.polish_recommendations.push(polish_rec.to_string());
    };

    if profile.pregnant && has_pregnancy_contraindication(supplement) {
        concern(
            "Contraindicated during pregnancy",
            "Przeciwwskazane w czasie ciąży",
            "Avoid use during pregnancy",
            "Unikaj stosowania w czasie ciąży",
        );
    }

    if profile.age < MIN_ADULT_AGE || profile.age > MAX_ADULT_AGE {
        concern(
            "Age-related safety concerns",
            "Obawy dotyczące bezpieczeństwa związane z wiekiem",
            "Consult healthcare provider",
            "Skonsultuj się z lekarzem",
        );
    }

    if supplement
        .side_effects
        .iter()
        .any(|e| e.severity == SideEffectSeverity::Severe)
    {
        concern(
            "May cause severe side effects",
            "Może powodować ciężkie działania niepożądane",
            "Monitor for side effects closely",
            "Dokładnie obserwuj działania niepożądane",
        );
    }

    result.is_safe = result.concerns.is_empty();
    result.risk_level = match result.concerns.len() {
        0 => RiskLevel::Low,
        1 | 2 => RiskLevel::Medium,
        _ => RiskLevel::High,
    };
    result
}
