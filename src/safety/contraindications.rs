//! Contraindication rule
//!
//! Scans each supplement's contraindication strings for pregnancy,
//! breastfeeding, age-group and health-condition matches.

use super::{normalized_needles, SafetyContext, SafetyRule};
use crate::models::{AlertSeverity, AlertType, EvidenceLevel, SafetyAlert, SupplementRecord};

const PREGNANCY_KEYWORDS: &[&str] = &["pregnancy", "ciąża"];
const BREASTFEEDING_KEYWORDS: &[&str] = &["breastfeeding", "karmienie piersią"];
const CHILD_KEYWORDS: &[&str] = &["children", "dzieci"];
const ELDERLY_KEYWORDS: &[&str] = &["elderly", "osoby starsze"];

/// Users younger than this are checked against child-related terms
pub const MIN_ADULT_AGE: u32 = 18;
/// Users older than this are checked against elderly-related terms
pub const MAX_ADULT_AGE: u32 = 65;

fn mentions_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text_lower.contains(k))
}

/// Whether a supplement lists a pregnancy contraindication
pub(crate) fn has_pregnancy_contraindication(supplement: &SupplementRecord) -> bool {
    supplement
        .contraindications
        .iter()
        .any(|c| mentions_any(&c.to_lowercase(), PREGNANCY_KEYWORDS))
}

pub struct ContraindicationRule;

impl ContraindicationRule {
    const NAME: &'static str = "contraindications";

    fn alert(
        supplement: &SupplementRecord,
        severity: AlertSeverity,
        evidence_level: EvidenceLevel,
        message: String,
        polish_message: String,
        recommendation: &str,
        polish_recommendation: &str,
    ) -> SafetyAlert {
        SafetyAlert {
            rule: Self::NAME.to_string(),
            alert_type: AlertType::Contraindication,
            severity,
            message,
            polish_message,
            supplements: vec![supplement.id.clone()],
            recommendation: recommendation.to_string(),
            polish_recommendation: polish_recommendation.to_string(),
            evidence_level,
        }
    }
}

impl SafetyRule for ContraindicationRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Matches pregnancy, breastfeeding, age and health conditions against contraindications"
    }

    fn evaluate(&self, ctx: &SafetyContext<'_>) -> Vec<SafetyAlert> {
        let profile = ctx.profile;
        let conditions = normalized_needles(&profile.health_conditions);
        let mut alerts = Vec::new();

        for supplement in ctx.supplements {
            let lowered: Vec<String> = supplement
                .contraindications
                .iter()
                .map(|c| c.to_lowercase())
                .collect();
            let polish_name = supplement.display_polish_name();

            if profile.pregnant {
                for _ in lowered.iter().filter(|c| mentions_any(c, PREGNANCY_KEYWORDS)) {
                    alerts.push(Self::alert(
                        supplement,
                        AlertSeverity::High,
                        EvidenceLevel::Strong,
                        format!("Contraindicated during pregnancy: {}", supplement.name),
                        format!("Przeciwwskazane w czasie ciąży: {}", polish_name),
                        "Avoid use during pregnancy or consult healthcare provider",
                        "Unikaj stosowania w czasie ciąży lub skonsultuj się z lekarzem",
                    ));
                }
            }

            if profile.breastfeeding {
                for _ in lowered
                    .iter()
                    .filter(|c| mentions_any(c, BREASTFEEDING_KEYWORDS))
                {
                    alerts.push(Self::alert(
                        supplement,
                        AlertSeverity::Medium,
                        EvidenceLevel::Moderate,
                        format!("Use with caution while breastfeeding: {}", supplement.name),
                        format!("Stosuj ostrożnie podczas karmienia piersią: {}", polish_name),
                        "Monitor infant for adverse effects or consult healthcare provider",
                        "Obserwuj dziecko pod kątem działań niepożądanych lub skonsultuj się z lekarzem",
                    ));
                }
            }

            let is_minor = profile.age < MIN_ADULT_AGE;
            let is_elderly = profile.age > MAX_ADULT_AGE;
            for _ in lowered.iter().filter(|c| {
                (is_minor && mentions_any(c, CHILD_KEYWORDS))
                    || (is_elderly && mentions_any(c, ELDERLY_KEYWORDS))
            }) {
                alerts.push(Self::alert(
                    supplement,
                    AlertSeverity::Medium,
                    EvidenceLevel::Moderate,
                    format!("Age-related contraindication: {}", supplement.name),
                    format!("Przeciwwskazanie związane z wiekiem: {}", polish_name),
                    "Not recommended for your age group",
                    "Nie zalecane dla Twojej grupy wiekowej",
                ));
            }

            for (condition, _) in &conditions {
                for _ in lowered.iter().filter(|c| c.contains(condition.as_str())) {
                    alerts.push(Self::alert(
                        supplement,
                        AlertSeverity::High,
                        EvidenceLevel::Strong,
                        format!("Contraindicated for your health condition: {}", supplement.name),
                        format!("Przeciwwskazane przy Twoim stanie zdrowia: {}", polish_name),
                        "Avoid use or consult healthcare provider",
                        "Unikaj stosowania lub skonsultuj się z lekarzem",
                    ));
                }
            }
        }

        alerts
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::models::UserProfile;

    fn run(profile: &UserProfile, record: &SupplementRecord) -> Vec<SafetyAlert> {
        let supplements = [record];
        ContraindicationRule.evaluate(&SafetyContext {
            profile,
            supplements: &supplements,
        })
    }

    fn with_contraindications(items: &[&str]) -> SupplementRecord {
        let mut record = supplement("s", "Sample", "Próbka");
        record.contraindications = items.iter().map(|s| s.to_string()).collect();
        record
    }

    #[test]
    fn test_pregnancy_matches_polish_keyword() {
        let record = with_contraindications(&["Ciąża i okres okołoporodowy"]);
        let profile = UserProfile {
            pregnant: true,
            ..adult()
        };
        let alerts = run(&profile, &record);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].evidence_level, EvidenceLevel::Strong);
        assert!(alerts[0].polish_message.contains("Próbka"));
    }

    #[test]
    fn test_no_alert_when_not_pregnant() {
        let record = with_contraindications(&["Pregnancy"]);
        assert!(run(&adult(), &record).is_empty());
    }

    #[test]
    fn test_one_alert_per_matching_string() {
        let record = with_contraindications(&["Pregnancy", "Ciąża", "Bradycardia"]);
        let profile = UserProfile {
            pregnant: true,
            ..adult()
        };
        assert_eq!(run(&profile, &record).len(), 2);
    }

    #[test]
    fn test_breastfeeding_is_medium() {
        let record = with_contraindications(&["Breastfeeding women"]);
        let profile = UserProfile {
            breastfeeding: true,
            ..adult()
        };
        let alerts = run(&profile, &record);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Medium);
        assert_eq!(alerts[0].evidence_level, EvidenceLevel::Moderate);
    }

    #[test]
    fn test_age_boundaries() {
        let record = with_contraindications(&["Children under 12", "Elderly patients"]);

        let child = UserProfile {
            age: 17,
            ..Default::default()
        };
        assert_eq!(run(&child, &record).len(), 1);

        let eighteen = UserProfile {
            age: 18,
            ..Default::default()
        };
        assert!(run(&eighteen, &record).is_empty());

        let sixty_five = UserProfile {
            age: 65,
            ..Default::default()
        };
        assert!(run(&sixty_five, &record).is_empty());

        let senior = UserProfile {
            age: 66,
            ..Default::default()
        };
        let alerts = run(&senior, &record);
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].message.starts_with("Age-related"));
    }

    #[test]
    fn test_health_condition_case_insensitive_substring() {
        let record = with_contraindications(&["Severe kidney disease"]);
        let profile = UserProfile {
            health_conditions: vec!["Kidney".into()],
            ..adult()
        };
        let alerts = run(&profile, &record);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::High);
    }

    #[test]
    fn test_blank_condition_matches_nothing() {
        let record = with_contraindications(&["Anything"]);
        let profile = UserProfile {
            health_conditions: vec!["".into(), "   ".into()],
            ..adult()
        };
        assert!(run(&profile, &record).is_empty());
    }

    #[test]
    fn test_has_pregnancy_contraindication() {
        assert!(has_pregnancy_contraindication(&with_contraindications(&[
            "Pregnancy (insufficient data)"
        ])));
        assert!(!has_pregnancy_contraindication(&with_contraindications(&[
            "Hypercalcemia"
        ])));
    }
}
