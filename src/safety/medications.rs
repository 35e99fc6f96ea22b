//! Medication interaction rule

use super::{normalized_needles, SafetyContext, SafetyRule};
use crate::models::{AlertType, EvidenceLevel, SafetyAlert};

/// Collapse an interaction's evidence level onto the levels alerts report
///
/// Undocumented evidence defaults to MODERATE; anything weaker than WEAK is
/// reported as WEAK.
pub(crate) fn alert_evidence_level(level: Option<EvidenceLevel>) -> EvidenceLevel {
    match level {
        None => EvidenceLevel::Moderate,
        Some(EvidenceLevel::Strong) => EvidenceLevel::Strong,
        Some(EvidenceLevel::Moderate) => EvidenceLevel::Moderate,
        Some(_) => EvidenceLevel::Weak,
    }
}

/// Flags documented interactions between a supplement and the user's medications
pub struct MedicationInteractionRule;

impl SafetyRule for MedicationInteractionRule {
    fn name(&self) -> &'static str {
        "medication-interactions"
    }

    fn description(&self) -> &'static str {
        "Matches current medications against each supplement's documented interactions"
    }

    fn evaluate(&self, ctx: &SafetyContext<'_>) -> Vec<SafetyAlert> {
        let medications = normalized_needles(&ctx.profile.current_medications);
        if medications.is_empty() {
            return Vec::new();
        }

        let mut alerts = Vec::new();
        for supplement in ctx.supplements {
            for (needle, medication) in &medications {
                for interaction in supplement.interactions.iter().filter(|i| i.mentions(needle)) {
                    alerts.push(SafetyAlert {
                        rule: self.name().to_string(),
                        alert_type: AlertType::Interaction,
                        severity: interaction.severity.alert_severity(),
                        message: format!(
                            "Potential interaction with medication {}: {}",
                            medication, supplement.name
                        ),
                        polish_message: format!(
                            "Potencjalna interakcja z lekiem {}: {}",
                            medication,
                            supplement.display_polish_name()
                        ),
                        supplements: vec![supplement.id.clone()],
                        recommendation: interaction
                            .recommendation
                            .clone()
                            .unwrap_or_else(|| "Consult healthcare provider before use".into()),
                        polish_recommendation: interaction
                            .polish_recommendation
                            .clone()
                            .unwrap_or_else(|| "Skonsultuj się z lekarzem przed użyciem".into()),
                        evidence_level: alert_evidence_level(interaction.evidence_level),
                    });
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
    use crate::models::{AlertSeverity, InteractionSeverity, InteractionType, UserProfile};

    #[test]
    fn test_evidence_level_mapping() {
        assert_eq!(alert_evidence_level(None), EvidenceLevel::Moderate);
        assert_eq!(alert_evidence_level(Some(EvidenceLevel::Strong)), EvidenceLevel::Strong);
        assert_eq!(alert_evidence_level(Some(EvidenceLevel::Weak)), EvidenceLevel::Weak);
        assert_eq!(
            alert_evidence_level(Some(EvidenceLevel::Conflicting)),
            EvidenceLevel::Weak
        );
    }

    #[test]
    fn test_severity_maps_from_interaction() {
        let mut record = supplement("rhodiola", "Rhodiola rosea", "Różeniec górski");
        let mut ssri = interaction(
            "Antidepressants (SSRIs)",
            InteractionType::Additive,
            InteractionSeverity::Severe,
        );
        ssri.recommendation = Some("Do not combine".into());
        record.interactions = vec![
            ssri,
            interaction("Sedatives", InteractionType::Additive, InteractionSeverity::Mild),
        ];
        let profile = UserProfile {
            current_medications: vec!["ssri".into(), "sedatives".into(), " ".into()],
            ..adult()
        };
        let supplements = [&record];
        let alerts = MedicationInteractionRule.evaluate(&SafetyContext {
            profile: &profile,
            supplements: &supplements,
        });

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].severity, AlertSeverity::High);
        assert_eq!(alerts[0].recommendation, "Do not combine");
        assert!(alerts[0].message.contains("ssri"));
        assert_eq!(alerts[1].severity, AlertSeverity::Low);
        assert_eq!(alerts[1].recommendation, "Consult healthcare provider before use");
    }

    #[test]
    fn test_polish_substance_matches() {
        let mut record = supplement("omega-3", "Omega-3", "Omega-3");
        let mut warfarin = interaction(
            "Warfarin",
            InteractionType::Additive,
            InteractionSeverity::Moderate,
        );
        warfarin.polish_substance = Some("Warfaryna".into());
        record.interactions = vec![warfarin];
        let profile = UserProfile {
            current_medications: vec!["Warfaryna".into()],
            ..adult()
        };
        let supplements = [&record];
        let alerts = MedicationInteractionRule.evaluate(&SafetyContext {
            profile: &profile,
            supplements: &supplements,
        });
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Medium);
    }
}
