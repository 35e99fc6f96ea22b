//! Allergy rule
//!
//! Allergens are matched as case-insensitive substrings of everything a
//! supplement is called (name, scientific name, common names and their Polish
//! variants) and of each active compound's names. There is no explicit
//! allergen field, so "fish" matches a product commonly called "fish oil".

use super::{normalized_needles, SafetyContext, SafetyRule};
use crate::models::{AlertSeverity, AlertType, EvidenceLevel, SafetyAlert};

pub struct AllergyRule;

impl AllergyRule {
    fn alert(&self, supplement_id: &str, message: String, polish_message: String) -> SafetyAlert {
        SafetyAlert {
            rule: self.name().to_string(),
            alert_type: AlertType::SideEffectRisk,
            severity: AlertSeverity::Critical,
            message,
            polish_message,
            supplements: vec![supplement_id.to_string()],
            recommendation: "Avoid use due to allergy risk".to_string(),
            polish_recommendation: "Unikaj stosowania ze względu na ryzyko alergii".to_string(),
            evidence_level: EvidenceLevel::Strong,
        }
    }
}

impl SafetyRule for AllergyRule {
    fn name(&self) -> &'static str {
        "allergies"
    }

    fn description(&self) -> &'static str {
        "Matches allergens against supplement and active compound names"
    }

    fn evaluate(&self, ctx: &SafetyContext<'_>) -> Vec<SafetyAlert> {
        let allergies = normalized_needles(&ctx.profile.allergies);
        if allergies.is_empty() {
            return Vec::new();
        }

        let mut alerts = Vec::new();
        for supplement in ctx.supplements {
            let name_text = supplement.name_text();
            for (allergen, _) in &allergies {
                if name_text.contains(allergen.as_str()) {
                    alerts.push(self.alert(
                        &supplement.id,
                        format!("Potential allergic reaction risk: {}", supplement.name),
                        format!(
                            "Ryzyko reakcji alergicznej: {}",
                            supplement.display_polish_name()
                        ),
                    ));
                }
            }

            for compound in &supplement.active_compounds {
                let polish = compound.polish_name.as_deref().unwrap_or_default();
                let compound_text = format!("{} {}", compound.name, polish).to_lowercase();
                for (allergen, _) in &allergies {
                    if compound_text.contains(allergen.as_str()) {
                        alerts.push(self.alert(
                            &supplement.id,
                            format!(
                                "Potential allergic reaction to active compound: {}",
                                compound.name
                            ),
                            format!(
                                "Ryzyko reakcji alergicznej na związek czynny: {}",
                                compound.polish_name.as_deref().unwrap_or(&compound.name)
                            ),
                        ));
                    }
                }
            }
        }
        alerts
    }
}
