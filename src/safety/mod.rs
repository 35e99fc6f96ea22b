//! Supplement safety analysis
//!
//! This module cross-references a [`UserProfile`] against catalog metadata
//! for the selected supplements:
//! - `SafetyRule` trait implemented by each profile-driven check
//! - `SafetyAnalyzer` that runs the rules, the pairwise interaction pass,
//!   warning synthesis and risk aggregation
//!
//! Analysis is fail-open: unknown supplement ids, missing fields and blank
//! inputs produce no alert rather than an error. The tool is advisory, so
//! `analyze` never fails and never panics.

mod allergies;
mod contraindications;
mod interactions;
mod medications;
mod profile;
mod risk;

pub use allergies::AllergyRule;
pub use contraindications::ContraindicationRule;
pub use interactions::{analyze_supplement_interactions, InteractionDedup};
pub use medications::MedicationInteractionRule;
pub use profile::supplement_safety_profile;
pub use risk::{calculate_overall_risk, generate_warnings, Warnings};

use crate::catalog::SupplementLookup;
use crate::models::{
    AlertSummary, SafetyAlert, SafetyReport, SupplementInput, SupplementRecord, UserProfile,
};
use std::collections::HashSet;
use tracing::{debug, info};

/// Inputs shared by every rule for a single analysis
pub struct SafetyContext<'a> {
    pub profile: &'a UserProfile,
    /// Resolved supplements, in selection order
    pub supplements: &'a [&'a SupplementRecord],
}

/// A single profile-driven safety check
///
/// Rules are pure: they read the context and return the alerts they raise.
/// Alert order within a rule follows supplement selection order.
pub trait SafetyRule: Send + Sync {
    /// Stable identifier, copied into each alert's `rule` field
    fn name(&self) -> &'static str;

    /// Human-readable description of what the rule checks
    fn description(&self) -> &'static str;

    fn evaluate(&self, ctx: &SafetyContext<'_>) -> Vec<SafetyAlert>;
}

/// Runs every safety rule plus the pairwise interaction pass
pub struct SafetyAnalyzer {
    rules: Vec<Box<dyn SafetyRule>>,
    dedup: InteractionDedup,
}

impl SafetyAnalyzer {
    /// Analyzer with the default rule set in report order:
    /// contraindications, medication interactions, allergies
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            dedup: InteractionDedup::default(),
        }
    }

    /// Set the policy for interactions documented by both supplements
    pub fn with_dedup(mut self, dedup: InteractionDedup) -> Self {
        self.dedup = dedup;
        self
    }

    /// Append a custom rule after the defaults
    pub fn with_rule(mut self, rule: Box<dyn SafetyRule>) -> Self {
        debug!("Registering safety rule: {}", rule.name());
        self.rules.push(rule);
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn dedup(&self) -> InteractionDedup {
        self.dedup
    }

    /// Analyze the selected supplements for one user.
    /// Unknown ids are skipped and a repeated id is analyzed only once.
    pub fn analyze<L>(
        &self,
        profile: &UserProfile,
        inputs: &[SupplementInput],
        catalog: &L,
    ) -> SafetyReport
    where
        L: SupplementLookup + ?Sized,
    {
        let supplements = resolve_supplements(inputs, catalog);
        let ctx = SafetyContext {
            profile,
            supplements: &supplements,
        };

        let mut safety_alerts = Vec::new();
        for rule in &self.rules {
            let alerts = rule.evaluate(&ctx);
            debug!("Rule {} raised {} alert(s)", rule.name(), alerts.len());
            safety_alerts.extend(alerts);
        }

        let interaction_analysis = analyze_supplement_interactions(&supplements, self.dedup);

        let Warnings {
            warnings,
            polish_warnings,
        } = generate_warnings(&safety_alerts, &interaction_analysis);
        let overall_risk = calculate_overall_risk(&safety_alerts, &interaction_analysis);
        let summary = AlertSummary::from_alerts(&safety_alerts);

        info!(
            "Safety analysis: {} supplement(s), {} alert(s), {} interaction(s), risk {}",
            supplements.len(),
            summary.total,
            interaction_analysis.len(),
            overall_risk
        );

        SafetyReport {
            safety_alerts,
            interaction_analysis,
            overall_risk,
            warnings,
            polish_warnings,
            summary,
        }
    }
}

impl Default for SafetyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn default_rules() -> Vec<Box<dyn SafetyRule>> {
    vec![
        Box::new(ContraindicationRule),
        Box::new(MedicationInteractionRule),
        Box::new(AllergyRule),
    ]
}

/// Resolve inputs against the catalog, dropping unknown and repeated ids
fn resolve_supplements<'c, L>(inputs: &[SupplementInput], catalog: &'c L) -> Vec<&'c SupplementRecord>
where
    L: SupplementLookup + ?Sized,
{
    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(inputs.len());
    for input in inputs {
        if !seen.insert(input.supplement_id.as_str()) {
            debug!("Ignoring repeated supplement id: {}", input.supplement_id);
            continue;
        }
        match catalog.supplement(&input.supplement_id) {
            Some(record) => resolved.push(record),
            None => debug!("Unknown supplement id skipped: {}", input.supplement_id),
        }
    }
    resolved
}

/// Lowercased, trimmed copies of free-text user inputs; blanks dropped
pub(crate) fn normalized_needles(values: &[String]) -> Vec<(String, &str)> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| (v.to_lowercase(), v))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::*;

    pub fn supplement(id: &str, name: &str, polish_name: &str) -> SupplementRecord {
        SupplementRecord {
            id: id.into(),
            name: name.into(),
            polish_name: polish_name.into(),
            ..Default::default()
        }
    }

    pub fn interaction(
        substance: &str,
        interaction_type: InteractionType,
        severity: InteractionSeverity,
    ) -> Interaction {
        Interaction {
            substance: substance.into(),
            polish_substance: None,
            interaction_type,
            severity,
            mechanism: None,
            polish_mechanism: None,
            clinical_significance: String::new(),
            polish_clinical_significance: None,
            recommendation: None,
            polish_recommendation: None,
            evidence_level: None,
        }
    }

    pub fn adult() -> UserProfile {
        UserProfile {
            age: 35,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::*;
    use std::collections::HashMap;

    fn catalog_of(records: Vec<SupplementRecord>) -> HashMap<String, SupplementRecord> {
        records.into_iter().map(|r| (r.id.clone(), r)).collect()
    }

    fn inputs(ids: &[&str]) -> Vec<SupplementInput> {
        ids.iter().map(|id| SupplementInput::new(*id)).collect()
    }

    #[test]
    fn test_empty_selection_is_low_risk() {
        let analyzer = SafetyAnalyzer::new();
        let report = analyzer.analyze(&adult(), &[], &HashMap::new());
        assert!(report.safety_alerts.is_empty());
        assert!(report.interaction_analysis.is_empty());
        assert_eq!(report.overall_risk, RiskLevel::Low);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let catalog = catalog_of(vec![supplement("a", "Alpha", "Alfa")]);
        let report = SafetyAnalyzer::new().analyze(&adult(), &inputs(&["missing", "a"]), &catalog);
        assert_eq!(report.overall_risk, RiskLevel::Low);
        assert_eq!(report.summary.total, 0);
    }

    #[test]
    fn test_pregnancy_contraindication_raises_high_alert() {
        let mut record = supplement("bacopa", "Bacopa", "Bakopa");
        record.contraindications = vec!["Pregnancy".into()];
        let catalog = catalog_of(vec![record]);
        let profile = UserProfile {
            pregnant: true,
            ..adult()
        };

        let report = SafetyAnalyzer::new().analyze(&profile, &inputs(&["bacopa"]), &catalog);

        let alert = report
            .safety_alerts
            .iter()
            .find(|a| a.alert_type == AlertType::Contraindication)
            .expect("contraindication alert");
        assert_eq!(alert.severity, AlertSeverity::High);
        assert_eq!(alert.supplements, vec!["bacopa".to_string()]);
        assert_eq!(report.overall_risk, RiskLevel::Medium);
    }

    #[test]
    fn test_fish_allergy_raises_critical_alert() {
        let mut record = supplement("omega-3", "Omega-3 EPA/DHA", "Kwasy omega-3");
        record.common_names = vec!["Fish oil".into()];
        let catalog = catalog_of(vec![record]);
        let profile = UserProfile {
            allergies: vec!["Fish".into()],
            ..adult()
        };

        let report = SafetyAnalyzer::new().analyze(&profile, &inputs(&["omega-3"]), &catalog);

        let critical: Vec<_> = report
            .safety_alerts
            .iter()
            .filter(|a| a.severity == AlertSeverity::Critical)
            .collect();
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].alert_type, AlertType::SideEffectRisk);
        assert_eq!(report.overall_risk, RiskLevel::High);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("critical"));
    }

    #[test]
    fn test_alerts_follow_rule_order() {
        let mut record = supplement("x", "Xylo", "Ksylo");
        record.contraindications = vec!["Pregnancy".into()];
        record.interactions = vec![interaction(
            "Warfarin",
            InteractionType::Additive,
            InteractionSeverity::Moderate,
        )];
        let catalog = catalog_of(vec![record]);
        let profile = UserProfile {
            pregnant: true,
            allergies: vec!["xylo".into()],
            current_medications: vec!["warfarin".into()],
            ..adult()
        };

        let report = SafetyAnalyzer::new().analyze(&profile, &inputs(&["x"]), &catalog);
        let rules: Vec<&str> = report.safety_alerts.iter().map(|a| a.rule.as_str()).collect();
        assert_eq!(rules, vec!["contraindications", "medication-interactions", "allergies"]);
        assert_eq!(report.summary.total, 3);
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let catalog = Catalog::builtin().unwrap();
        let profile = UserProfile {
            age: 70,
            pregnant: true,
            allergies: vec!["fish".into()],
            current_medications: vec!["Warfarin".into(), "SSRI".into()],
            health_conditions: vec!["kidney".into()],
            ..Default::default()
        };
        let selection = inputs(&["omega-3", "magnesium", "vitamin-d3", "rhodiola", "bacopa"]);
        let analyzer = SafetyAnalyzer::new();

        let first = analyzer.analyze(&profile, &selection, &catalog);
        let second = analyzer.analyze(&profile, &selection, &catalog);
        assert_eq!(first.safety_alerts, second.safety_alerts);
        assert_eq!(first.interaction_analysis, second.interaction_analysis);
        assert_eq!(first.overall_risk, second.overall_risk);
    }

    #[test]
    fn test_repeated_ids_analyzed_once() {
        let mut record = supplement("x", "Xylo", "Ksylo");
        record.contraindications = vec!["Pregnancy".into()];
        let catalog = catalog_of(vec![record]);
        let profile = UserProfile {
            pregnant: true,
            ..adult()
        };
        let report = SafetyAnalyzer::new().analyze(&profile, &inputs(&["x", "x"]), &catalog);
        assert_eq!(report.summary.total, 1);
        assert!(report.interaction_analysis.is_empty());
    }

    #[test]
    fn test_merged_interaction_keeps_severe_risk() {
        let mut alpha = supplement("alpha", "Alpha", "Alfa");
        let mut mild = interaction("Beta", InteractionType::Additive, InteractionSeverity::Mild);
        mild.mechanism = Some("Shared pathway".into());
        alpha.interactions = vec![mild];

        let mut beta = supplement("beta", "Beta", "Beta");
        let mut severe = interaction("Alpha", InteractionType::Additive, InteractionSeverity::Severe);
        severe.mechanism = Some("Shared pathway".into());
        beta.interactions = vec![severe];

        let catalog = catalog_of(vec![alpha, beta]);
        let report = SafetyAnalyzer::new().analyze(&adult(), &inputs(&["alpha", "beta"]), &catalog);

        assert_eq!(report.interaction_analysis.len(), 1);
        assert_eq!(report.interaction_analysis[0].severity, InteractionSeverity::Severe);
        assert_eq!(report.overall_risk, RiskLevel::Medium);
        assert_eq!(
            report.warnings,
            vec!["1 severe supplement interaction(s) detected".to_string()]
        );
    }

    struct AlwaysAlert;

    impl SafetyRule for AlwaysAlert {
        fn name(&self) -> &'static str {
            "always"
        }

        fn description(&self) -> &'static str {
            "Raises one low alert per supplement"
        }

        fn evaluate(&self, ctx: &SafetyContext<'_>) -> Vec<SafetyAlert> {
            ctx.supplements
                .iter()
                .map(|s| SafetyAlert {
                    rule: self.name().into(),
                    alert_type: AlertType::SideEffectRisk,
                    severity: AlertSeverity::Low,
                    message: String::new(),
                    polish_message: String::new(),
                    supplements: vec![s.id.clone()],
                    recommendation: String::new(),
                    polish_recommendation: String::new(),
                    evidence_level: EvidenceLevel::Weak,
                })
                .collect()
        }
    }

    #[test]
    fn test_custom_rule_runs_after_defaults() {
        let analyzer = SafetyAnalyzer::new().with_rule(Box::new(AlwaysAlert));
        assert_eq!(analyzer.rule_names().last(), Some(&"always"));

        let catalog = catalog_of(vec![
            supplement("a", "Alpha", "Alfa"),
            supplement("b", "Beta", "Beta"),
            supplement("c", "Gamma", "Gamma"),
        ]);
        let report = analyzer.analyze(&adult(), &inputs(&["a", "b", "c"]), &catalog);
        assert_eq!(report.summary.low, 3);
        // more than two alerts is enough for medium
        assert_eq!(report.overall_risk, RiskLevel::Medium);
    }
}
