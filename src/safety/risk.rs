//! Warning synthesis and overall risk aggregation

use crate::models::{
    AlertSeverity, InteractionAnalysis, InteractionSeverity, RiskLevel, SafetyAlert,
};

/// Bilingual summary lines for a report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warnings {
    pub warnings: Vec<String>,
    pub polish_warnings: Vec<String>,
}

fn count_alerts(alerts: &[SafetyAlert], severity: AlertSeverity) -> usize {
    alerts.iter().filter(|a| a.severity == severity).count()
}

fn count_severe(interactions: &[InteractionAnalysis]) -> usize {
    interactions
        .iter()
        .filter(|i| i.severity == InteractionSeverity::Severe)
        .count()
}

/// One line per non-empty tier: high alerts, critical alerts, severe interactions
pub fn generate_warnings(alerts: &[SafetyAlert], interactions: &[InteractionAnalysis]) -> Warnings {
    let mut out = Warnings::default();

    let high = count_alerts(alerts, AlertSeverity::High);
    if high > 0 {
        out.warnings
            .push(format!("{} high-risk safety concern(s) identified", high));
        out.polish_warnings.push(format!(
            "{} wysokiego ryzyka obaw dotyczących bezpieczeństwa",
            high
        ));
    }

    let critical = count_alerts(alerts, AlertSeverity::Critical);
    if critical > 0 {
        out.warnings.push(format!(
            "{} critical safety concern(s) - immediate attention required",
            critical
        ));
        out.polish_warnings.push(format!(
            "{} krytycznych obaw dotyczących bezpieczeństwa - wymagana natychmiastowa uwaga",
            critical
        ));
    }

    let severe = count_severe(interactions);
    if severe > 0 {
        out.warnings
            .push(format!("{} severe supplement interaction(s) detected", severe));
        out.polish_warnings.push(format!(
            "{} ciężkich interakcji między suplementami wykrytych",
            severe
        ));
    }

    out
}

/// Aggregate risk for a report
///
/// - high: any critical alert, or a high alert together with a severe interaction
/// - medium: any high alert, any severe interaction, or more than two alerts
/// - low: otherwise
pub fn calculate_overall_risk(
    alerts: &[SafetyAlert],
    interactions: &[InteractionAnalysis],
) -> RiskLevel {
    let has_critical = alerts.iter().any(|a| a.severity == AlertSeverity::Critical);
    let has_high = alerts.iter().any(|a| a.severity == AlertSeverity::High);
    let has_severe = count_severe(interactions) > 0;

    if has_critical || (has_high && has_severe) {
        RiskLevel::High
    } else if has_high || has_severe || alerts.len() > 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
