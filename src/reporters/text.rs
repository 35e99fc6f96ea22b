//! Text (terminal) reporter with colors and formatting

use crate::catalog::Catalog;
use crate::graph::{GraphData, MappingKind, NodeType};
use crate::models::{
    AlertSeverity, InteractionSeverity, RiskLevel, SafetyReport, SupplementSafetyProfile,
};
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

fn severity_color(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Critical => "\x1b[31m", // Red
        AlertSeverity::High => "\x1b[91m",     // Light red
        AlertSeverity::Medium => "\x1b[33m",   // Yellow
        AlertSeverity::Low => "\x1b[34m",      // Blue
    }
}

fn severity_tag(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Critical => "[C]",
        AlertSeverity::High => "[H]",
        AlertSeverity::Medium => "[M]",
        AlertSeverity::Low => "[L]",
    }
}

fn risk_color(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::High => "\x1b[31m",
        RiskLevel::Medium => "\x1b[33m",
        RiskLevel::Low => "\x1b[32m",
    }
}

fn interaction_color(severity: InteractionSeverity) -> &'static str {
    match severity {
        InteractionSeverity::Severe => "\x1b[31m",
        InteractionSeverity::Moderate => "\x1b[33m",
        InteractionSeverity::Mild => "\x1b[34m",
        InteractionSeverity::Beneficial => "\x1b[32m",
    }
}

/// Render a safety report as formatted terminal output
pub fn render_safety(report: &SafetyReport) -> Result<String> {
    let mut out = String::new();

    let risk_c = risk_color(report.overall_risk);
    out.push_str(&format!("\n{BOLD}Supplement Safety Check{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Overall risk: {risk_c}{BOLD}{}{RESET}\n\n",
        report.overall_risk.to_string().to_uppercase()
    ));

    let s = &report.summary;
    out.push_str(&format!("{BOLD}ALERTS{RESET} ({} total)\n", s.total));

    let mut summary_parts = Vec::new();
    for (count, severity) in [
        (s.critical, AlertSeverity::Critical),
        (s.high, AlertSeverity::High),
        (s.medium, AlertSeverity::Medium),
        (s.low, AlertSeverity::Low),
    ] {
        if count > 0 {
            summary_parts.push(format!(
                "{}{} {}{RESET}",
                severity_color(severity),
                count,
                severity
            ));
        }
    }
    if !summary_parts.is_empty() {
        out.push_str(&format!("  {}\n", summary_parts.join(" | ")));
    }
    out.push('\n');

    for alert in &report.safety_alerts {
        let sev_c = severity_color(alert.severity);
        out.push_str(&format!(
            "  {sev_c}{}{RESET}  {}  {DIM}[{}]{RESET}\n",
            severity_tag(alert.severity),
            alert.message,
            alert.supplements.join(", ")
        ));
        out.push_str(&format!("       {DIM}{}{RESET}\n", alert.polish_message));
        out.push_str(&format!("       → {}\n", alert.recommendation));
    }
    if !report.safety_alerts.is_empty() {
        out.push('\n');
    }

    if !report.interaction_analysis.is_empty() {
        out.push_str(&format!(
            "{BOLD}INTERACTIONS{RESET} ({})\n",
            report.interaction_analysis.len()
        ));
        for ia in &report.interaction_analysis {
            let c = interaction_color(ia.severity);
            out.push_str(&format!(
                "  {} ↔ {}  {c}{} {}{RESET}\n",
                ia.supplement1, ia.supplement2, ia.severity, ia.interaction_type
            ));
            out.push_str(&format!("       {DIM}{}{RESET}\n", ia.mechanism));
            if let Some(ref timing) = ia.timing_adjustment {
                out.push_str(&format!("       timing: {}\n", timing));
            }
            if let Some(factor) = ia.dosage_adjustment {
                out.push_str(&format!("       dosage factor: {:.1}\n", factor));
            }
        }
        out.push('\n');
    }

    if !report.warnings.is_empty() {
        out.push_str(&format!("{BOLD}WARNINGS{RESET}\n"));
        for (en, pl) in report.warnings.iter().zip(&report.polish_warnings) {
            out.push_str(&format!("  ! {}\n    {DIM}{}{RESET}\n", en, pl));
        }
        out.push('\n');
    }

    if report.summary.total == 0 && report.interaction_analysis.is_empty() {
        out.push_str(&format!(
            "{DIM}No concerns found for this profile.{RESET}\n"
        ));
    }

    Ok(out)
}

/// Render a per-supplement safety profile
pub fn render_profile(profile: &SupplementSafetyProfile, name: &str) -> Result<String> {
    let mut out = String::new();
    let risk_c = risk_color(profile.risk_level);
    let verdict = if profile.is_safe { "safe" } else { "not safe" };

    out.push_str(&format!(
        "\n{BOLD}{}{RESET} {DIM}({}){RESET}\n",
        name, profile.supplement_id
    ));
    out.push_str(&format!(
        "Risk: {risk_c}{BOLD}{}{RESET}  Verdict: {}\n",
        profile.risk_level, verdict
    ));

    if profile.concerns.is_empty() {
        out.push_str(&format!("{DIM}No concerns for this profile.{RESET}\n"));
        return Ok(out);
    }

    out.push_str(&format!("\n{BOLD}CONCERNS{RESET}\n"));
    for (en, pl) in profile.concerns.iter().zip(&profile.polish_concerns) {
        out.push_str(&format!("  - {}\n    {DIM}{}{RESET}\n", en, pl));
    }
    out.push_str(&format!("\n{BOLD}RECOMMENDATIONS{RESET}\n"));
    for rec in &profile.recommendations {
        out.push_str(&format!("  → {}\n", rec));
    }
    Ok(out)
}

/// Render a compact summary of assembled graph data
pub fn render_graph(data: &GraphData) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Knowledge Graph{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Nodes: {}  Relationships: {}  Layout seed: {}\n\n",
        data.nodes.len(),
        data.relationships.len(),
        data.layout_seed
    ));

    out.push_str(&format!("{BOLD}NODES BY TYPE{RESET}\n"));
    for (node_type, count) in data.type_counts() {
        out.push_str(&format!("  {:<20} {:>4}\n", node_type.to_string(), count));
    }
    out.push('\n');

    let mut ranked: Vec<_> = data
        .nodes
        .iter()
        .filter(|n| n.node_type == NodeType::Supplement)
        .collect();
    ranked.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    if !ranked.is_empty() {
        out.push_str(&format!("{BOLD}TOP SUPPLEMENTS{RESET}\n"));
        for node in ranked.iter().take(10) {
            out.push_str(&format!(
                "  {:<28} importance {:.2}  {DIM}{}{RESET}\n",
                node.name, node.importance, node.evidence_level
            ));
        }
        out.push('\n');
    }

    let mechanisms: Vec<_> = data
        .nodes
        .iter()
        .filter(|n| n.node_type == NodeType::Mechanism)
        .collect();
    if !mechanisms.is_empty() {
        out.push_str(&format!("{BOLD}MECHANISMS{RESET}\n"));
        for node in mechanisms {
            out.push_str(&format!(
                "  {:<28} {DIM}{}{RESET}\n",
                node.name,
                node.get_str("timeframe").unwrap_or("")
            ));
        }
        out.push('\n');
    }

    let unmapped = data.mapping.unmapped.len();
    if unmapped > 0 {
        out.push_str(&format!(
            "{DIM}{} text(s) matched no keyword: {} condition, {} compound, {} brain region (mapping v{}){RESET}\n",
            unmapped,
            data.mapping.unmapped_count(MappingKind::Condition),
            data.mapping.unmapped_count(MappingKind::Compound),
            data.mapping.unmapped_count(MappingKind::BrainRegion),
            data.mapping.version
        ));
    }

    Ok(out)
}

/// Render the supplement listing as an aligned table
pub fn render_catalog(catalog: &Catalog) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{BOLD}Catalog{RESET} ({} supplements, {} mechanisms, {} synergy groups)\n",
        catalog.len(),
        catalog.mechanisms().len(),
        catalog.synergies().len()
    ));
    out.push_str(&format!(
        "{DIM}  {:<16} {:<26} {:<14} INTERACTIONS{RESET}\n",
        "ID", "NAME", "CATEGORY"
    ));
    for s in catalog.supplements() {
        out.push_str(&format!(
            "  {:<16} {:<26} {:<14} {}\n",
            s.id,
            s.name,
            s.category,
            s.interactions.len()
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{generate_graph_data, GraphOptions};
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_render_safety() {
        let out = render_safety(&test_report()).expect("render text");
        assert!(out.contains("Overall risk"));
        assert!(out.contains("HIGH"));
        assert!(out.contains("[C]"));
        assert!(out.contains("magnesium ↔ vitamin-d3"));
        assert!(out.contains("Zidentyfikowano"));
    }

    #[test]
    fn test_text_render_empty_report() {
        let out = render_safety(&SafetyReport::default()).expect("render text");
        assert!(out.contains("No concerns found"));
        assert!(!out.contains("INTERACTIONS"));
    }

    #[test]
    fn test_text_render_graph() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let data = generate_graph_data(&catalog, &GraphOptions::default());
        let out = render_graph(&data).expect("render text");
        assert!(out.contains("SUPPLEMENT"));
        assert!(out.contains("TOP SUPPLEMENTS"));
        assert!(out.contains("matched no keyword"));
    }

    #[test]
    fn test_text_render_profile_without_concerns() {
        let profile = SupplementSafetyProfile {
            supplement_id: "magnesium".into(),
            is_safe: true,
            ..Default::default()
        };
        let out = render_profile(&profile, "Magnesium").expect("render text");
        assert!(out.contains("Magnesium"));
        assert!(out.contains("No concerns"));
    }

    #[test]
    fn test_text_render_catalog() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let out = render_catalog(&catalog).expect("render text");
        assert!(out.contains("bacopa"));
        assert!(out.contains("6 supplements"));
    }
}
