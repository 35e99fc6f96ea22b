//! Markdown reporter for GitHub-flavored Markdown output

use crate::catalog::Catalog;
use crate::graph::{GraphData, NodeType};
use crate::models::{AlertSeverity, RiskLevel, SafetyReport, SupplementSafetyProfile};
use anyhow::Result;

fn risk_badge(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::High => "🔴 High",
        RiskLevel::Medium => "🟡 Medium",
        RiskLevel::Low => "🟢 Low",
    }
}

fn severity_badge(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Critical => "🔴 Critical",
        AlertSeverity::High => "🟠 High",
        AlertSeverity::Medium => "🟡 Medium",
        AlertSeverity::Low => "🔵 Low",
    }
}

/// Escape pipe characters so free text does not break table cells
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Render a safety report as GitHub-flavored Markdown
pub fn render_safety(report: &SafetyReport) -> Result<String> {
    let mut md = String::new();

    md.push_str("# Supplement Safety Report\n\n");
    md.push_str(&format!(
        "**Overall risk:** {}\n\n",
        risk_badge(report.overall_risk)
    ));

    let s = &report.summary;
    md.push_str("## Summary\n\n");
    md.push_str("| Severity | Count |\n|----------|------:|\n");
    md.push_str(&format!("| 🔴 Critical | {} |\n", s.critical));
    md.push_str(&format!("| 🟠 High | {} |\n", s.high));
    md.push_str(&format!("| 🟡 Medium | {} |\n", s.medium));
    md.push_str(&format!("| 🔵 Low | {} |\n", s.low));
    md.push_str(&format!("| **Total** | **{}** |\n\n", s.total));

    if !report.warnings.is_empty() {
        md.push_str("## Warnings\n\n");
        for (en, pl) in report.warnings.iter().zip(&report.polish_warnings) {
            md.push_str(&format!("- {} (_{}_)\n", en, pl));
        }
        md.push('\n');
    }

    if !report.safety_alerts.is_empty() {
        md.push_str("## Alerts\n\n");
        md.push_str("| Severity | Type | Supplements | Message | Recommendation |\n");
        md.push_str("|----------|------|-------------|---------|----------------|\n");
        for alert in &report.safety_alerts {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                severity_badge(alert.severity),
                alert.alert_type,
                cell(&alert.supplements.join(", ")),
                cell(&alert.message),
                cell(&alert.recommendation)
            ));
        }
        md.push('\n');
    }

    if !report.interaction_analysis.is_empty() {
        md.push_str("## Interactions\n\n");
        md.push_str("| Documented by | With | Type | Severity | Mechanism |\n");
        md.push_str("|---------------|------|------|----------|-----------|\n");
        for ia in &report.interaction_analysis {
            md.push_str(&format!(
                "| `{}` | `{}` | {} | {} | {} |\n",
                ia.supplement1,
                ia.supplement2,
                ia.interaction_type,
                ia.severity,
                cell(&ia.mechanism)
            ));
        }
        md.push('\n');
    }

    md.push_str("---\n\n");
    md.push_str("_This report is educational and does not replace medical advice._\n");
    Ok(md)
}

pub fn render_profile(profile: &SupplementSafetyProfile, name: &str) -> Result<String> {
    let mut md = String::new();
    md.push_str(&format!("# {} (`{}`)\n\n", name, profile.supplement_id));
    md.push_str(&format!(
        "**Risk:** {} | **Safe:** {}\n\n",
        risk_badge(profile.risk_level),
        if profile.is_safe { "yes" } else { "no" }
    ));
    if !profile.concerns.is_empty() {
        md.push_str("## Concerns\n\n");
        for concern in &profile.concerns {
            md.push_str(&format!("- {}\n", concern));
        }
        md.push_str("\n## Recommendations\n\n");
        for rec in &profile.recommendations {
            md.push_str(&format!("- {}\n", rec));
        }
    }
    Ok(md)
}

pub fn render_graph(data: &GraphData) -> Result<String> {
    let mut md = String::new();
    md.push_str("# Knowledge Graph\n\n");
    md.push_str(&format!(
        "{} nodes, {} relationships (layout seed `{}`, generated {})\n\n",
        data.nodes.len(),
        data.relationships.len(),
        data.layout_seed,
        data.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    md.push_str("## Nodes\n\n");
    md.push_str("| Type | Count |\n|------|------:|\n");
    for (node_type, count) in data.type_counts() {
        md.push_str(&format!("| {} | {} |\n", node_type, count));
    }
    md.push('\n');

    md.push_str("## Supplements\n\n");
    md.push_str("| Name | Polish name | Evidence | Importance |\n");
    md.push_str("|------|-------------|----------|-----------:|\n");
    for node in data
        .nodes
        .iter()
        .filter(|n| n.node_type == NodeType::Supplement)
    {
        md.push_str(&format!(
            "| {} | {} | {} | {:.2} |\n",
            cell(&node.name),
            cell(&node.polish_name),
            node.evidence_level,
            node.importance
        ));
    }
    md.push('\n');

    md.push_str("## Relationships\n\n");
    md.push_str("| Source | Type | Target | Strength |\n");
    md.push_str("|--------|------|--------|---------:|\n");
    for rel in &data.relationships {
        md.push_str(&format!(
            "| `{}` | {} | `{}` | {:.2} |\n",
            rel.source_id, rel.relationship_type, rel.target_id, rel.strength
        ));
    }

    if !data.mapping.unmapped.is_empty() {
        md.push_str("\n## Unmapped text\n\n");
        for entry in &data.mapping.unmapped {
            md.push_str(&format!(
                "- `{}` ({:?}): {}\n",
                entry.source_id, entry.kind, entry.text
            ));
        }
    }
    Ok(md)
}

pub fn render_catalog(catalog: &Catalog) -> Result<String> {
    let mut md = String::new();
    md.push_str("# Supplement Catalog\n\n");
    md.push_str("| ID | Name | Polish name | Category | Interactions |\n");
    md.push_str("|----|------|-------------|----------|-------------:|\n");
    for s in catalog.supplements() {
        md.push_str(&format!(
            "| `{}` | {} | {} | {} | {} |\n",
            s.id,
            cell(&s.name),
            cell(s.display_polish_name()),
            s.category,
            s.interactions.len()
        ));
    }
    Ok(md)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{generate_graph_data, GraphOptions};
    use crate::reporters::tests::test_report;

    #[test]
    fn test_markdown_safety_sections() {
        let md = render_safety(&test_report()).expect("render markdown");
        assert!(md.starts_with("# Supplement Safety Report"));
        assert!(md.contains("🔴 High"));
        assert!(md.contains("## Alerts"));
        assert!(md.contains("| `magnesium` | `vitamin-d3` |"));
    }

    #[test]
    fn test_markdown_escapes_pipes() {
        let mut report = test_report();
        report.safety_alerts[0].message = "a | b".into();
        let md = render_safety(&report).expect("render markdown");
        assert!(md.contains("a \\| b"));
    }

    #[test]
    fn test_markdown_graph_lists_unmapped() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let data = generate_graph_data(&catalog, &GraphOptions::default());
        let md = render_graph(&data).expect("render markdown");
        assert!(md.contains("## Relationships"));
        assert!(md.contains("## Unmapped text"));
    }
}
