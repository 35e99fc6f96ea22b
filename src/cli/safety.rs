//! Safety command - analyze a supplement stack against a health profile

use super::{write_output, Env};
use crate::catalog::SupplementLookup;
use crate::models::{RiskLevel, SupplementInput, UserProfile};
use crate::reporters::{self, OutputFormat};
use crate::safety::SafetyAnalyzer;
use anyhow::Result;
use std::path::Path;
use tracing::warn;

pub fn run(
    env: &Env,
    user: UserProfile,
    supplement_ids: &[String],
    format: &str,
    output: Option<&Path>,
    fail_on: Option<String>,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let fail_on = match fail_on {
        Some(level) => Some(level.parse::<RiskLevel>()?),
        None => env.config.safety.fail_on,
    };

    for id in supplement_ids {
        if env.catalog.supplement(id).is_none() {
            warn!("Unknown supplement '{}' is skipped", id);
        }
    }
    let inputs: Vec<SupplementInput> = supplement_ids.iter().map(SupplementInput::new).collect();

    let analyzer = SafetyAnalyzer::new().with_dedup(env.config.safety.interaction_dedup);
    let report = analyzer.analyze(&user, &inputs, &env.catalog);

    let rendered = reporters::render_safety(&report, format)?;
    write_output(&rendered, output, format)?;

    if let Some(threshold) = fail_on {
        if report.overall_risk >= threshold {
            eprintln!(
                "Failing due to --fail-on={} (overall risk: {})",
                threshold, report.overall_risk
            );
            std::process::exit(1);
        }
    }
    Ok(())
}
