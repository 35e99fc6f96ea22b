//! Pairwise supplement interaction pass
//!
//! For every unordered pair of selected supplements, each side's own
//! interaction list is scanned for the other side's name. A mutual
//! interaction documented on both catalog entries therefore yields two
//! candidates; [`InteractionDedup`] decides whether both survive.

use crate::models::{
    Interaction, InteractionAnalysis, InteractionSeverity, InteractionType, SupplementRecord,
};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Policy for interactions found from both directions of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionDedup {
    /// Keep one record per (unordered pair, type, mechanism); records whose
    /// mechanism text differs are all kept. When records collapse, the one
    /// with the higher severity survives
    #[default]
    Merge,
    /// Keep one record per direction
    KeepBoth,
}

impl std::fmt::Display for InteractionDedup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionDedup::Merge => write!(f, "merge"),
            InteractionDedup::KeepBoth => write!(f, "keep-both"),
        }
    }
}

impl std::str::FromStr for InteractionDedup {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "merge" => Ok(InteractionDedup::Merge),
            "keep-both" | "keep_both" => Ok(InteractionDedup::KeepBoth),
            _ => Err(anyhow::anyhow!(
                "Unknown interaction dedup policy '{}'. Valid policies: merge, keep-both",
                s
            )),
        }
    }
}

/// Dosage multiplier suggested for an interaction type
pub fn dosage_adjustment(interaction_type: InteractionType) -> Option<f64> {
    match interaction_type {
        InteractionType::Antagonistic => Some(1.2),
        InteractionType::Synergistic => Some(0.8),
        _ => None,
    }
}

/// Timing advice for an interaction type, as (English, Polish)
pub fn timing_adjustment(interaction_type: InteractionType) -> Option<(&'static str, &'static str)> {
    match interaction_type {
        InteractionType::Competitive => Some((
            "Take supplements at least 2 hours apart",
            "Przyjmuj suplementy w odstępie co najmniej 2 godzin",
        )),
        InteractionType::Synergistic => Some((
            "Take together for enhanced effect",
            "Przyjmuj razem dla zwiększonego efektu",
        )),
        _ => None,
    }
}

/// Whether `interaction` names `target` by its English or Polish name
fn targets(interaction: &Interaction, target: &SupplementRecord) -> bool {
    let name = target.name.trim().to_lowercase();
    let polish_name = target.polish_name.trim().to_lowercase();

    let english_match = !name.is_empty() && interaction.substance.to_lowercase().contains(&name);
    let polish_match = !polish_name.is_empty()
        && interaction
            .polish_substance
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(&polish_name));

    english_match || polish_match
}

fn analysis(
    source: &SupplementRecord,
    target: &SupplementRecord,
    interaction: &Interaction,
) -> InteractionAnalysis {
    let timing = timing_adjustment(interaction.interaction_type);
    InteractionAnalysis {
        supplement1: source.id.clone(),
        supplement2: target.id.clone(),
        interaction_type: interaction.interaction_type,
        severity: interaction.severity,
        mechanism: interaction
            .mechanism
            .clone()
            .unwrap_or_else(|| "Unknown mechanism".into()),
        polish_mechanism: interaction
            .polish_mechanism
            .clone()
            .unwrap_or_else(|| "Nieznany mechanizm".into()),
        clinical_significance: interaction.clinical_significance.clone(),
        polish_clinical_significance: interaction.polish_clinical_significance.clone(),
        dosage_adjustment: dosage_adjustment(interaction.interaction_type),
        timing_adjustment: timing.map(|(en, _)| en.to_string()),
        polish_timing_adjustment: timing.map(|(_, pl)| pl.to_string()),
    }
}

/// Scan every unordered pair of supplements from both directions
pub fn analyze_supplement_interactions(
    supplements: &[&SupplementRecord],
    dedup: InteractionDedup,
) -> Vec<InteractionAnalysis> {
    let mut candidates = Vec::new();

    for (i, first) in supplements.iter().enumerate() {
        for second in &supplements[i + 1..] {
            for interaction in first.interactions.iter().filter(|x| targets(x, second)) {
                candidates.push(analysis(first, second, interaction));
            }
            for interaction in second.interactions.iter().filter(|x| targets(x, first)) {
                candidates.push(analysis(second, first, interaction));
            }
        }
    }

    match dedup {
        InteractionDedup::KeepBoth => candidates,
        InteractionDedup::Merge => merge_directions(candidates),
    }
}

/// Rank used to pick which of two merged records survives
fn severity_rank(severity: InteractionSeverity) -> u8 {
    match severity {
        InteractionSeverity::Beneficial => 0,
        InteractionSeverity::Mild => 1,
        InteractionSeverity::Moderate => 2,
        InteractionSeverity::Severe => 3,
    }
}

/// Collapse records for the same unordered pair, interaction type and
/// mechanism text into the first one's slot, keeping the most severe record
fn merge_directions(candidates: Vec<InteractionAnalysis>) -> Vec<InteractionAnalysis> {
    let before = candidates.len();
    let mut slots: HashMap<(String, String, InteractionType, String), usize> = HashMap::new();
    let mut merged: Vec<InteractionAnalysis> = Vec::with_capacity(before);

    for candidate in candidates {
        let (lo, hi) = if candidate.supplement1 <= candidate.supplement2 {
            (candidate.supplement1.clone(), candidate.supplement2.clone())
        } else {
            (candidate.supplement2.clone(), candidate.supplement1.clone())
        };
        let key = (
            lo,
            hi,
            candidate.interaction_type,
            candidate.mechanism.trim().to_lowercase(),
        );

        match slots.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(merged.len());
                merged.push(candidate);
            }
            Entry::Occupied(slot) => {
                let kept = &mut merged[*slot.get()];
                if severity_rank(candidate.severity) > severity_rank(kept.severity) {
                    debug!(
                        "Merged {} <-> {} keeps {} over {}",
                        candidate.supplement1, candidate.supplement2, candidate.severity, kept.severity
                    );
                    *kept = candidate;
                }
            }
        }
    }

    if merged.len() < before {
        debug!(
            "Merged {} reverse-direction interaction record(s)",
            before - merged.len()
        );
    }
    merged
}
