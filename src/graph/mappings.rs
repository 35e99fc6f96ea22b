//! Keyword tables linking free catalog text to reference nodes
//!
//! Catalog records describe conditions, compounds and brain regions in free
//! text (mostly Polish). These tables map that text onto the fixed reference
//! vocabularies. Matching is a lowercase substring test, so the tables are
//! kept small and explicit. Bump [`MAPPING_VERSION`] whenever an entry is
//! added or changed so published graphs can be traced to a table revision.
//!
//! Text that maps to nothing is recorded in a [`MappingReport`] instead of
//! disappearing, which makes catalog coverage gaps visible.

use crate::catalog::{BrainRegion, CognitiveFunction, Neurotransmitter};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const MAPPING_VERSION: u32 = 1;

/// Clinical condition keywords; first match wins
pub const COGNITIVE_FUNCTION_KEYWORDS: &[(&str, CognitiveFunction)] = &[
    ("pamięć", CognitiveFunction::Memory),
    ("pamięci", CognitiveFunction::Memory),
    ("uwaga", CognitiveFunction::Attention),
    ("koncentracja", CognitiveFunction::Attention),
    ("nastrój", CognitiveFunction::Mood),
    ("stres", CognitiveFunction::StressResponse),
    ("funkcje wykonawcze", CognitiveFunction::ExecutiveFunction),
];

/// Compound name keywords; every match counts
pub const NEUROTRANSMITTER_KEYWORDS: &[(&str, Neurotransmitter)] = &[
    ("dopamin", Neurotransmitter::Dopamine),
    ("serotonin", Neurotransmitter::Serotonin),
    ("norepinephrine", Neurotransmitter::Norepinephrine),
    ("noradrenalina", Neurotransmitter::Norepinephrine),
    ("acetylcholine", Neurotransmitter::Acetylcholine),
    ("acetylocholina", Neurotransmitter::Acetylcholine),
    ("gaba", Neurotransmitter::Gaba),
    ("glutamate", Neurotransmitter::Glutamate),
    ("glutaminian", Neurotransmitter::Glutamate),
];

/// Brain region keywords; first match wins
pub const BRAIN_REGION_KEYWORDS: &[(&str, BrainRegion)] = &[
    ("prefrontal", BrainRegion::PrefrontalCortex),
    ("przedczołow", BrainRegion::PrefrontalCortex),
    ("hippocamp", BrainRegion::Hippocampus),
    ("hipokamp", BrainRegion::Hippocampus),
    ("amygdala", BrainRegion::Amygdala),
    ("migdałowat", BrainRegion::Amygdala),
    ("striatum", BrainRegion::Striatum),
    ("prążkowi", BrainRegion::Striatum),
    ("cerebellum", BrainRegion::Cerebellum),
    ("móżdż", BrainRegion::Cerebellum),
];

/// Map a (Polish) clinical condition onto a cognitive function
pub fn map_condition(polish_condition: &str) -> Option<CognitiveFunction> {
    let lower = polish_condition.to_lowercase();
    COGNITIVE_FUNCTION_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, function)| *function)
}

/// Every neurotransmitter mentioned in a compound name, without repeats
pub fn map_neurotransmitters(compound_name: &str) -> Vec<Neurotransmitter> {
    let lower = compound_name.to_lowercase();
    let mut found = Vec::new();
    for (keyword, nt) in NEUROTRANSMITTER_KEYWORDS {
        if lower.contains(keyword) && !found.contains(nt) {
            found.push(*nt);
        }
    }
    found
}

pub fn map_brain_region(region: &str) -> Option<BrainRegion> {
    let lower = region.to_lowercase();
    BRAIN_REGION_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, region)| *region)
}

/// Which table a piece of unmapped text was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingKind {
    Condition,
    Compound,
    BrainRegion,
}

/// A catalog string that matched no keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmappedEntry {
    pub kind: MappingKind,
    /// Supplement or mechanism the text belongs to
    pub source_id: String,
    pub text: String,
}

/// Coverage of the keyword tables for one graph build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingReport {
    pub version: u32,
    pub mapped: usize,
    pub unmapped: Vec<UnmappedEntry>,
}

impl Default for MappingReport {
    fn default() -> Self {
        Self {
            version: MAPPING_VERSION,
            mapped: 0,
            unmapped: Vec::new(),
        }
    }
}

impl MappingReport {
    pub fn record_mapped(&mut self) {
        self.mapped += 1;
    }

    pub fn record_unmapped(&mut self, kind: MappingKind, source_id: &str, text: &str) {
        debug!("No {:?} mapping for '{}' (from {})", kind, text, source_id);
        self.unmapped.push(UnmappedEntry {
            kind,
            source_id: source_id.to_string(),
            text: text.to_string(),
        });
    }

    pub fn unmapped_count(&self, kind: MappingKind) -> usize {
        self.unmapped.iter().filter(|e| e.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_first_match_wins() {
        assert_eq!(map_condition("Poprawa pamięci"), Some(CognitiveFunction::Memory));
        assert_eq!(
            map_condition("Uwaga i koncentracja"),
            Some(CognitiveFunction::Attention)
        );
        assert_eq!(
            map_condition("Redukcja stresu"),
            Some(CognitiveFunction::StressResponse)
        );
        assert_eq!(
            map_condition("FUNKCJE WYKONAWCZE"),
            Some(CognitiveFunction::ExecutiveFunction)
        );
        assert_eq!(map_condition("Jakość snu"), None);
    }

    #[test]
    fn test_compound_may_map_to_several_neurotransmitters() {
        let found = map_neurotransmitters("L-theanine (GABA, serotonin and dopamine modulation)");
        assert_eq!(
            found,
            vec![
                Neurotransmitter::Dopamine,
                Neurotransmitter::Serotonin,
                Neurotransmitter::Gaba
            ]
        );
        assert_eq!(
            map_neurotransmitters("Noradrenalina i norepinephrine"),
            vec![Neurotransmitter::Norepinephrine]
        );
        assert!(map_neurotransmitters("Rosavin").is_empty());
    }

    #[test]
    fn test_region_polish_and_english() {
        assert_eq!(
            map_brain_region("Hippocampus (dentate gyrus)"),
            Some(BrainRegion::Hippocampus)
        );
        assert_eq!(
            map_brain_region("Kora przedczołowa"),
            Some(BrainRegion::PrefrontalCortex)
        );
        assert_eq!(map_brain_region("Olfactory bulb"), None);
    }

    #[test]
    fn test_report_counts_by_kind() {
        let mut report = MappingReport::default();
        report.record_mapped();
        report.record_unmapped(MappingKind::Compound, "rhodiola", "Rosavin");
        report.record_unmapped(MappingKind::Condition, "magnesium", "Jakość snu");
        assert_eq!(report.version, MAPPING_VERSION);
        assert_eq!(report.mapped, 1);
        assert_eq!(report.unmapped_count(MappingKind::Compound), 1);
        assert_eq!(report.unmapped_count(MappingKind::BrainRegion), 0);
    }
}
