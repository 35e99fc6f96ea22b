//! Knowledge graph assembly
//!
//! Pipeline, run fresh on every call:
//! 1. nodes for each enabled category
//! 2. edges: supplement applications and compounds, synergy groups, mechanisms
//! 3. evidence filter on edges
//! 4. node cap by importance
//! 5. referential integrity: drop edges whose endpoints are not in the node set
//! 6. layout hints
//!
//! Step 5 always runs, not only after capping: disabled categories and synergy
//! groups that name supplements missing from the catalog would otherwise leave
//! dangling edges.

use super::layout::{assign_positions, LayoutOptions};
use super::mappings::{
    map_brain_region, map_condition, map_neurotransmitters, MappingKind, MappingReport,
};
use super::scoring::{supplement_evidence_level, ScoringConfig};
use super::store_models::{
    node_color, KnowledgeNode, KnowledgeRelationship, NodeType, RelationshipType,
};
use super::GraphData;
use crate::catalog::{
    BrainRegion, Catalog, CognitiveFunction, NeuroplasticityMechanism, Neurotransmitter, Pathway,
    ReferenceEntry,
};
use crate::models::{EvidenceLevel, SupplementRecord};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// What to include in an assembled graph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphOptions {
    #[serde(default = "default_true")]
    pub include_supplements: bool,
    #[serde(default = "default_true")]
    pub include_neurotransmitters: bool,
    #[serde(default = "default_true")]
    pub include_brain_regions: bool,
    #[serde(default = "default_true")]
    pub include_cognitive_functions: bool,
    #[serde(default = "default_true")]
    pub include_pathways: bool,
    #[serde(default = "default_true")]
    pub include_mechanisms: bool,

    /// Edges weighted below this level are dropped (default: WEAK)
    #[serde(default = "default_min_evidence_level")]
    pub min_evidence_level: EvidenceLevel,

    /// Node cap; the least important nodes go first (default: 500)
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,

    /// Set from the `[layout]` config section, not `[graph]`
    #[serde(skip)]
    pub layout: LayoutOptions,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            include_supplements: true,
            include_neurotransmitters: true,
            include_brain_regions: true,
            include_cognitive_functions: true,
            include_pathways: true,
            include_mechanisms: true,
            min_evidence_level: default_min_evidence_level(),
            max_nodes: default_max_nodes(),
            layout: LayoutOptions::default(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_min_evidence_level() -> EvidenceLevel {
    EvidenceLevel::Weak
}
fn default_max_nodes() -> usize {
    500
}

/// Builds [`GraphData`] from a shared catalog
pub struct GraphAssembler<'a> {
    catalog: &'a Catalog,
    scoring: ScoringConfig,
}

impl<'a> GraphAssembler<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            scoring: ScoringConfig::default(),
        }
    }

    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn generate(&self, options: &GraphOptions) -> GraphData {
        let mut nodes = self.build_nodes(options);
        let mut mapping = MappingReport::default();
        let mut edges = EdgeSet::default();

        self.supplement_relationships(&mut edges, &mut mapping);
        self.synergy_relationships(&mut edges);
        self.mechanism_relationships(&mut edges, &mut mapping);
        let mut relationships = edges.into_vec();
        let built = relationships.len();

        let weights = &self.scoring.evidence_weights;
        let floor = weights.weight(options.min_evidence_level);
        relationships.retain(|r| weights.weight(r.evidence_level) >= floor);
        debug!(
            "Evidence filter ({}) kept {}/{} relationships",
            options.min_evidence_level,
            relationships.len(),
            built
        );

        if nodes.len() > options.max_nodes {
            nodes.sort_by(|a, b| b.importance.total_cmp(&a.importance));
            nodes.truncate(options.max_nodes);
            debug!("Capped graph to {} nodes", nodes.len());
        }

        let node_ids: FxHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let before = relationships.len();
        relationships.retain(|r| {
            node_ids.contains(r.source_id.as_str()) && node_ids.contains(r.target_id.as_str())
        });
        let dangling = before - relationships.len();
        if dangling > 0 {
            debug!("Dropped {} relationships with missing endpoints", dangling);
        }

        let layout_seed = assign_positions(&mut nodes, &options.layout);

        if !mapping.unmapped.is_empty() {
            debug!(
                "{} catalog entries had no keyword mapping (table v{})",
                mapping.unmapped.len(),
                mapping.version
            );
        }
        info!(
            "Assembled knowledge graph: {} nodes, {} relationships",
            nodes.len(),
            relationships.len()
        );

        GraphData {
            nodes,
            relationships,
            supplements: self.catalog.supplements().to_vec(),
            mapping,
            layout_seed,
            generated_at: chrono::Utc::now(),
        }
    }

    fn build_nodes(&self, options: &GraphOptions) -> Vec<KnowledgeNode> {
        let mut nodes = Vec::new();

        if options.include_supplements {
            nodes.extend(
                self.catalog
                    .supplements()
                    .iter()
                    .map(|s| self.supplement_node(s)),
            );
        }
        if options.include_neurotransmitters {
            nodes.extend(Neurotransmitter::ALL.iter().map(|nt| {
                reference_node(
                    nt.entry(),
                    NodeType::Neurotransmitter,
                    "Neurotransmitter",
                    (EvidenceLevel::Strong, 10.0, 0.9),
                    "brain-chemistry",
                )
            }));
        }
        if options.include_brain_regions {
            nodes.extend(BrainRegion::ALL.iter().map(|r| {
                reference_node(
                    r.entry(),
                    NodeType::BrainRegion,
                    "Brain Region",
                    (EvidenceLevel::Strong, 12.0, 0.8),
                    "neuroscience",
                )
            }));
        }
        if options.include_cognitive_functions {
            nodes.extend(CognitiveFunction::ALL.iter().map(|c| {
                reference_node(
                    c.entry(),
                    NodeType::CognitiveFunction,
                    "Cognitive Function",
                    (EvidenceLevel::Moderate, 8.0, 0.7),
                    "psychology",
                )
            }));
        }
        if options.include_pathways {
            nodes.extend(Pathway::ALL.iter().map(|p| {
                reference_node(
                    p.entry(),
                    NodeType::Pathway,
                    "Pathway",
                    (EvidenceLevel::Moderate, 6.0, 0.6),
                    "biochemistry",
                )
            }));
        }
        if options.include_mechanisms {
            nodes.extend(self.catalog.mechanisms().iter().map(mechanism_node));
        }

        debug!("Built {} candidate nodes", nodes.len());
        nodes
    }

    fn supplement_node(&self, supplement: &SupplementRecord) -> KnowledgeNode {
        let description = supplement
            .description
            .as_deref()
            .unwrap_or("No description available");
        let polish_description = supplement.polish_description.as_deref().unwrap_or_default();

        KnowledgeNode::new(&supplement.id, &supplement.name, NodeType::Supplement)
            .with_polish_name(supplement.display_polish_name())
            .with_description(description, polish_description)
            .with_category(&supplement.category)
            .with_color(node_color(&supplement.category))
            .with_metrics(
                supplement_evidence_level(supplement),
                self.scoring.node_size(supplement),
                self.scoring.importance(supplement),
            )
            .with_property("supplementId", supplement.id.as_str())
            .with_property("category", supplement.category.as_str())
            .with_property(
                "clinicalApplications",
                supplement.clinical_applications.len(),
            )
            .with_property("researchStudies", supplement.research_studies.len())
            .with_property("activeCompounds", supplement.active_compounds.len())
            .with_tags(
                supplement
                    .active_compounds
                    .iter()
                    .map(|c| c.name.clone())
                    .collect(),
            )
            .with_sources(
                supplement
                    .research_studies
                    .iter()
                    .map(|s| s.title.clone())
                    .collect(),
            )
    }

    /// ENHANCES from clinical applications, MODULATES from active compounds
    fn supplement_relationships(&self, edges: &mut EdgeSet, mapping: &mut MappingReport) {
        for supplement in self.catalog.supplements() {
            for application in &supplement.clinical_applications {
                let Some(function) = map_condition(&application.polish_condition) else {
                    mapping.record_unmapped(
                        MappingKind::Condition,
                        &supplement.id,
                        &application.polish_condition,
                    );
                    continue;
                };
                mapping.record_mapped();
                edges.push(
                    KnowledgeRelationship::new(
                        format!("{}-enhances-{}", supplement.id, function.id()),
                        &supplement.id,
                        function.id(),
                        RelationshipType::Enhances,
                    )
                    .with_weights(application.effectiveness_rating / 10.0, 0.8)
                    .with_mechanism(&application.condition, &application.polish_condition)
                    .with_evidence(application.evidence_level),
                );
            }

            for compound in &supplement.active_compounds {
                if compound.name.trim().is_empty() {
                    continue;
                }
                let targets = map_neurotransmitters(&compound.name);
                if targets.is_empty() {
                    mapping.record_unmapped(MappingKind::Compound, &supplement.id, &compound.name);
                    continue;
                }
                mapping.record_mapped();
                for nt in targets {
                    edges.push(
                        KnowledgeRelationship::new(
                            format!("{}-modulates-{}", supplement.id, nt.id()),
                            &supplement.id,
                            nt.id(),
                            RelationshipType::Modulates,
                        )
                        .with_weights(0.6, 0.7)
                        .with_mechanism(&compound.name, &compound.name)
                        .with_evidence(EvidenceLevel::Moderate),
                    );
                }
            }
        }
    }

    /// One bidirectional SYNERGIZES edge per unordered pair in each group
    fn synergy_relationships(&self, edges: &mut EdgeSet) {
        for synergy in self.catalog.synergies() {
            let members: Vec<&str> = synergy
                .supplements
                .iter()
                .map(|s| s.as_str())
                .filter(|s| !s.is_empty())
                .collect();
            for (i, source) in members.iter().enumerate() {
                for target in &members[i + 1..] {
                    edges.push(
                        KnowledgeRelationship::new(
                            format!("{}-{}-{}", synergy.id, source, target),
                            source,
                            target,
                            RelationshipType::Synergizes,
                        )
                        .with_weights(0.8, 0.9)
                        .with_mechanism(&synergy.mechanism, &synergy.polish_mechanism)
                        .with_evidence(synergy.evidence_level)
                        .bidirectional(),
                    );
                }
            }
        }
    }

    /// Mechanism to brain region MODULATES, supplement to mechanism PRODUCES
    fn mechanism_relationships(&self, edges: &mut EdgeSet, mapping: &mut MappingReport) {
        for mechanism in self.catalog.mechanisms() {
            for region_text in &mechanism.affected_brain_regions {
                let Some(region) = map_brain_region(region_text) else {
                    mapping.record_unmapped(MappingKind::BrainRegion, &mechanism.id, region_text);
                    continue;
                };
                mapping.record_mapped();
                edges.push(
                    KnowledgeRelationship::new(
                        format!("{}-affects-{}", mechanism.id, region.id()),
                        &mechanism.id,
                        region.id(),
                        RelationshipType::Modulates,
                    )
                    .with_weights(0.7, 0.8)
                    .with_mechanism(&mechanism.description, &mechanism.polish_description)
                    .with_evidence(mechanism.evidence_level),
                );
            }

            for supplement in self.catalog.supplements() {
                if !triggers(supplement, mechanism) {
                    continue;
                }
                let text = format!(
                    "{} aktywuje {}",
                    supplement.display_polish_name(),
                    mechanism.polish_name
                );
                edges.push(
                    KnowledgeRelationship::new(
                        format!("{}-triggers-{}", supplement.id, mechanism.id),
                        &supplement.id,
                        &mechanism.id,
                        RelationshipType::Produces,
                    )
                    .with_weights(0.5, 0.6)
                    .with_mechanism(&text, &text)
                    .with_evidence(EvidenceLevel::Weak),
                );
            }
        }
    }
}

/// Loose name heuristic linking a supplement to a mechanism
///
/// True when a compound name and the mechanism name contain one another, or
/// the mechanism description mentions the supplement by name. Supplements
/// without active compounds never trigger a mechanism.
fn triggers(supplement: &SupplementRecord, mechanism: &NeuroplasticityMechanism) -> bool {
    if supplement.active_compounds.is_empty() {
        return false;
    }

    let mechanism_name = mechanism.name.trim().to_lowercase();
    let compound_match = !mechanism_name.is_empty()
        && supplement.active_compounds.iter().any(|c| {
            let compound = c.name.trim().to_lowercase();
            !compound.is_empty()
                && (compound.contains(&mechanism_name) || mechanism_name.contains(&compound))
        });

    let supplement_name = supplement.name.trim().to_lowercase();
    let description_match = !supplement_name.is_empty()
        && mechanism
            .description
            .to_lowercase()
            .contains(&supplement_name);

    compound_match || description_match
}

fn reference_node(
    entry: ReferenceEntry,
    node_type: NodeType,
    category: &str,
    (evidence_level, size, importance): (EvidenceLevel, f64, f64),
    domain_tag: &str,
) -> KnowledgeNode {
    KnowledgeNode::new(entry.id, entry.name, node_type)
        .with_polish_name(entry.polish_name)
        .with_description(entry.description, entry.description)
        .with_category(category)
        .with_metrics(evidence_level, size, importance)
        .with_tags(vec![
            entry.name.to_lowercase(),
            node_type.color_key().to_string(),
            domain_tag.to_string(),
        ])
}

fn mechanism_node(mechanism: &NeuroplasticityMechanism) -> KnowledgeNode {
    KnowledgeNode::new(&mechanism.id, &mechanism.name, NodeType::Mechanism)
        .with_polish_name(&mechanism.polish_name)
        .with_description(&mechanism.description, &mechanism.polish_description)
        .with_category("Neuroplasticity Mechanism")
        .with_metrics(mechanism.evidence_level, 5.0, 0.5)
        .with_property(
            "mechanismType",
            mechanism.pathway.as_deref().unwrap_or("Unknown pathway"),
        )
        .with_property("targetRegions", mechanism.affected_brain_regions.clone())
        .with_property(
            "timeframe",
            mechanism.duration.as_deref().unwrap_or("Unknown duration"),
        )
        .with_tags(vec![
            mechanism.name.to_lowercase(),
            "mechanism".to_string(),
            "neuroplasticity".to_string(),
        ])
        .with_sources(vec![
            "Neuroscience research".to_string(),
            "Neuroplasticity studies".to_string(),
        ])
}

/// Relationships in insertion order, unique by id (first wins)
#[derive(Default)]
struct EdgeSet {
    ids: FxHashSet<String>,
    edges: Vec<KnowledgeRelationship>,
}

impl EdgeSet {
    fn push(&mut self, edge: KnowledgeRelationship) {
        if self.ids.insert(edge.id.clone()) {
            self.edges.push(edge);
        } else {
            debug!("Skipping duplicate relationship id {}", edge.id);
        }
    }

    fn into_vec(self) -> Vec<KnowledgeRelationship> {
        self.edges
    }
}

/// Assemble a graph from `catalog` with default scoring
pub fn generate_graph_data(catalog: &Catalog, options: &GraphOptions) -> GraphData {
    GraphAssembler::new(catalog).generate(options)
}
