//! Neuroscience knowledge graph
//!
//! Assembles nodes and relationships from the catalog for visualization.
//! Assembly is best-effort: text that matches no keyword produces no edge
//! (but is counted in [`MappingReport`]). The one enforced invariant is that
//! every relationship references a node in the returned set.

mod assembler;
pub mod layout;
pub mod mappings;
pub mod scoring;
mod store_models;

pub use assembler::{generate_graph_data, GraphAssembler, GraphOptions};
pub use layout::{assign_positions, LayoutOptions};
pub use mappings::{MappingKind, MappingReport, UnmappedEntry, MAPPING_VERSION};
pub use scoring::{supplement_evidence_level, EvidenceWeights, ScoringConfig};
pub use store_models::{
    node_color, KnowledgeNode, KnowledgeRelationship, NodeType, RelationshipType, DEFAULT_COLOR,
};

use crate::models::SupplementRecord;
use chrono::{DateTime, Utc};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Output of one graph assembly
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphData {
    pub nodes: Vec<KnowledgeNode>,
    pub relationships: Vec<KnowledgeRelationship>,
    /// Full supplement records, for detail panels
    pub supplements: Vec<SupplementRecord>,
    pub mapping: MappingReport,
    /// Seed the layout hints were drawn with
    pub layout_seed: u64,
    pub generated_at: DateTime<Utc>,
}

impl GraphData {
    /// Borrowing petgraph view, for graph algorithms and DOT export
    ///
    /// Relationships whose endpoints are missing are skipped, so this is total
    /// even for hand-edited data.
    pub fn to_petgraph(&self) -> DiGraph<&KnowledgeNode, &KnowledgeRelationship> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.relationships.len());
        let mut index: HashMap<&str, NodeIndex> = HashMap::with_capacity(self.nodes.len());

        for node in &self.nodes {
            index.insert(node.id.as_str(), graph.add_node(node));
        }
        for rel in &self.relationships {
            if let (Some(&source), Some(&target)) = (
                index.get(rel.source_id.as_str()),
                index.get(rel.target_id.as_str()),
            ) {
                graph.add_edge(source, target, rel);
            }
        }
        graph
    }

    pub fn node(&self, id: &str) -> Option<&KnowledgeNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Node counts per type, in first-seen order
    pub fn type_counts(&self) -> Vec<(NodeType, usize)> {
        let mut counts: Vec<(NodeType, usize)> = Vec::new();
        for node in &self.nodes {
            match counts.iter_mut().find(|(t, _)| *t == node.node_type) {
                Some((_, n)) => *n += 1,
                None => counts.push((node.node_type, 1)),
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use petgraph::algo::connected_components;

    #[test]
    fn test_petgraph_view_matches_data() {
        let catalog = Catalog::builtin().unwrap();
        let data = generate_graph_data(&catalog, &GraphOptions::default());
        let graph = data.to_petgraph();
        assert_eq!(graph.node_count(), data.nodes.len());
        assert_eq!(graph.edge_count(), data.relationships.len());
        assert!(connected_components(&graph) >= 1);
    }

    #[test]
    fn test_type_counts() {
        let catalog = Catalog::builtin().unwrap();
        let data = generate_graph_data(&catalog, &GraphOptions::default());
        let counts = data.type_counts();
        assert_eq!(counts[0], (NodeType::Supplement, 6));
        assert!(counts.contains(&(NodeType::Mechanism, 3)));
        assert!(data.node("dopamine").is_some());
    }

    #[test]
    fn test_json_round_trip_keeps_shape() {
        let catalog = Catalog::builtin().unwrap();
        let data = generate_graph_data(&catalog, &GraphOptions::default());
        let json = serde_json::to_value(&data).unwrap();
        assert!(json["nodes"].is_array());
        assert!(json["relationships"].is_array());
        assert_eq!(json["mapping"]["version"], MAPPING_VERSION);
        assert!(json["generatedAt"].is_string());
    }
}
