//! Graphviz DOT reporter for the knowledge graph

use crate::graph::{GraphData, NodeType};
use anyhow::Result;
use petgraph::dot::{Config, Dot};

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

fn shape(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Supplement => "box",
        NodeType::Neurotransmitter => "ellipse",
        NodeType::BrainRegion => "hexagon",
        NodeType::CognitiveFunction => "diamond",
        NodeType::Pathway => "parallelogram",
        NodeType::Mechanism => "octagon",
    }
}

/// Render graph data as a DOT digraph, one statement per node and edge
pub fn render(data: &GraphData) -> Result<String> {
    let graph = data.to_petgraph();
    Ok(format!(
        "{}",
        Dot::with_attr_getters(
            &graph,
            &[Config::NodeNoLabel, Config::EdgeNoLabel],
            &|_, edge| {
                let rel = edge.weight();
                format!(
                    "label = \"{}\" penwidth = {:.2}{}",
                    rel.relationship_type,
                    1.0 + rel.strength * 2.0,
                    if rel.bidirectional { " dir = both" } else { "" }
                )
            },
            &|_, (_, node)| {
                format!(
                    "label = \"{}\" tooltip = \"{}\" shape = {} style = filled fillcolor = \"{}\"",
                    escape(&node.name),
                    escape(&node.id),
                    shape(node.node_type),
                    node.color
                )
            },
        )
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::graph::{generate_graph_data, GraphOptions};

    #[test]
    fn test_dot_contains_nodes_and_edges() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let data = generate_graph_data(&catalog, &GraphOptions::default());
        let dot = render(&data).expect("render dot");
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("label = \"Bacopa monnieri\""));
        assert!(dot.contains("shape = box"));
        assert_eq!(dot.matches(" -> ").count(), data.relationships.len());
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape(r#"5-HTP "pure""#), r#"5-HTP \"pure\""#);
    }
}
