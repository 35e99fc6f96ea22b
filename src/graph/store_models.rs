use crate::models::EvidenceLevel;
use serde::{Deserialize, Serialize};

/// Node types in the knowledge graph
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Supplement,
    Neurotransmitter,
    BrainRegion,
    CognitiveFunction,
    Pathway,
    Mechanism,
}

impl NodeType {
    /// Key into the color table for non-supplement nodes
    pub fn color_key(&self) -> &'static str {
        match self {
            NodeType::Supplement => "supplement",
            NodeType::Neurotransmitter => "neurotransmitter",
            NodeType::BrainRegion => "brain-region",
            NodeType::CognitiveFunction => "cognitive-function",
            NodeType::Pathway => "pathway",
            NodeType::Mechanism => "mechanism",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeType::Supplement => write!(f, "SUPPLEMENT"),
            NodeType::Neurotransmitter => write!(f, "NEUROTRANSMITTER"),
            NodeType::BrainRegion => write!(f, "BRAIN_REGION"),
            NodeType::CognitiveFunction => write!(f, "COGNITIVE_FUNCTION"),
            NodeType::Pathway => write!(f, "PATHWAY"),
            NodeType::Mechanism => write!(f, "MECHANISM"),
        }
    }
}

/// Edge types in the knowledge graph
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    Enhances,
    Inhibits,
    Modulates,
    Synergizes,
    Antagonizes,
    Requires,
    Produces,
    Metabolizes,
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RelationshipType::Enhances => "ENHANCES",
            RelationshipType::Inhibits => "INHIBITS",
            RelationshipType::Modulates => "MODULATES",
            RelationshipType::Synergizes => "SYNERGIZES",
            RelationshipType::Antagonizes => "ANTAGONIZES",
            RelationshipType::Requires => "REQUIRES",
            RelationshipType::Produces => "PRODUCES",
            RelationshipType::Metabolizes => "METABOLIZES",
        };
        write!(f, "{}", s)
    }
}

/// Default node color when a category has no entry
pub const DEFAULT_COLOR: &str = "#6B7280";

/// Display color for a category or node-type key (case-insensitive)
pub fn node_color(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "nootropics" => "#3B82F6",
        "vitamins" => "#10B981",
        "minerals" => "#F59E0B",
        "herbs" => "#8B5CF6",
        "amino-acids" => "#EF4444",
        "neurotransmitter" => "#06B6D4",
        "brain-region" => "#84CC16",
        "cognitive-function" => "#F97316",
        "pathway" => "#EC4899",
        "mechanism" => "#6366F1",
        _ => DEFAULT_COLOR,
    }
}

/// A node in the knowledge graph
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeNode {
    pub id: String,
    pub name: String,
    pub polish_name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub description: String,
    pub polish_description: String,
    pub category: String,
    pub evidence_level: EvidenceLevel,
    pub size: f64,
    /// 0-1
    pub importance: f64,
    /// Initial layout hint, set by [`super::assign_positions`]
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub properties: serde_json::Map<String, serde_json::Value>,
    pub tags: Vec<String>,
    pub sources: Vec<String>,
}

impl KnowledgeNode {
    pub fn new(id: &str, name: &str, node_type: NodeType) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            polish_name: name.to_string(),
            node_type,
            description: String::new(),
            polish_description: String::new(),
            category: String::new(),
            evidence_level: EvidenceLevel::default(),
            size: 0.0,
            importance: 0.0,
            x: 0.0,
            y: 0.0,
            color: node_color(node_type.color_key()).to_string(),
            properties: serde_json::Map::new(),
            tags: Vec::new(),
            sources: Vec::new(),
        }
    }

    pub fn with_polish_name(mut self, polish_name: &str) -> Self {
        self.polish_name = polish_name.to_string();
        self
    }

    pub fn with_description(mut self, description: &str, polish_description: &str) -> Self {
        self.description = description.to_string();
        self.polish_description = polish_description.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    pub fn with_metrics(mut self, evidence_level: EvidenceLevel, size: f64, importance: f64) -> Self {
        self.evidence_level = evidence_level;
        self.size = size;
        self.importance = importance.clamp(0.0, 1.0);
        self
    }

    pub fn with_property(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.properties.get(key).and_then(|v| v.as_i64())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(|v| v.as_str())
    }
}

impl std::fmt::Display for KnowledgeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A directed edge in the knowledge graph
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeRelationship {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    /// 0-1
    pub strength: f64,
    /// 0-1
    pub confidence: f64,
    pub mechanism: String,
    pub polish_mechanism: String,
    pub evidence_level: EvidenceLevel,
    pub bidirectional: bool,
}

impl KnowledgeRelationship {
    pub fn new(
        id: String,
        source_id: &str,
        target_id: &str,
        relationship_type: RelationshipType,
    ) -> Self {
        Self {
            id,
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
            relationship_type,
            strength: 0.0,
            confidence: 0.0,
            mechanism: String::new(),
            polish_mechanism: String::new(),
            evidence_level: EvidenceLevel::default(),
            bidirectional: false,
        }
    }

    pub fn with_weights(mut self, strength: f64, confidence: f64) -> Self {
        self.strength = strength.clamp(0.0, 1.0);
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    pub fn with_mechanism(mut self, mechanism: &str, polish_mechanism: &str) -> Self {
        self.mechanism = mechanism.to_string();
        self.polish_mechanism = polish_mechanism.to_string();
        self
    }

    pub fn with_evidence(mut self, evidence_level: EvidenceLevel) -> Self {
        self.evidence_level = evidence_level;
        self
    }

    pub fn bidirectional(mut self) -> Self {
        self.bidirectional = true;
        self
    }
}

impl std::fmt::Display for KnowledgeRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.relationship_type)
    }
}
