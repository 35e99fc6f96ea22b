//! Core data models for Suplementor
//!
//! These models describe the static supplement catalog records, the user
//! profile submitted for a safety check, and the alerts the safety analyzer
//! produces. Field names serialize in camelCase so catalog files written for
//! the web frontend load unchanged.

use serde::{Deserialize, Serialize};

/// Strength of the research behind a claim
///
/// Variants are declared weakest first so the derived ordering follows the
/// default evidence weights (CONFLICTING < INSUFFICIENT < WEAK < MODERATE < STRONG).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceLevel {
    #[default]
    Conflicting,
    Insufficient,
    Weak,
    Moderate,
    Strong,
}

impl EvidenceLevel {
    pub const ALL: [EvidenceLevel; 5] = [
        EvidenceLevel::Strong,
        EvidenceLevel::Moderate,
        EvidenceLevel::Weak,
        EvidenceLevel::Insufficient,
        EvidenceLevel::Conflicting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceLevel::Strong => "STRONG",
            EvidenceLevel::Moderate => "MODERATE",
            EvidenceLevel::Weak => "WEAK",
            EvidenceLevel::Insufficient => "INSUFFICIENT",
            EvidenceLevel::Conflicting => "CONFLICTING",
        }
    }
}

impl std::fmt::Display for EvidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EvidenceLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STRONG" => Ok(EvidenceLevel::Strong),
            "MODERATE" => Ok(EvidenceLevel::Moderate),
            "WEAK" => Ok(EvidenceLevel::Weak),
            "INSUFFICIENT" => Ok(EvidenceLevel::Insufficient),
            "CONFLICTING" => Ok(EvidenceLevel::Conflicting),
            _ => Err(anyhow::anyhow!(
                "Unknown evidence level '{}'. Valid levels: STRONG, MODERATE, WEAK, INSUFFICIENT, CONFLICTING",
                s
            )),
        }
    }
}

/// Severity levels for safety alerts
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertSeverity::Low => write!(f, "low"),
            AlertSeverity::Medium => write!(f, "medium"),
            AlertSeverity::High => write!(f, "high"),
            AlertSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// What kind of problem an alert describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Contraindication,
    Interaction,
    SideEffectRisk,
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertType::Contraindication => write!(f, "contraindication"),
            AlertType::Interaction => write!(f, "interaction"),
            AlertType::SideEffectRisk => write!(f, "side_effect_risk"),
        }
    }
}

/// Aggregated risk for a whole safety report
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(anyhow::anyhow!(
                "Unknown risk level '{}'. Valid levels: low, medium, high",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Synergistic,
    Antagonistic,
    Additive,
    Competitive,
}

impl std::fmt::Display for InteractionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionType::Synergistic => write!(f, "synergistic"),
            InteractionType::Antagonistic => write!(f, "antagonistic"),
            InteractionType::Additive => write!(f, "additive"),
            InteractionType::Competitive => write!(f, "competitive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionSeverity {
    #[serde(alias = "minor")]
    Mild,
    Moderate,
    Severe,
    Beneficial,
}

impl InteractionSeverity {
    /// Alert severity used when a medication matches this interaction
    pub fn alert_severity(&self) -> AlertSeverity {
        match self {
            InteractionSeverity::Severe => AlertSeverity::High,
            InteractionSeverity::Moderate => AlertSeverity::Medium,
            InteractionSeverity::Mild | InteractionSeverity::Beneficial => AlertSeverity::Low,
        }
    }
}

impl std::fmt::Display for InteractionSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionSeverity::Mild => write!(f, "mild"),
            InteractionSeverity::Moderate => write!(f, "moderate"),
            InteractionSeverity::Severe => write!(f, "severe"),
            InteractionSeverity::Beneficial => write!(f, "beneficial"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SideEffectSeverity {
    #[default]
    Mild,
    Moderate,
    Severe,
}

/// A compound responsible for a supplement's effect
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActiveCompound {
    pub name: String,
    #[serde(default)]
    pub polish_name: Option<String>,
    #[serde(default)]
    pub mechanism: Option<String>,
}

/// A condition the supplement is used for, with its rated effectiveness
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalApplication {
    pub condition: String,
    #[serde(default)]
    pub polish_condition: String,
    /// 0-10
    #[serde(default)]
    pub effectiveness_rating: f64,
    #[serde(default)]
    pub mechanism: Option<String>,
    #[serde(default)]
    pub evidence_level: EvidenceLevel,
    #[serde(default)]
    pub recommended_dosage: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResearchStudy {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub polish_title: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub evidence_level: EvidenceLevel,
}

/// A documented interaction with another substance (supplement or drug)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub substance: String,
    #[serde(default)]
    pub polish_substance: Option<String>,
    #[serde(rename = "type")]
    pub interaction_type: InteractionType,
    pub severity: InteractionSeverity,
    #[serde(default)]
    pub mechanism: Option<String>,
    #[serde(default)]
    pub polish_mechanism: Option<String>,
    #[serde(default)]
    pub clinical_significance: String,
    #[serde(default)]
    pub polish_clinical_significance: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub polish_recommendation: Option<String>,
    #[serde(default)]
    pub evidence_level: Option<EvidenceLevel>,
}

impl Interaction {
    /// Case-insensitive check against the substance text and its Polish variant
    pub fn mentions(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return false;
        }
        self.substance.to_lowercase().contains(needle_lower)
            || self
                .polish_substance
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(needle_lower))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SideEffect {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub polish_effect: Option<String>,
    #[serde(default)]
    pub severity: SideEffectSeverity,
}

/// A supplement as stored in the static catalog
///
/// `id` is the join key used everywhere; the catalog loader rejects duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SupplementRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub polish_name: String,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub common_names: Vec<String>,
    #[serde(default)]
    pub polish_common_names: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub polish_description: Option<String>,
    #[serde(default)]
    pub clinical_applications: Vec<ClinicalApplication>,
    #[serde(default)]
    pub active_compounds: Vec<ActiveCompound>,
    #[serde(default)]
    pub research_studies: Vec<ResearchStudy>,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
    #[serde(default)]
    pub contraindications: Vec<String>,
    #[serde(default)]
    pub side_effects: Vec<SideEffect>,
}

impl SupplementRecord {
    /// All names the supplement is known by, lowercased and space-joined
    pub fn name_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.name.as_str()];
        if let Some(ref scientific) = self.scientific_name {
            parts.push(scientific);
        }
        parts.extend(self.common_names.iter().map(String::as_str));
        parts.push(&self.polish_name);
        parts.extend(self.polish_common_names.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }

    /// Polish display name, falling back to the English one
    pub fn display_polish_name(&self) -> &str {
        if self.polish_name.is_empty() {
            &self.name
        } else {
            &self.polish_name
        }
    }
}

/// The person a safety check is run for
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub pregnant: bool,
    #[serde(default)]
    pub breastfeeding: bool,
    #[serde(default)]
    pub health_conditions: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub current_medications: Vec<String>,
}

/// A supplement selected for analysis. Dosage fields are accepted and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementInput {
    pub supplement_id: String,
}

impl SupplementInput {
    pub fn new(supplement_id: impl Into<String>) -> Self {
        Self {
            supplement_id: supplement_id.into(),
        }
    }
}

/// A single safety concern raised for the selected supplements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyAlert {
    /// Name of the rule that raised the alert
    pub rule: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub message: String,
    pub polish_message: String,
    pub supplements: Vec<String>,
    pub recommendation: String,
    pub polish_recommendation: String,
    pub evidence_level: EvidenceLevel,
}

/// A documented interaction between two selected supplements
///
/// `supplement1` is the supplement whose catalog entry documents the interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionAnalysis {
    pub supplement1: String,
    pub supplement2: String,
    pub interaction_type: InteractionType,
    pub severity: InteractionSeverity,
    pub mechanism: String,
    pub polish_mechanism: String,
    pub clinical_significance: String,
    #[serde(default)]
    pub polish_clinical_significance: Option<String>,
    #[serde(default)]
    pub dosage_adjustment: Option<f64>,
    #[serde(default)]
    pub timing_adjustment: Option<String>,
    #[serde(default)]
    pub polish_timing_adjustment: Option<String>,
}

/// Summary of alerts by severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl AlertSummary {
    pub fn from_alerts(alerts: &[SafetyAlert]) -> Self {
        let mut summary = Self::default();
        for a in alerts {
            match a.severity {
                AlertSeverity::Critical => summary.critical += 1,
                AlertSeverity::High => summary.high += 1,
                AlertSeverity::Medium => summary.medium += 1,
                AlertSeverity::Low => summary.low += 1,
            }
            summary.total += 1;
        }
        summary
    }
}

/// Full output of a safety analysis
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SafetyReport {
    pub safety_alerts: Vec<SafetyAlert>,
    pub interaction_analysis: Vec<InteractionAnalysis>,
    pub overall_risk: RiskLevel,
    pub warnings: Vec<String>,
    pub polish_warnings: Vec<String>,
    pub summary: AlertSummary,
}

/// Quick per-supplement safety overview for a single user
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SupplementSafetyProfile {
    pub supplement_id: String,
    pub is_safe: bool,
    pub risk_level: RiskLevel,
    pub concerns: Vec<String>,
    pub polish_concerns: Vec<String>,
    pub recommendations: Vec<String>,
    pub polish_recommendations: Vec<String>,
}
