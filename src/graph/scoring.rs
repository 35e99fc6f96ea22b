//! Supplement node scoring
//!
//! ```text
//! evidence   = STRONG        if strong studies >= 3
//!              MODERATE      if strong studies >= 1 or moderate studies >= 3
//!              WEAK          if studies >= 2
//!              INSUFFICIENT  if studies >= 1
//!              CONFLICTING   otherwise
//!
//! size       = 8 + min(studies * 0.5, 4) + min(applications * 0.3, 3)
//! importance = clamp(studies * 0.1 + applications * 0.05 + weight(evidence) * 0.3, 0, 1)
//! ```
//!
//! The coefficients have no validated derivation; every one of them is
//! configurable through `[scoring]` in the project config.

use crate::models::{EvidenceLevel, SupplementRecord};
use serde::{Deserialize, Serialize};

/// Weight of each evidence level, used for importance and the edge filter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvidenceWeights {
    #[serde(default = "default_strong")]
    pub strong: f64,
    #[serde(default = "default_moderate")]
    pub moderate: f64,
    #[serde(default = "default_weak")]
    pub weak: f64,
    #[serde(default = "default_insufficient")]
    pub insufficient: f64,
    #[serde(default = "default_conflicting")]
    pub conflicting: f64,
}

impl Default for EvidenceWeights {
    fn default() -> Self {
        Self {
            strong: default_strong(),
            moderate: default_moderate(),
            weak: default_weak(),
            insufficient: default_insufficient(),
            conflicting: default_conflicting(),
        }
    }
}

fn default_strong() -> f64 {
    1.0
}
fn default_moderate() -> f64 {
    0.8
}
fn default_weak() -> f64 {
    0.6
}
fn default_insufficient() -> f64 {
    0.4
}
fn default_conflicting() -> f64 {
    0.2
}

impl EvidenceWeights {
    pub fn weight(&self, level: EvidenceLevel) -> f64 {
        match level {
            EvidenceLevel::Strong => self.strong,
            EvidenceLevel::Moderate => self.moderate,
            EvidenceLevel::Weak => self.weak,
            EvidenceLevel::Insufficient => self.insufficient,
            EvidenceLevel::Conflicting => self.conflicting,
        }
    }

    /// Finite, non-negative, and non-decreasing from CONFLICTING to STRONG
    pub fn is_valid(&self) -> bool {
        let ordered = [
            self.conflicting,
            self.insufficient,
            self.weak,
            self.moderate,
            self.strong,
        ];
        ordered.iter().all(|w| w.is_finite() && *w >= 0.0)
            && ordered.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

/// Tunable coefficients for supplement size and importance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Importance per research study (default: 0.1)
    #[serde(default = "default_study_weight")]
    pub study_weight: f64,

    /// Importance per clinical application (default: 0.05)
    #[serde(default = "default_application_weight")]
    pub application_weight: f64,

    /// Multiplier on the evidence weight (default: 0.3)
    #[serde(default = "default_evidence_weight")]
    pub evidence_weight: f64,

    #[serde(default = "default_base_size")]
    pub base_size: f64,

    #[serde(default = "default_study_size_step")]
    pub study_size_step: f64,

    #[serde(default = "default_study_size_cap")]
    pub study_size_cap: f64,

    #[serde(default = "default_application_size_step")]
    pub application_size_step: f64,

    #[serde(default = "default_application_size_cap")]
    pub application_size_cap: f64,

    #[serde(default)]
    pub evidence_weights: EvidenceWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            study_weight: default_study_weight(),
            application_weight: default_application_weight(),
            evidence_weight: default_evidence_weight(),
            base_size: default_base_size(),
            study_size_step: default_study_size_step(),
            study_size_cap: default_study_size_cap(),
            application_size_step: default_application_size_step(),
            application_size_cap: default_application_size_cap(),
            evidence_weights: EvidenceWeights::default(),
        }
    }
}

fn default_study_weight() -> f64 {
    0.1
}
fn default_application_weight() -> f64 {
    0.05
}
fn default_evidence_weight() -> f64 {
    0.3
}
fn default_base_size() -> f64 {
    8.0
}
fn default_study_size_step() -> f64 {
    0.5
}
fn default_study_size_cap() -> f64 {
    4.0
}
fn default_application_size_step() -> f64 {
    0.3
}
fn default_application_size_cap() -> f64 {
    3.0
}

impl ScoringConfig {
    /// All coefficients finite and non-negative, evidence weights ordered
    pub fn is_valid(&self) -> bool {
        [
            self.study_weight,
            self.application_weight,
            self.evidence_weight,
            self.base_size,
            self.study_size_step,
            self.study_size_cap,
            self.application_size_step,
            self.application_size_cap,
        ]
        .iter()
        .all(|c| c.is_finite() && *c >= 0.0)
            && self.evidence_weights.is_valid()
    }

    pub fn node_size(&self, supplement: &SupplementRecord) -> f64 {
        let studies = supplement.research_studies.len() as f64;
        let applications = supplement.clinical_applications.len() as f64;
        self.base_size
            + (studies * self.study_size_step).min(self.study_size_cap)
            + (applications * self.application_size_step).min(self.application_size_cap)
    }

    pub fn importance(&self, supplement: &SupplementRecord) -> f64 {
        let studies = supplement.research_studies.len() as f64;
        let applications = supplement.clinical_applications.len() as f64;
        let evidence = self
            .evidence_weights
            .weight(supplement_evidence_level(supplement));
        (studies * self.study_weight
            + applications * self.application_weight
            + evidence * self.evidence_weight)
            .clamp(0.0, 1.0)
    }
}

/// Evidence level of a supplement, derived from its research studies
pub fn supplement_evidence_level(supplement: &SupplementRecord) -> EvidenceLevel {
    let studies = &supplement.research_studies;
    let strong = studies
        .iter()
        .filter(|s| s.evidence_level == EvidenceLevel::Strong)
        .count();
    let moderate = studies
        .iter()
        .filter(|s| s.evidence_level == EvidenceLevel::Moderate)
        .count();

    if strong >= 3 {
        EvidenceLevel::Strong
    } else if strong >= 1 || moderate >= 3 {
        EvidenceLevel::Moderate
    } else if studies.len() >= 2 {
        EvidenceLevel::Weak
    } else if !studies.is_empty() {
        EvidenceLevel::Insufficient
    } else {
        EvidenceLevel::Conflicting
    }
}
