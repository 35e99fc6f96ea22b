//! Project-level configuration
//!
//! Supports loading from, in order:
//! 1. `suplementor.toml` in the working directory (preferred)
//! 2. `.suplementorrc.json` in the working directory
//! 3. `~/.config/suplementor/config.toml`
//!
//! The first file that parses wins; a file that fails to parse is logged and
//! skipped. With no usable file, defaults apply.
//!
//! # Example
//!
//! ```toml
//! [graph]
//! min_evidence_level = "MODERATE"
//! max_nodes = 200
//! include_pathways = false
//!
//! [layout]
//! seed = 42
//!
//! [scoring]
//! study_weight = 0.1
//!
//! [scoring.evidence_weights]
//! strong = 1.0
//! conflicting = 0.1
//!
//! [safety]
//! interaction_dedup = "keep-both"
//!
//! [catalog]
//! path = "data/catalog.json"
//! ```

use crate::graph::{GraphOptions, LayoutOptions, ScoringConfig};
use crate::models::RiskLevel;
use crate::safety::InteractionDedup;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "suplementor.toml";
pub const JSON_CONFIG_FILE_NAME: &str = ".suplementorrc.json";

/// Complete project configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuplementorConfig {
    #[serde(default)]
    pub graph: GraphOptions,

    #[serde(default)]
    pub layout: LayoutOptions,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub safety: SafetyConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl SuplementorConfig {
    /// Graph options with the `[layout]` section applied
    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            layout: self.layout.clone(),
            ..self.graph.clone()
        }
    }

    /// Replace invalid scoring coefficients with defaults
    fn sanitize(mut self, source: &Path) -> Self {
        if !self.scoring.is_valid() {
            warn!(
                "Invalid [scoring] in {} (weights must be finite, non-negative and ordered); using defaults",
                source.display()
            );
            self.scoring = ScoringConfig::default();
        }
        self
    }
}

/// `[safety]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SafetyConfig {
    /// How interactions documented by both supplements are reported
    #[serde(default)]
    pub interaction_dedup: InteractionDedup,

    /// Default risk level at which `safety` exits non-zero
    #[serde(default)]
    pub fail_on: Option<RiskLevel>,
}

/// `[catalog]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file (.json or .toml); the built-in catalog is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Catalog path resolved against `base` when relative
    pub fn resolved_path(&self, base: &Path) -> Option<PathBuf> {
        self.path.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                base.join(p)
            }
        })
    }
}

/// Path of the user-level config file
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("suplementor").join("config.toml"))
}

/// Load configuration for `dir`, falling back to the user config and then defaults
pub fn load_config(dir: &Path) -> SuplementorConfig {
    let toml_path = dir.join(CONFIG_FILE_NAME);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded config from {}", toml_path.display());
                return config.sanitize(&toml_path);
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(JSON_CONFIG_FILE_NAME);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded config from {}", json_path.display());
                return config.sanitize(&json_path);
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", json_path.display(), e);
            }
        }
    }

    if let Some(user_path) = user_config_path().filter(|p| p.exists()) {
        match load_toml_config(&user_path) {
            Ok(config) => {
                debug!("Loaded user config from {}", user_path.display());
                return config.sanitize(&user_path);
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", user_path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    SuplementorConfig::default()
}

fn load_toml_config(path: &Path) -> Result<SuplementorConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: SuplementorConfig = toml::from_str(&content)?;
    Ok(config)
}

fn load_json_config(path: &Path) -> Result<SuplementorConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: SuplementorConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Commented example written by `suplementor init`
pub const CONFIG_TEMPLATE: &str = r#"# Suplementor configuration

[graph]
# Categories to include in the knowledge graph
include_supplements = true
include_neurotransmitters = true
include_brain_regions = true
include_cognitive_functions = true
include_pathways = true
include_mechanisms = true

# Drop relationships below this evidence level
# (STRONG, MODERATE, WEAK, INSUFFICIENT, CONFLICTING)
min_evidence_level = "WEAK"

# Keep at most this many nodes, most important first
max_nodes = 500

[layout]
# Fix the seed for reproducible node positions
# seed = 42
width = 800.0
height = 600.0

[scoring]
study_weight = 0.1
application_weight = 0.05
evidence_weight = 0.3

[scoring.evidence_weights]
strong = 1.0
moderate = 0.8
weak = 0.6
insufficient = 0.4
conflicting = 0.2

[safety]
# "merge" reports an interaction documented by both supplements once,
# "keep-both" reports it once per direction
interaction_dedup = "merge"

# Exit non-zero when overall risk reaches this level (medium, high)
# fail_on = "high"

[catalog]
# Supplement catalog (.json or .toml); the built-in catalog is used when unset
# path = "catalog.json"
"#;

/// Write the example config into `dir`; returns false when one already exists
pub fn init_config(dir: &Path) -> Result<bool> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        debug!("Config already present at {}", path.display());
        return Ok(false);
    }
    std::fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}
