//! Read-only reference data
//!
//! The catalog is loaded once at startup and shared by reference with both
//! the safety analyzer and the graph assembler. It holds:
//! - supplement records (the join key is the supplement id)
//! - neuroplasticity mechanisms
//! - synergy groups
//!
//! The fixed vocabularies (neurotransmitters, brain regions, cognitive
//! functions, pathways) live in [`reference`].

pub mod reference;

use crate::models::{EvidenceLevel, SupplementRecord};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub use reference::{BrainRegion, CognitiveFunction, Neurotransmitter, Pathway, ReferenceEntry};

const BUILTIN_CATALOG: &str = include_str!("../../data/builtin_catalog.json");

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("duplicate supplement id '{0}' in catalog")]
    DuplicateSupplementId(String),

    #[error("node id '{id}' of {kind} is already used by {existing}")]
    DuplicateNodeId {
        id: String,
        kind: &'static str,
        existing: &'static str,
    },

    #[error("unsupported catalog format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),
}

/// A neuroplasticity mechanism (LTP, BDNF signalling, neurogenesis, ...)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NeuroplasticityMechanism {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub polish_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub polish_description: String,
    #[serde(default)]
    pub pathway: Option<String>,
    /// Free-text region names; mapped onto [`BrainRegion`] by keyword
    #[serde(default)]
    pub affected_brain_regions: Vec<String>,
    #[serde(default)]
    pub evidence_level: EvidenceLevel,
    #[serde(default)]
    pub duration: Option<String>,
}

/// A group of supplements documented to work better together
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SynergyGroup {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mechanism: String,
    #[serde(default)]
    pub polish_mechanism: String,
    #[serde(default)]
    pub evidence_level: EvidenceLevel,
    /// Supplement ids taking part in the synergy
    #[serde(default)]
    pub supplements: Vec<String>,
}

/// On-disk catalog layout
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    #[serde(default)]
    pub supplements: Vec<SupplementRecord>,
    #[serde(default)]
    pub mechanisms: Vec<NeuroplasticityMechanism>,
    #[serde(default)]
    pub synergies: Vec<SynergyGroup>,
}

/// Lookup seam used by the safety analyzer
pub trait SupplementLookup {
    fn supplement(&self, id: &str) -> Option<&SupplementRecord>;
}

impl SupplementLookup for HashMap<String, SupplementRecord> {
    fn supplement(&self, id: &str) -> Option<&SupplementRecord> {
        self.get(id)
    }
}

/// Immutable in-memory catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    supplements: Vec<SupplementRecord>,
    index: HashMap<String, usize>,
    mechanisms: Vec<NeuroplasticityMechanism>,
    synergies: Vec<SynergyGroup>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate supplement ids and any
    /// supplement or mechanism id that collides with another graph node id
    pub fn new(file: CatalogFile) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(file.supplements.len());
        for (i, supplement) in file.supplements.iter().enumerate() {
            if index.insert(supplement.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSupplementId(supplement.id.clone()));
            }
        }
        check_node_ids(&file)?;

        debug!(
            "Catalog built: {} supplements, {} mechanisms, {} synergy groups",
            file.supplements.len(),
            file.mechanisms.len(),
            file.synergies.len()
        );

        Ok(Self {
            supplements: file.supplements,
            index,
            mechanisms: file.mechanisms,
            synergies: file.synergies,
        })
    }

    /// The demonstration catalog compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(BUILTIN_CATALOG).map_err(|e| CatalogError::Parse {
                path: PathBuf::from("<builtin>"),
                message: e.to_string(),
            })?;
        Self::new(file)
    }

    /// Load a catalog from a `.json` or `.toml` file
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        let file: CatalogFile = match ext.as_str() {
            "json" => serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            "toml" => toml::from_str(&content).map_err(|e| CatalogError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
        };

        info!("Loaded catalog from {}", path.display());
        Self::new(file)
    }

    pub fn supplements(&self) -> &[SupplementRecord] {
        &self.supplements
    }

    pub fn mechanisms(&self) -> &[NeuroplasticityMechanism] {
        &self.mechanisms
    }

    pub fn synergies(&self) -> &[SynergyGroup] {
        &self.synergies
    }

    pub fn len(&self) -> usize {
        self.supplements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supplements.is_empty()
    }

    /// Supplement records keyed by id, for callers that want a plain map
    pub fn supplement_map(&self) -> HashMap<String, SupplementRecord> {
        self.supplements
            .iter()
            .map(|s| (s.id.clone(), s.clone()))
            .collect()
    }
}

/// Graph node ids share one namespace: reference entries, supplements and
/// mechanisms must not reuse each other's ids
fn check_node_ids(file: &CatalogFile) -> Result<(), CatalogError> {
    let mut owners: HashMap<&str, &'static str> = HashMap::new();
    for id in Neurotransmitter::ALL.iter().map(|n| n.id()) {
        owners.insert(id, "a neurotransmitter");
    }
    for id in BrainRegion::ALL.iter().map(|r| r.id()) {
        owners.insert(id, "a brain region");
    }
    for id in CognitiveFunction::ALL.iter().map(|c| c.id()) {
        owners.insert(id, "a cognitive function");
    }
    for id in Pathway::ALL.iter().map(|p| p.id()) {
        owners.insert(id, "a pathway");
    }

    let catalog_ids = file
        .supplements
        .iter()
        .map(|s| (s.id.as_str(), "a supplement"))
        .chain(file.mechanisms.iter().map(|m| (m.id.as_str(), "a mechanism")));

    for (id, kind) in catalog_ids {
        match owners.entry(id) {
            Entry::Occupied(existing) => {
                return Err(CatalogError::DuplicateNodeId {
                    id: id.to_string(),
                    kind,
                    existing: *existing.get(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(kind);
            }
        }
    }
    Ok(())
}

impl SupplementLookup for Catalog {
    fn supplement(&self, id: &str) -> Option<&SupplementRecord> {
        self.index.get(id).and_then(|&i| self.supplements.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> SupplementRecord {
        SupplementRecord {
            id: id.into(),
            name: id.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        assert!(catalog.len() >= 6);
        assert!(!catalog.mechanisms().is_empty());
        assert!(!catalog.synergies().is_empty());
        assert!(catalog.supplement("omega-3").is_some());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let file = CatalogFile {
            supplements: vec![record("a"), record("a")],
            ..Default::default()
        };
        match Catalog::new(file) {
            Err(CatalogError::DuplicateSupplementId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_node_id_collisions_rejected() {
        let mechanism = |id: &str| NeuroplasticityMechanism {
            id: id.into(),
            name: id.into(),
            ..Default::default()
        };

        let reference_clash = CatalogFile {
            supplements: vec![record("memory")],
            ..Default::default()
        };
        match Catalog::new(reference_clash) {
            Err(CatalogError::DuplicateNodeId { id, kind, existing }) => {
                assert_eq!(id, "memory");
                assert_eq!(kind, "a supplement");
                assert_eq!(existing, "a cognitive function");
            }
            other => panic!("expected node id error, got {other:?}"),
        }

        let repeated_mechanism = CatalogFile {
            mechanisms: vec![mechanism("np-x"), mechanism("np-x")],
            ..Default::default()
        };
        assert!(matches!(
            Catalog::new(repeated_mechanism),
            Err(CatalogError::DuplicateNodeId { existing: "a mechanism", .. })
        ));

        let cross_kind = CatalogFile {
            supplements: vec![record("bdnf")],
            mechanisms: vec![mechanism("bdnf")],
            ..Default::default()
        };
        assert!(matches!(
            Catalog::new(cross_kind),
            Err(CatalogError::DuplicateNodeId { kind: "a mechanism", existing: "a supplement", .. })
        ));

        let region_clash = CatalogFile {
            mechanisms: vec![mechanism("hippocampus")],
            ..Default::default()
        };
        assert!(Catalog::new(region_clash).is_err());
    }

    #[test]
    fn test_lookup_missing_id() {
        let catalog = Catalog::new(CatalogFile {
            supplements: vec![record("a")],
            ..Default::default()
        })
        .unwrap();
        assert!(catalog.supplement("a").is_some());
        assert!(catalog.supplement("b").is_none());
    }

    #[test]
    fn test_hashmap_lookup() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), record("a"));
        assert_eq!(map.supplement("a").map(|s| s.id.as_str()), Some("a"));
    }

    #[test]
    fn test_from_path_json_and_toml() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("catalog.json");
        std::fs::write(
            &json_path,
            r#"{"supplements": [{"id": "zinc", "name": "Zinc", "polishName": "Cynk"}]}"#,
        )
        .unwrap();
        let catalog = Catalog::from_path(&json_path).unwrap();
        assert_eq!(catalog.supplement("zinc").unwrap().polish_name, "Cynk");

        let toml_path = dir.path().join("catalog.toml");
        std::fs::write(
            &toml_path,
            r#"
[[supplements]]
id = "zinc"
name = "Zinc"

[[mechanisms]]
id = "np-ltp"
name = "Long-term potentiation"
affectedBrainRegions = ["Hippocampus"]
evidenceLevel = "STRONG"
"#,
        )
        .unwrap();
        let catalog = Catalog::from_path(&toml_path).unwrap();
        assert_eq!(catalog.mechanisms().len(), 1);
        assert_eq!(catalog.mechanisms()[0].evidence_level, EvidenceLevel::Strong);
    }

    #[test]
    fn test_from_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Catalog::from_path(&dir.path().join("missing.json")),
            Err(CatalogError::Io { .. })
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert!(matches!(
            Catalog::from_path(&bad),
            Err(CatalogError::Parse { .. })
        ));

        let yaml = dir.path().join("catalog.yaml");
        std::fs::write(&yaml, "supplements: []").unwrap();
        assert!(matches!(
            Catalog::from_path(&yaml),
            Err(CatalogError::UnsupportedFormat(_))
        ));
    }
}
