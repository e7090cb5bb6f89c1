use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// One atom slot of a residue template.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AtomTemplate {
    pub name: String,
    /// Element symbol; inferred from the atom name when omitted.
    #[serde(default)]
    pub element: Option<String>,
}

/// The atoms and intra-residue bonds that make up one residue kind.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResidueTemplate {
    pub atoms: Vec<AtomTemplate>,
    pub bonds: Vec<[String; 2]>,
}

impl ResidueTemplate {
    pub fn atom_names(&self) -> impl Iterator<Item = &str> {
        self.atoms.iter().map(|atom| atom.name.as_str())
    }
}

/// Registry of residue templates keyed by residue name (e.g., "GLY").
///
/// Templates are declared in TOML, one table per residue kind:
///
/// ```toml
/// [GLY]
/// atoms = [{ name = "N" }, { name = "CA" }, { name = "C" }, { name = "O" }]
/// bonds = [["N", "CA"], ["CA", "C"], ["C", "O"]]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRegistry {
    registry: HashMap<String, ResidueTemplate>,
}

impl TemplateRegistry {
    pub fn load(path: &Path) -> Result<Self, TemplateLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TemplateLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| TemplateLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let registry: HashMap<String, ResidueTemplate> = toml::from_str(content)?;
        Ok(Self { registry })
    }

    pub fn get(&self, residue_name: &str) -> Option<&ResidueTemplate> {
        self.registry.get(residue_name)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum TemplateLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}
