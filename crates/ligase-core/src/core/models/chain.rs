use super::ids::ResidueId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Classifies what kind of polymer (or non-polymer group) a chain holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainType {
    Protein,
    DNA,
    RNA,
    Ligand,
    Water,
    Other,
}

#[derive(Debug, Error)]
#[error("Invalid chain type string")]
pub struct ParseChainTypeError;

impl FromStr for ChainType {
    type Err = ParseChainTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "protein" => Ok(ChainType::Protein),
            "dna" => Ok(ChainType::DNA),
            "rna" => Ok(ChainType::RNA),
            "ligand" => Ok(ChainType::Ligand),
            "water" => Ok(ChainType::Water),
            _ => Ok(ChainType::Other),
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChainType::Protein => "Protein",
            ChainType::DNA => "DNA",
            ChainType::RNA => "RNA",
            ChainType::Ligand => "Ligand",
            ChainType::Water => "Water",
            ChainType::Other => "Other",
        };
        f.write_str(label)
    }
}

/// An ordered collection of residues belonging to one polymer chain.
///
/// Residues are addressed by sequence number through the owning system's lookup
/// map; the chain itself keeps them in insertion order for iteration and for
/// the residue-count parity used by the condensation dihedral scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    /// One-character chain identifier (e.g., 'A').
    pub id: char,
    /// Human-readable display name (e.g., "A" or a structure-specific label).
    pub name: String,
    /// Type of the chain.
    pub chain_type: ChainType,
    pub(crate) residues: Vec<ResidueId>,
}

impl Chain {
    pub(crate) fn new(id: char, name: &str, chain_type: ChainType) -> Self {
        Self {
            id,
            name: name.to_string(),
            chain_type,
            residues: Vec::new(),
        }
    }

    /// The chain's residues in insertion order.
    pub fn residues(&self) -> &[ResidueId] {
        &self.residues
    }

    /// Number of residues currently in the chain.
    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }
}
