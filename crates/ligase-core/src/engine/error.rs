use crate::core::models::ids::ResidueId;
use crate::core::utils::geometry::GeometryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Chain '{chain_id}' not found in system")]
    ChainNotFound { chain_id: char },

    #[error("Residue {residue_number} not found in chain '{chain_id}'")]
    ResidueNotFound {
        chain_id: char,
        residue_number: isize,
    },

    #[error("Residue {residue_id:?} is missing required atom '{atom_name}'")]
    MalformedResidue {
        residue_id: ResidueId,
        atom_name: &'static str,
    },

    #[error(
        "Residue {residue_id:?} is not a free carboxyl terminus: missing '{atom_name}'"
    )]
    InvalidTerminus {
        residue_id: ResidueId,
        atom_name: &'static str,
    },

    #[error("A covalent bond between residues {residue_n:?} and {residue_c:?} already exists")]
    DuplicateBond {
        residue_n: ResidueId,
        residue_c: ResidueId,
    },

    #[error("Degenerate geometry: {source}")]
    DegenerateGeometry {
        #[from]
        source: GeometryError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
