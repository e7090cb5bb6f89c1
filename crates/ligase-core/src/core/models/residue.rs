use super::ids::{AtomId, ChainId};
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

/// The twenty standard amino-acid residue types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueType {
    Alanine,
    Arginine,
    Asparagine,
    AsparticAcid,
    Cysteine,
    GlutamicAcid,
    Glutamine,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
}

impl ResidueType {
    /// Returns the canonical three-letter code (e.g., "GLY").
    pub fn to_three_letter(self) -> &'static str {
        match self {
            ResidueType::Alanine => "ALA",
            ResidueType::Arginine => "ARG",
            ResidueType::Asparagine => "ASN",
            ResidueType::AsparticAcid => "ASP",
            ResidueType::Cysteine => "CYS",
            ResidueType::GlutamicAcid => "GLU",
            ResidueType::Glutamine => "GLN",
            ResidueType::Glycine => "GLY",
            ResidueType::Histidine => "HIS",
            ResidueType::Isoleucine => "ILE",
            ResidueType::Leucine => "LEU",
            ResidueType::Lysine => "LYS",
            ResidueType::Methionine => "MET",
            ResidueType::Phenylalanine => "PHE",
            ResidueType::Proline => "PRO",
            ResidueType::Serine => "SER",
            ResidueType::Threonine => "THR",
            ResidueType::Tryptophan => "TRP",
            ResidueType::Tyrosine => "TYR",
            ResidueType::Valine => "VAL",
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown residue type code: '{0}'")]
pub struct ParseResidueTypeError(String);

impl FromStr for ResidueType {
    type Err = ParseResidueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALA" => Ok(ResidueType::Alanine),
            "ARG" => Ok(ResidueType::Arginine),
            "ASN" => Ok(ResidueType::Asparagine),
            "ASP" => Ok(ResidueType::AsparticAcid),
            "CYS" => Ok(ResidueType::Cysteine),
            "GLU" => Ok(ResidueType::GlutamicAcid),
            "GLN" => Ok(ResidueType::Glutamine),
            "GLY" => Ok(ResidueType::Glycine),
            "HIS" | "HSE" | "HSD" => Ok(ResidueType::Histidine),
            "ILE" => Ok(ResidueType::Isoleucine),
            "LEU" => Ok(ResidueType::Leucine),
            "LYS" => Ok(ResidueType::Lysine),
            "MET" => Ok(ResidueType::Methionine),
            "PHE" => Ok(ResidueType::Phenylalanine),
            "PRO" => Ok(ResidueType::Proline),
            "SER" => Ok(ResidueType::Serine),
            "THR" => Ok(ResidueType::Threonine),
            "TRP" => Ok(ResidueType::Tryptophan),
            "TYR" => Ok(ResidueType::Tyrosine),
            "VAL" => Ok(ResidueType::Valine),
            other => Err(ParseResidueTypeError(other.to_string())),
        }
    }
}

/// One monomer unit in a polymer chain.
///
/// A residue owns an ordered list of atom ids together with a name-to-id map.
/// Atom names are unique within one residue; this invariant is what makes
/// name-based harvesting in editing operations well-defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    /// Residue sequence number within its chain. Unique, not necessarily contiguous.
    pub residue_number: isize,
    /// Name of the residue (e.g., "ALA", "GLY").
    pub name: String,
    /// Classified residue type, when the name matched a standard amino acid.
    pub residue_type: Option<ResidueType>,
    /// ID of the parent chain.
    pub chain_id: ChainId,
    pub(crate) atoms: Vec<AtomId>,
    atom_name_map: HashMap<String, AtomId>,
}

impl Residue {
    pub(crate) fn new(
        residue_number: isize,
        name: &str,
        residue_type: Option<ResidueType>,
        chain_id: ChainId,
    ) -> Self {
        Self {
            residue_number,
            name: name.to_string(),
            residue_type,
            chain_id,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    /// Registers an atom under its name. Returns `false` (and leaves the
    /// residue unchanged) if the name is already taken.
    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) -> bool {
        if self.atom_name_map.contains_key(atom_name) {
            return false;
        }
        self.atoms.push(atom_id);
        self.atom_name_map.insert(atom_name.to_string(), atom_id);
        true
    }

    pub(crate) fn remove_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        self.atoms.retain(|&id| id != atom_id);
        self.atom_name_map.remove(atom_name);
    }

    /// The residue's atoms in insertion order.
    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    /// Looks up an atom id by its unique name within this residue.
    pub fn get_atom_id_by_name(&self, name: &str) -> Option<AtomId> {
        self.atom_name_map.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_atom_id(n: u64) -> AtomId {
        AtomId::from(KeyData::from_ffi(n))
    }

    fn dummy_chain_id(n: u64) -> ChainId {
        ChainId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn new_residue_initializes_fields() {
        let chain_id = dummy_chain_id(1);
        let residue = Residue::new(10, "GLY", Some(ResidueType::Glycine), chain_id);
        assert_eq!(residue.residue_number, 10);
        assert_eq!(residue.name, "GLY");
        assert_eq!(residue.residue_type, Some(ResidueType::Glycine));
        assert_eq!(residue.chain_id, chain_id);
        assert!(residue.atoms().is_empty());
    }

    #[test]
    fn add_atom_maps_name_to_id() {
        let mut residue = Residue::new(5, "ALA", None, dummy_chain_id(2));
        let atom_id = dummy_atom_id(42);
        assert!(residue.add_atom("CA", atom_id));
        assert_eq!(residue.atoms(), &[atom_id]);
        assert_eq!(residue.get_atom_id_by_name("CA"), Some(atom_id));
    }

    #[test]
    fn add_atom_rejects_duplicate_names() {
        let mut residue = Residue::new(5, "ALA", None, dummy_chain_id(2));
        assert!(residue.add_atom("CA", dummy_atom_id(1)));
        assert!(!residue.add_atom("CA", dummy_atom_id(2)));
        assert_eq!(residue.atoms().len(), 1);
        assert_eq!(residue.get_atom_id_by_name("CA"), Some(dummy_atom_id(1)));
    }

    #[test]
    fn remove_atom_clears_both_list_and_map() {
        let mut residue = Residue::new(8, "THR", None, dummy_chain_id(4));
        let atom_id = dummy_atom_id(100);
        residue.add_atom("OG1", atom_id);
        residue.remove_atom("OG1", atom_id);
        assert!(residue.atoms().is_empty());
        assert!(residue.get_atom_id_by_name("OG1").is_none());
    }

    #[test]
    fn remove_atom_is_a_no_op_for_absent_atoms() {
        let mut residue = Residue::new(9, "VAL", None, dummy_chain_id(5));
        let atom_id = dummy_atom_id(200);
        residue.add_atom("CG1", atom_id);
        residue.remove_atom("CG2", dummy_atom_id(201));
        assert_eq!(residue.atoms(), &[atom_id]);
    }

    #[test]
    fn residue_type_round_trips_three_letter_codes() {
        for code in ["ALA", "GLY", "TRP", "HIS", "VAL"] {
            let parsed: ResidueType = code.parse().unwrap();
            assert_eq!(parsed.to_three_letter(), code);
        }
    }

    #[test]
    fn residue_type_parse_is_case_insensitive_and_trims() {
        assert_eq!(
            " gly ".parse::<ResidueType>().unwrap(),
            ResidueType::Glycine
        );
        assert!("XXX".parse::<ResidueType>().is_err());
    }
}
