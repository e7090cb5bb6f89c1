use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents an atom in a molecular structure.
///
/// An atom carries its identity (PDB-style name, element symbol, source serial
/// number), a back-reference to its owning residue, and a mutable 3D position.
/// Editing operations such as peptide-bond formation move atoms in place; the
/// position recorded at construction time is kept separately so consumers can
/// still reach the coordinates the structure was loaded with.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom within its residue (e.g., "CA", "N", "OXT").
    pub name: String,
    /// The chemical element symbol (e.g., "C", "N", "O").
    pub element: String,
    /// The serial number the atom carried in its source structure, if any.
    pub serial: usize,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The current 3D coordinates of the atom in Angstroms. Mutable in place.
    pub position: Point3<f64>,
    /// The coordinates the atom was created with, before any editing operation.
    pub reference_position: Option<Point3<f64>>,
}

impl Atom {
    /// Creates a new `Atom` at the given position.
    ///
    /// The element symbol and serial number default to empty/zero and can be
    /// filled in afterward; [`reference_position`](Atom::reference_position)
    /// is initialized to the construction position.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            element: String::new(),
            serial: 0,
            residue_id,
            position,
            reference_position: Some(position),
        }
    }

    /// Returns `true` if the atom is a hydrogen (or deuterium).
    pub fn is_hydrogen(&self) -> bool {
        if self.element.is_empty() {
            !crate::core::utils::identifiers::is_heavy_atom(&self.name)
        } else {
            matches!(self.element.as_str(), "H" | "D")
        }
    }
}
