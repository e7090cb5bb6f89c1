use super::atom::Atom;
use super::chain::ChainType;
use super::ids::{AtomId, ChainId, ResidueId};
use super::system::MolecularSystem;
use super::topology::BondOrder;
use crate::core::topology::registry::ResidueTemplate;
use crate::core::utils::identifiers;
use nalgebra::Point3;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Cannot add a residue before starting a chain")]
    NoCurrentChain,

    #[error("Cannot add an atom before starting a residue")]
    NoCurrentResidue,

    #[error("Atom name '{name}' is already taken in the current residue")]
    DuplicateAtomName { name: String },

    #[error("No atom with serial {serial} has been added")]
    UnknownSerial { serial: usize },

    #[error("Template for '{residue_name}' names atom '{atom_name}' but no position was supplied")]
    MissingTemplatePosition {
        residue_name: String,
        atom_name: String,
    },
}

/// Incremental constructor for a consistent [`MolecularSystem`].
///
/// Structure loading proper is out of scope for this crate; the builder is the
/// seam where a loader (or a test) hands atoms over. It tracks the current
/// chain/residue, assigns serial numbers, infers element symbols from atom
/// names when not given, and resolves serial-based bonds at the end.
#[derive(Debug, Default)]
pub struct SystemBuilder {
    system: MolecularSystem,
    serial_map: HashMap<usize, AtomId>,
    next_serial: usize,
    current_chain: Option<ChainId>,
    current_residue: Option<ResidueId>,
}

impl SystemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens (or re-opens) a chain; subsequent residues land here.
    pub fn start_chain(&mut self, id: char, chain_type: ChainType) -> &mut Self {
        let chain_id = self.system.add_chain(id, &id.to_string(), chain_type);
        self.current_chain = Some(chain_id);
        self.current_residue = None;
        self
    }

    /// Opens (or re-opens) a residue in the current chain; the residue type is
    /// classified from the name when it matches a standard amino acid.
    pub fn start_residue(&mut self, residue_number: isize, name: &str) -> Result<&mut Self, BuildError> {
        let chain_id = self.current_chain.ok_or(BuildError::NoCurrentChain)?;
        let residue_type = name.parse().ok();
        let residue_id = self
            .system
            .add_residue(chain_id, residue_number, name, residue_type)
            .expect("current chain id is always live");
        self.current_residue = Some(residue_id);
        Ok(self)
    }

    /// Adds one atom to the current residue, returning its assigned serial.
    pub fn add_atom(&mut self, name: &str, position: Point3<f64>) -> Result<usize, BuildError> {
        let residue_id = self.current_residue.ok_or(BuildError::NoCurrentResidue)?;

        let mut atom = Atom::new(name, residue_id, position);
        atom.element = identifiers::element_from_atom_name(name)
            .unwrap_or_default()
            .to_string();
        self.next_serial += 1;
        atom.serial = self.next_serial;

        let atom_id = self
            .system
            .add_atom_to_residue(residue_id, atom)
            .ok_or_else(|| BuildError::DuplicateAtomName {
                name: name.to_string(),
            })?;
        self.serial_map.insert(self.next_serial, atom_id);
        Ok(self.next_serial)
    }

    /// Registers a bond between two previously added atoms by serial.
    pub fn add_bond(&mut self, serial1: usize, serial2: usize, order: BondOrder) -> Result<(), BuildError> {
        let id1 = *self
            .serial_map
            .get(&serial1)
            .ok_or(BuildError::UnknownSerial { serial: serial1 })?;
        let id2 = *self
            .serial_map
            .get(&serial2)
            .ok_or(BuildError::UnknownSerial { serial: serial2 })?;
        self.system
            .add_bond(id1, id2, order)
            .expect("atoms tracked by the builder are always live");
        Ok(())
    }

    /// Instantiates a whole residue from a template: one atom per template slot
    /// at the supplied position, plus every intra-residue bond the template
    /// declares. Template elements win over name-based inference.
    pub fn add_residue_from_template(
        &mut self,
        residue_number: isize,
        residue_name: &str,
        template: &ResidueTemplate,
        positions: &HashMap<String, Point3<f64>>,
    ) -> Result<ResidueId, BuildError> {
        self.start_residue(residue_number, residue_name)?;
        let residue_id = self.current_residue.expect("start_residue just set it");

        let mut serials_by_name: HashMap<&str, usize> = HashMap::new();
        for atom_template in &template.atoms {
            let position = positions.get(&atom_template.name).ok_or_else(|| {
                BuildError::MissingTemplatePosition {
                    residue_name: residue_name.to_string(),
                    atom_name: atom_template.name.clone(),
                }
            })?;
            let serial = self.add_atom(&atom_template.name, *position)?;
            if let Some(element) = &atom_template.element {
                let atom_id = self.serial_map[&serial];
                self.system
                    .atom_mut(atom_id)
                    .expect("atom just inserted")
                    .element = element.clone();
            }
            serials_by_name.insert(atom_template.name.as_str(), serial);
        }

        for [name1, name2] in &template.bonds {
            // Template bonds naming atoms outside the template are a data bug.
            let serial1 = *serials_by_name.get(name1.as_str()).ok_or_else(|| {
                BuildError::MissingTemplatePosition {
                    residue_name: residue_name.to_string(),
                    atom_name: name1.clone(),
                }
            })?;
            let serial2 = *serials_by_name.get(name2.as_str()).ok_or_else(|| {
                BuildError::MissingTemplatePosition {
                    residue_name: residue_name.to_string(),
                    atom_name: name2.clone(),
                }
            })?;
            self.add_bond(serial1, serial2, BondOrder::Single)?;
        }

        Ok(residue_id)
    }

    pub fn build(self) -> MolecularSystem {
        self.system
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::topology::registry::TemplateRegistry;

    #[test]
    fn builds_a_chain_with_bonded_atoms() {
        let mut builder = SystemBuilder::new();
        builder.start_chain('A', ChainType::Protein);
        builder.start_residue(1, "GLY").unwrap();
        let n = builder.add_atom("N", Point3::new(0.0, 0.0, 0.0)).unwrap();
        let ca = builder.add_atom("CA", Point3::new(1.4, 0.0, 0.0)).unwrap();
        builder.add_bond(n, ca, BondOrder::Single).unwrap();

        let system = builder.build();
        assert_eq!(system.atoms_iter().count(), 2);
        assert_eq!(system.bonds().len(), 1);

        let chain_id = system.find_chain_by_id('A').unwrap();
        let ca_id = system.find_atom(chain_id, 1, "CA").unwrap();
        let atom = system.atom(ca_id).unwrap();
        assert_eq!(atom.element, "C", "element inferred from name");
        assert_eq!(atom.serial, 2);
    }

    #[test]
    fn atom_before_residue_fails() {
        let mut builder = SystemBuilder::new();
        builder.start_chain('A', ChainType::Protein);
        assert_eq!(
            builder.add_atom("N", Point3::origin()).unwrap_err(),
            BuildError::NoCurrentResidue
        );
    }

    #[test]
    fn residue_before_chain_fails() {
        let mut builder = SystemBuilder::new();
        assert_eq!(
            builder.start_residue(1, "GLY").unwrap_err(),
            BuildError::NoCurrentChain
        );
    }

    #[test]
    fn duplicate_atom_name_in_residue_fails() {
        let mut builder = SystemBuilder::new();
        builder.start_chain('A', ChainType::Protein);
        builder.start_residue(1, "GLY").unwrap();
        builder.add_atom("CA", Point3::origin()).unwrap();
        assert!(matches!(
            builder.add_atom("CA", Point3::origin()),
            Err(BuildError::DuplicateAtomName { .. })
        ));
    }

    #[test]
    fn bond_with_unknown_serial_fails() {
        let mut builder = SystemBuilder::new();
        builder.start_chain('A', ChainType::Protein);
        builder.start_residue(1, "GLY").unwrap();
        let n = builder.add_atom("N", Point3::origin()).unwrap();
        assert_eq!(
            builder.add_bond(n, 99, BondOrder::Single).unwrap_err(),
            BuildError::UnknownSerial { serial: 99 }
        );
    }

    #[test]
    fn instantiates_residue_from_template() {
        let registry = TemplateRegistry::from_toml_str(
            r#"
[GLY]
atoms = [{ name = "N" }, { name = "CA" }, { name = "H1", element = "H" }]
bonds = [["N", "CA"], ["N", "H1"]]
"#,
        )
        .unwrap();
        let template = registry.get("GLY").unwrap();

        let positions: HashMap<String, Point3<f64>> = [
            ("N".to_string(), Point3::new(0.0, 0.0, 0.0)),
            ("CA".to_string(), Point3::new(1.4, 0.0, 0.0)),
            ("H1".to_string(), Point3::new(-1.0, 0.0, 0.0)),
        ]
        .into_iter()
        .collect();

        let mut builder = SystemBuilder::new();
        builder.start_chain('A', ChainType::Protein);
        let residue_id = builder
            .add_residue_from_template(1, "GLY", template, &positions)
            .unwrap();

        let system = builder.build();
        let residue = system.residue(residue_id).unwrap();
        assert_eq!(residue.atoms().len(), 3);
        assert_eq!(system.bonds().len(), 2);

        let h1_id = residue.get_atom_id_by_name("H1").unwrap();
        assert_eq!(system.atom(h1_id).unwrap().element, "H");
        let n_id = residue.get_atom_id_by_name("N").unwrap();
        assert!(system.has_bond(n_id, h1_id));
    }

    #[test]
    fn template_instantiation_requires_every_position() {
        let registry = TemplateRegistry::from_toml_str(
            r#"
[GLY]
atoms = [{ name = "N" }, { name = "CA" }]
bonds = [["N", "CA"]]
"#,
        )
        .unwrap();
        let template = registry.get("GLY").unwrap();

        let positions: HashMap<String, Point3<f64>> =
            [("N".to_string(), Point3::origin())].into_iter().collect();

        let mut builder = SystemBuilder::new();
        builder.start_chain('A', ChainType::Protein);
        let result = builder.add_residue_from_template(1, "GLY", template, &positions);
        assert!(matches!(
            result,
            Err(BuildError::MissingTemplatePosition { .. })
        ));
    }
}
