use super::ids::{AtomId, ChainId, ResidueId};
use super::system::MolecularSystem;
use super::topology::Bond;
use std::collections::HashSet;

/// An ordered result set of atoms, optionally with the bonds they induce.
///
/// This is the read-only surface rendering consumers regenerate meshes from
/// after an editing operation: an atom id list in a stable order plus every
/// registered bond whose both endpoints lie inside the set. A selection holds
/// ids, not data; positions are read back through the system at draw time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    name: String,
    atoms: Vec<AtomId>,
    bonds: Vec<Bond>,
}

impl Selection {
    /// Descriptive name of the selection (e.g., "chain A").
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// A copy of this selection with all hydrogens stripped, for consumers
    /// that draw heavy atoms only. Induced bonds are recomputed.
    pub fn without_hydrogens(&self, system: &MolecularSystem) -> Selection {
        let atoms: Vec<AtomId> = self
            .atoms
            .iter()
            .copied()
            .filter(|&id| system.atom(id).is_some_and(|atom| !atom.is_hydrogen()))
            .collect();
        let bonds = induced_bonds(system, &atoms);
        Selection {
            name: format!("{} and not hydrogen", self.name),
            atoms,
            bonds,
        }
    }
}

fn induced_bonds(system: &MolecularSystem, atoms: &[AtomId]) -> Vec<Bond> {
    let atom_set: HashSet<AtomId> = atoms.iter().copied().collect();
    system
        .bonds()
        .iter()
        .filter(|bond| atom_set.contains(&bond.atom1_id) && atom_set.contains(&bond.atom2_id))
        .copied()
        .collect()
}

impl MolecularSystem {
    /// Builds a selection over every atom of a chain, in residue order.
    ///
    /// With `with_bonds` set, the induced bond set is included; otherwise the
    /// selection carries atoms only. Returns `None` for a stale chain id.
    pub fn select_chain(&self, chain_id: ChainId, with_bonds: bool) -> Option<Selection> {
        let chain = self.chain(chain_id)?;
        let atoms: Vec<AtomId> = chain
            .residues()
            .iter()
            .filter_map(|&residue_id| self.residue(residue_id))
            .flat_map(|residue| residue.atoms().iter().copied())
            .collect();
        let bonds = if with_bonds {
            induced_bonds(self, &atoms)
        } else {
            Vec::new()
        };
        Some(Selection {
            name: format!("chain {}", chain.name),
            atoms,
            bonds,
        })
    }

    /// Builds a selection over one residue's atoms.
    pub fn select_residue(&self, residue_id: ResidueId, with_bonds: bool) -> Option<Selection> {
        let residue = self.residue(residue_id)?;
        let atoms = residue.atoms().to_vec();
        let bonds = if with_bonds {
            induced_bonds(self, &atoms)
        } else {
            Vec::new()
        };
        Some(Selection {
            name: format!("residue {} {}", residue.name, residue.residue_number),
            atoms,
            bonds,
        })
    }
}
