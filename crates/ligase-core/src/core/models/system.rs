use super::atom::Atom;
use super::chain::{Chain, ChainType};
use super::ids::{AtomId, ChainId, ResidueId};
use super::residue::{Residue, ResidueType};
use super::topology::{Bond, BondOrder};
use slotmap::{SecondaryMap, SlotMap};
use std::collections::HashMap;

/// The structural graph: a complete molecular structure with atoms, residues,
/// chains, and a covalent bond registry.
///
/// Entities are stored in slot maps and addressed through stable ids, with
/// lookup maps for the human-facing addresses (chain letter, residue sequence
/// number, atom name). All chains of one system share the single bond registry,
/// and the system keeps that registry consistent: removing an atom also removes
/// every bond referencing it, so callers never observe dangling bond endpoints.
#[derive(Debug, Clone, Default)]
pub struct MolecularSystem {
    atoms: SlotMap<AtomId, Atom>,
    residues: SlotMap<ResidueId, Residue>,
    chains: SlotMap<ChainId, Chain>,
    bonds: Vec<Bond>,
    residue_id_map: HashMap<(ChainId, isize), ResidueId>,
    chain_id_map: HashMap<char, ChainId>,
    /// Adjacency cache mirroring `bonds`, indexed by atom id.
    bond_adjacency: SecondaryMap<AtomId, Vec<AtomId>>,
}

impl MolecularSystem {
    /// Creates a new, empty system.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id)
    }

    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chains.iter()
    }

    /// All bonds currently registered, in insertion order.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Finds a chain by its one-character identifier.
    pub fn find_chain_by_id(&self, id: char) -> Option<ChainId> {
        self.chain_id_map.get(&id).copied()
    }

    /// Finds a residue by chain and sequence number.
    pub fn find_residue_by_number(
        &self,
        chain_id: ChainId,
        residue_number: isize,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, residue_number))
            .copied()
    }

    /// Finds an atom by the full human-facing address: chain, residue sequence
    /// number, atom name.
    pub fn find_atom(
        &self,
        chain_id: ChainId,
        residue_number: isize,
        atom_name: &str,
    ) -> Option<AtomId> {
        let residue_id = self.find_residue_by_number(chain_id, residue_number)?;
        self.residues
            .get(residue_id)?
            .get_atom_id_by_name(atom_name)
    }

    /// Adds a new chain, or returns the existing one with the same identifier.
    pub fn add_chain(&mut self, id: char, name: &str, chain_type: ChainType) -> ChainId {
        *self.chain_id_map.entry(id).or_insert_with(|| {
            let chain = Chain::new(id, name, chain_type);
            self.chains.insert(chain)
        })
    }

    /// Adds a new residue to a chain, or returns the existing one with the same
    /// sequence number. Returns `None` if the chain does not exist.
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        residue_number: isize,
        name: &str,
        residue_type: Option<ResidueType>,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, residue_number);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue = Residue::new(residue_number, name, residue_type, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Inserts an atom into a residue and initializes its adjacency entry.
    ///
    /// Returns `None` if the residue does not exist or already has an atom with
    /// the same name (names are unique within a residue).
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, atom: Atom) -> Option<AtomId> {
        if !self.residues.contains_key(residue_id) {
            return None;
        }
        let name = atom.name.clone();
        if self.residues[residue_id].get_atom_id_by_name(&name).is_some() {
            return None;
        }

        let atom_id = self.atoms.insert(atom);
        self.bond_adjacency.insert(atom_id, Vec::new());
        self.residues[residue_id].add_atom(&name, atom_id);

        Some(atom_id)
    }

    /// Registers a covalent bond between two atoms.
    ///
    /// Idempotent: adding an already-registered unordered pair succeeds without
    /// creating a duplicate edge. Returns `None` only if either atom id is
    /// stale. Strict duplicate detection, where an operation needs it, goes
    /// through [`has_bond`](Self::has_bond) first.
    pub fn add_bond(&mut self, atom1_id: AtomId, atom2_id: AtomId, order: BondOrder) -> Option<()> {
        if !self.atoms.contains_key(atom1_id) || !self.atoms.contains_key(atom2_id) {
            return None;
        }

        if let Some(neighbors) = self.bond_adjacency.get(atom1_id) {
            if neighbors.contains(&atom2_id) {
                return Some(());
            }
        }

        self.bonds.push(Bond::new(atom1_id, atom2_id, order));
        self.bond_adjacency[atom1_id].push(atom2_id);
        self.bond_adjacency[atom2_id].push(atom1_id);
        Some(())
    }

    /// Removes the bond joining the given unordered pair, reporting whether an
    /// edge was actually removed.
    pub fn remove_bond(&mut self, atom1_id: AtomId, atom2_id: AtomId) -> bool {
        let before = self.bonds.len();
        self.bonds.retain(|bond| !bond.connects(atom1_id, atom2_id));
        if self.bonds.len() == before {
            return false;
        }

        if let Some(adjacency) = self.bond_adjacency.get_mut(atom1_id) {
            adjacency.retain(|&id| id != atom2_id);
        }
        if let Some(adjacency) = self.bond_adjacency.get_mut(atom2_id) {
            adjacency.retain(|&id| id != atom1_id);
        }
        true
    }

    /// Returns `true` if a bond joins the given unordered pair.
    pub fn has_bond(&self, atom1_id: AtomId, atom2_id: AtomId) -> bool {
        self.bond_adjacency
            .get(atom1_id)
            .is_some_and(|neighbors| neighbors.contains(&atom2_id))
    }

    /// Removes an atom and everything referencing it.
    ///
    /// The atom is detached from its parent residue, every bond with the atom
    /// as an endpoint is deleted from the registry, and the adjacency cache is
    /// pruned. Returns the removed atom, or `None` if the id was stale.
    pub fn remove_atom(&mut self, atom_id: AtomId) -> Option<Atom> {
        let atom = self.atoms.remove(atom_id)?;

        if let Some(residue) = self.residues.get_mut(atom.residue_id) {
            residue.remove_atom(&atom.name, atom_id);
        }

        self.bonds.retain(|bond| !bond.contains(atom_id));

        let neighbors = self.bond_adjacency.remove(atom_id).unwrap_or_default();
        for neighbor_id in neighbors {
            if let Some(adjacency) = self.bond_adjacency.get_mut(neighbor_id) {
                adjacency.retain(|&id| id != atom_id);
            }
        }

        Some(atom)
    }

    /// Removes a residue together with all its atoms and their bonds.
    pub fn remove_residue(&mut self, residue_id: ResidueId) -> Option<Residue> {
        let atom_ids = self.residues.get(residue_id)?.atoms().to_vec();
        for atom_id in atom_ids {
            self.remove_atom(atom_id);
        }

        let residue = self.residues.remove(residue_id)?;
        if let Some(chain) = self.chains.get_mut(residue.chain_id) {
            chain.residues.retain(|&id| id != residue_id);
        }
        self.residue_id_map
            .remove(&(residue.chain_id, residue.residue_number));

        Some(residue)
    }

    /// The atoms directly bonded to `atom_id`, from the adjacency cache.
    pub fn get_bonded_neighbors(&self, atom_id: AtomId) -> Option<&[AtomId]> {
        self.bond_adjacency.get(atom_id).map(|v| v.as_slice())
    }
}
