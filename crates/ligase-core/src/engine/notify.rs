use crate::core::models::ids::{AtomId, ResidueId};

/// What an editing operation did to the structural graph.
///
/// Rendering-side consumers (mesh regeneration, pick buffers) subscribe to
/// these so they can re-derive geometry after the mutation commits. Events are
/// emitted after the fact; the graph is already consistent when a callback runs.
#[derive(Debug, Clone)]
pub enum StructureChange {
    /// Atoms were deleted, together with every bond referencing them.
    AtomsRemoved { atom_ids: Vec<AtomId> },
    /// A new covalent bond was registered.
    BondFormed { atom1_id: AtomId, atom2_id: AtomId },
    /// Every atom position of a residue was rewritten.
    PositionsUpdated { residue_id: ResidueId },
}

pub type ChangeCallback<'a> = Box<dyn Fn(StructureChange) + Send + Sync + 'a>;

/// Optional callback holder handed into workflows.
///
/// The default reporter is silent, so callers that do not render pay nothing.
#[derive(Default)]
pub struct ChangeReporter<'a> {
    callback: Option<ChangeCallback<'a>>,
}

impl<'a> ChangeReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ChangeCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: StructureChange) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
