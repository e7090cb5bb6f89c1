use crate::core::models::ids::ResidueId;
use crate::core::models::system::MolecularSystem;
use crate::engine::condensation::{self, CondensationOutcome};
use crate::engine::error::EngineError;
use crate::engine::notify::{ChangeReporter, StructureChange};
use tracing::{info, instrument};

/// Resolved addressing plus what the engine did.
#[derive(Debug, Clone)]
pub struct CondensationSummary {
    pub chain_id: char,
    pub amino_residue: ResidueId,
    pub carboxyl_residue: ResidueId,
    pub outcome: CondensationOutcome,
}

/// Forms a peptide bond between two residues addressed by chain letter and
/// residue number.
///
/// The residue at `amino_residue_number` keeps its backbone and loses the H1
/// amide hydrogen; the residue at `carboxyl_residue_number` loses its OXT/HXT
/// terminus and is rigidly re-placed against the new bond. Change events fire
/// only after the engine has committed, in mutation order: removals, the new
/// bond, then the position rewrite.
#[instrument(
    skip_all,
    name = "condense_workflow",
    fields(chain = %chain_id, amino = amino_residue_number, carboxyl = carboxyl_residue_number)
)]
pub fn run(
    system: &mut MolecularSystem,
    chain_id: char,
    amino_residue_number: isize,
    carboxyl_residue_number: isize,
    reporter: &ChangeReporter,
) -> Result<CondensationSummary, EngineError> {
    let chain_key = system
        .find_chain_by_id(chain_id)
        .ok_or(EngineError::ChainNotFound { chain_id })?;
    let amino_residue = system
        .find_residue_by_number(chain_key, amino_residue_number)
        .ok_or(EngineError::ResidueNotFound {
            chain_id,
            residue_number: amino_residue_number,
        })?;
    let carboxyl_residue = system
        .find_residue_by_number(chain_key, carboxyl_residue_number)
        .ok_or(EngineError::ResidueNotFound {
            chain_id,
            residue_number: carboxyl_residue_number,
        })?;

    let outcome = condensation::form_peptide_bond(system, amino_residue, carboxyl_residue)?;

    reporter.report(StructureChange::AtomsRemoved {
        atom_ids: outcome.removed_atoms.to_vec(),
    });
    let (carbonyl_c, amide_n) = outcome.formed_bond;
    reporter.report(StructureChange::BondFormed {
        atom1_id: carbonyl_c,
        atom2_id: amide_n,
    });
    reporter.report(StructureChange::PositionsUpdated {
        residue_id: carboxyl_residue,
    });

    info!(
        chain = %chain_id,
        amino = amino_residue_number,
        carboxyl = carboxyl_residue_number,
        dihedral = outcome.dihedral_degrees,
        "peptide bond formed"
    );

    Ok(CondensationSummary {
        chain_id,
        amino_residue,
        carboxyl_residue,
        outcome,
    })
}
