use super::error::EngineError;
use crate::core::models::ids::{AtomId, ResidueId};
use crate::core::models::residue::Residue;
use crate::core::models::system::MolecularSystem;
use crate::core::models::topology::BondOrder;
use crate::core::utils::geometry;
use nalgebra::Point3;
use tracing::{debug, instrument};

/// Target amide bond length as a multiple of the pre-reaction N-H1 distance.
const AMIDE_BOND_SCALE: f64 = 1.35;
/// Step of the dihedral alignment scan.
const DIHEDRAL_STEP_DEGREES: f64 = 30.0;
/// Width of the half-circle scanned per invocation.
const DIHEDRAL_WINDOW_DEGREES: f64 = 180.0;

const AMIDE_HYDROGEN: &str = "H1";
const AMIDE_PLANE_HYDROGEN: &str = "H2";
const AMIDE_NITROGEN: &str = "N";
/// Chain-axis anchor on the amino side. Upstream data anchors the axis on the
/// atom literally named "C", not "CA"; preserved as-is pending confirmation of
/// the chemical intent.
const AXIS_ANCHOR: &str = "C";
const CARBONYL_CARBON: &str = "C";
const CARBONYL_OXYGEN: &str = "O";
const TERMINAL_OXYGEN: &str = "OXT";
const TERMINAL_HYDROGEN: &str = "HXT";

/// What a successful condensation did, for observability and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CondensationOutcome {
    /// The three atoms removed as water: H1, OXT, HXT (now-stale ids).
    pub removed_atoms: [AtomId; 3],
    /// The new covalent bond, as (carbonyl carbon, amide nitrogen).
    pub formed_bond: (AtomId, AtomId),
    /// The winning dihedral angle of the axial alignment scan, in degrees.
    pub dihedral_degrees: f64,
}

/// Joins two residues of one chain with a peptide bond.
///
/// `amino_residue` supplies the amino group (loses H1), `carboxyl_residue`
/// supplies the free carboxyl terminus (loses OXT and HXT). After the
/// dehydration and the C-N bond edit, the whole carboxyl residue is rigidly
/// re-placed in two stages: a planarization transform that puts the new amide
/// frame into the amino nitrogen's local plane at 1.35x the old N-H1 distance,
/// and a 30-degree-stepped dihedral scan about the plane normal that maximizes
/// the summed projection of the residue onto the chain axis. The scanned
/// half-circle alternates with the parity of the chain's residue count, so
/// repeated chain extension shows no systematic bias.
///
/// Validation is strictly first: every lookup and every geometric quantity
/// (including degeneracy checks) is computed before the first mutation, so an
/// `Err` return implies an untouched system.
#[instrument(skip_all, name = "form_peptide_bond")]
pub fn form_peptide_bond(
    system: &mut MolecularSystem,
    amino_residue: ResidueId,
    carboxyl_residue: ResidueId,
) -> Result<CondensationOutcome, EngineError> {
    // --- Phase 1: Validation and harvesting (no mutation) ---
    if amino_residue == carboxyl_residue {
        return Err(EngineError::Internal(
            "amino and carboxyl residues must be distinct".to_string(),
        ));
    }
    let amino = system
        .residue(amino_residue)
        .ok_or_else(|| EngineError::Internal(format!("stale residue id {amino_residue:?}")))?;
    let carboxyl = system
        .residue(carboxyl_residue)
        .ok_or_else(|| EngineError::Internal(format!("stale residue id {carboxyl_residue:?}")))?;
    if amino.chain_id != carboxyl.chain_id {
        return Err(EngineError::Internal(
            "both residues must belong to the same chain".to_string(),
        ));
    }
    let chain_residue_count = system
        .chain(amino.chain_id)
        .ok_or_else(|| EngineError::Internal("residue not attached to a live chain".to_string()))?
        .residue_count();

    let harvest = |residue: &Residue, name: &str| -> Option<(AtomId, Point3<f64>)> {
        let atom_id = residue.get_atom_id_by_name(name)?;
        system.atom(atom_id).map(|atom| (atom_id, atom.position))
    };
    let backbone = |residue_id: ResidueId, residue: &Residue, name: &'static str| {
        harvest(residue, name).ok_or(EngineError::MalformedResidue {
            residue_id,
            atom_name: name,
        })
    };
    let terminus = |residue_id: ResidueId, residue: &Residue, name: &'static str| {
        harvest(residue, name).ok_or(EngineError::InvalidTerminus {
            residue_id,
            atom_name: name,
        })
    };

    let (h1_id, h1_pos) = backbone(amino_residue, amino, AMIDE_HYDROGEN)?;
    let (_, h2_pos) = backbone(amino_residue, amino, AMIDE_PLANE_HYDROGEN)?;
    let (n_id, n_pos) = backbone(amino_residue, amino, AMIDE_NITROGEN)?;
    let (_, axis_anchor_pos) = backbone(amino_residue, amino, AXIS_ANCHOR)?;

    let (c_id, c_pos) = backbone(carboxyl_residue, carboxyl, CARBONYL_CARBON)?;
    let (_, o_pos) = backbone(carboxyl_residue, carboxyl, CARBONYL_OXYGEN)?;
    let (oxt_id, _) = terminus(carboxyl_residue, carboxyl, TERMINAL_OXYGEN)?;
    let (hxt_id, _) = terminus(carboxyl_residue, carboxyl, TERMINAL_HYDROGEN)?;

    if system.has_bond(c_id, n_id) {
        return Err(EngineError::DuplicateBond {
            residue_n: amino_residue,
            residue_c: carboxyl_residue,
        });
    }

    // --- Phase 2: Geometry (pure, still no mutation) ---
    // Where the carbonyl carbon must land: the old N-H1 direction extended to
    // 1.35x its length, a stand-in for the target N-C bond distance.
    let amide_target = geometry::scale_from(&n_pos, &h1_pos, AMIDE_BOND_SCALE);
    let offset = amide_target - c_pos;

    // The plane and tilt are defined against the carbonyl frame after the
    // translation, so the dependent reference points are shifted first.
    let pivot = c_pos + offset;
    let o_shifted = o_pos + offset;

    let normal = geometry::plane_normal(&(h2_pos - n_pos), &(pivot - n_pos), "peptide plane")?;
    let carbonyl = o_shifted - pivot;
    let tilt_degrees = 90.0 - geometry::angle_between_degrees(&normal, &carbonyl);
    let planarize =
        geometry::rotation_about(&normal.cross(&carbonyl), tilt_degrees, "planarization axis")?;
    let chain_axis = geometry::unit_direction(&(n_pos - axis_anchor_pos), "chain axis")?;

    // --- Phase 3: Commit ---
    // Dehydration: the bond registry cascade takes N-H1, C-OXT, and OXT-HXT
    // out together with the atoms.
    system.remove_atom(h1_id);
    system.remove_atom(oxt_id);
    system.remove_atom(hxt_id);
    system
        .add_bond(c_id, n_id, BondOrder::Single)
        .ok_or_else(|| {
            EngineError::Internal("carbonyl/amide atoms vanished during commit".to_string())
        })?;

    let moving_atoms: Vec<AtomId> = system
        .residue(carboxyl_residue)
        .map(|residue| residue.atoms().to_vec())
        .unwrap_or_default();

    debug!(
        tilt_degrees,
        moving = moving_atoms.len(),
        "applying planarization transform"
    );
    for &atom_id in &moving_atoms {
        if let Some(atom) = system.atom_mut(atom_id) {
            let shifted = atom.position + offset;
            atom.position = geometry::rotate_about_pivot(&planarize, &pivot, &shifted);
        }
    }

    // --- Phase 4: Axial alignment scan ---
    // Six 30-degree candidates across one half-circle; which half alternates
    // with the chain's residue-count parity.
    let scan_start = DIHEDRAL_WINDOW_DEGREES * (chain_residue_count % 2) as f64;
    let mut best_angle = scan_start;
    let mut best_score = f64::NEG_INFINITY;

    let mut angle = scan_start;
    while angle < scan_start + DIHEDRAL_WINDOW_DEGREES {
        let trial = geometry::rotation_about_unit(&normal, angle);
        let mut score = 0.0;
        for &atom_id in &moving_atoms {
            if let Some(atom) = system.atom(atom_id) {
                let rotated = geometry::rotate_about_pivot(&trial, &pivot, &atom.position);
                score += geometry::axial_projection(&rotated, &axis_anchor_pos, &chain_axis);
            }
        }
        debug!(angle, score, "dihedral candidate");
        if score > best_score {
            best_score = score;
            best_angle = angle;
        }
        angle += DIHEDRAL_STEP_DEGREES;
    }

    let align = geometry::rotation_about_unit(&normal, best_angle);
    for &atom_id in &moving_atoms {
        if let Some(atom) = system.atom_mut(atom_id) {
            atom.position = geometry::rotate_about_pivot(&align, &pivot, &atom.position);
        }
    }

    debug!(best_angle, best_score, "axial alignment selected");
    Ok(CondensationOutcome {
        removed_atoms: [h1_id, oxt_id, hxt_id],
        formed_bond: (c_id, n_id),
        dihedral_degrees: best_angle,
    })
}
