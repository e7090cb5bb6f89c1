//! # Ligase Core Library
//!
//! A library for covalent editing of biomolecular structures, centered on the
//! dehydration-condensation reaction that joins two amino-acid residues with a
//! planar, trans-like peptide bond.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the stateless structural graph
//!   (`MolecularSystem` with atoms, residues, chains, and a cascading bond registry),
//!   the pure rigid-transform geometry used by the placement stages, and the residue
//!   template registry used to instantiate standard residues.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer implements the
//!   peptide-bond-formation operation itself: strict precondition validation,
//!   the two-stage rigid-body placement of the downstream residue, and the
//!   change-notification interface downstream consumers subscribe to.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It
//!   resolves human-friendly addresses (chain letter, residue number) to graph ids,
//!   drives the engine, and reports what changed.

pub mod core;
pub mod engine;
pub mod workflows;
