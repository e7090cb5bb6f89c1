//! # Core Module
//!
//! The foundation layer of the library: data structures and pure math with no
//! editing-operation state of their own.
//!
//! - **Structural graph** ([`models`]) - Atoms, residues, chains, bonds, and the
//!   `MolecularSystem` that owns them, plus the selection facade rendering
//!   consumers read from.
//! - **Structural knowledge** ([`topology`]) - TOML-defined residue templates
//!   describing the atoms and intra-residue bonds of standard residues.
//! - **Utilities** ([`utils`]) - The rigid-transform solver and static
//!   atom-name classification tables.

pub mod models;
pub mod topology;
pub mod utils;
