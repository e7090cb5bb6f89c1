//! # Engine Module
//!
//! The stateful editing layer: the peptide-bond-formation operation, its error
//! taxonomy, and the change-notification interface downstream consumers use to
//! learn that the structural graph was mutated.
//!
//! The engine enforces strict preconditions and is transactional in effect:
//! every lookup and every piece of geometry (including degeneracy checks) is
//! computed before the first mutation, so an error always leaves the system
//! exactly as it was.

pub mod condensation;
pub mod error;
pub mod notify;
