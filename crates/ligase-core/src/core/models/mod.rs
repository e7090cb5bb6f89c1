//! # Structural Graph Models
//!
//! The fundamental data structures representing a molecular structure: atoms with
//! mutable 3D coordinates, residues mapping unique atom names to atoms, chains
//! ordering residues by sequence number, and the covalent bond registry.
//!
//! All entities are owned by a [`system::MolecularSystem`] and addressed through
//! stable slotmap ids ([`ids`]), so references survive unrelated insertions and
//! removals. Editing operations mutate the graph in place; the system keeps the
//! bond registry consistent by cascading bond deletion on atom removal.
//!
//! - [`atom`] - Individual atom identity and coordinates
//! - [`residue`] - Named-atom container with a sequence number
//! - [`chain`] - Ordered residue container with a display name
//! - [`system`] - The owning graph with lookup maps and edit operations
//! - [`topology`] - Covalent bonds and bond orders
//! - [`selection`] - Ordered atom/bond result sets for rendering consumers
//! - [`builder`] - Incremental construction of consistent systems
//! - [`ids`] - Stable identifier types

pub mod atom;
pub mod builder;
pub mod chain;
pub mod ids;
pub mod residue;
pub mod selection;
pub mod system;
pub mod topology;
