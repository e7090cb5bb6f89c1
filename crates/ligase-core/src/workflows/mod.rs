//! # Workflows Module
//!
//! User-facing entry points. A workflow resolves human-level addressing
//! (chain letters, residue numbers) to graph ids, drives the engine, and
//! reports structural changes to any subscribed consumer.

pub mod condense;
