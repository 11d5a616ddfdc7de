//! Spatial data structures for the crossword grid
//!
//! This module contains the static geometry of a puzzle:
//! - Slot identity and coordinate projection
//! - The immutable grid model with overlap derivation

/// Immutable grid model and overlap derivation
pub mod grid;
/// Slot identity and coordinate projection
pub mod slot;

pub use grid::{Grid, Overlap};
pub use slot::{Direction, Slot};
