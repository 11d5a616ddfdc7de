//! Error types for caller contract violations
//!
//! Search outcomes are never errors: an emptied domain or an exhausted
//! branch folds into ordinary backtracking, and unsatisfiability surfaces
//! as `None` from the solver. The only loud failure is a caller pairing a
//! word with a slot of a different length during letter projection.

use std::fmt;

use crate::spatial::Slot;

/// Contract violations detected while projecting an assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A word was assigned to a slot whose length it cannot fill
    LengthMismatch {
        /// The slot being projected
        slot: Slot,
        /// The offending word
        word: String,
        /// Character count of the offending word
        word_length: usize,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                slot,
                word,
                word_length,
            } => {
                write!(
                    f,
                    "word '{word}' of length {word_length} cannot fill the {} slot at ({}, {}) of length {}",
                    slot.direction, slot.row, slot.col, slot.length
                )
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Convenience type alias for fallible operations in this crate
pub type Result<T> = std::result::Result<T, SolverError>;
