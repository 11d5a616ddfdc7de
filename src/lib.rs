//! Crossword grid filling as constraint satisfaction
//!
//! The crate models a crossword grid as a CSP: each maximal run of fillable
//! cells is a slot (variable), the vocabulary supplies candidate words
//! (values), and crossing slots constrain each other at their shared
//! character position. Solving enforces node and arc consistency (AC-3),
//! then runs heuristic backtracking search with minimum-remaining-values
//! variable selection and least-constraining-value ordering.

#![forbid(unsafe_code)]

/// Core solving algorithm: domains, consistency enforcement, and search
pub mod algorithm;
/// Word-to-slot assignments and letter projection onto grid coordinates
pub mod assignment;
/// Algorithm constants and configuration defaults
pub mod configuration;
/// Error types for caller contract violations
pub mod error;
/// Slot geometry, overlap derivation, and the immutable grid model
pub mod spatial;
/// Candidate word storage with dense indices
pub mod vocabulary;

pub use algorithm::executor::{Solver, SolverConfig, solve};
pub use error::{Result, SolverError};
