/// Fixed-size bitsets over dense vocabulary indices
pub mod bitset;
/// Per-slot candidate domains with snapshot and rollback
pub mod domains;
/// Backtracking search driver and public solve entry points
pub mod executor;
/// Node and arc consistency enforcement (AC-3)
pub mod propagation;
/// Variable and value ordering heuristics
pub mod selection;
