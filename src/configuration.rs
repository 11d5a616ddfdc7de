//! Algorithm constants and runtime configuration defaults

/// Minimum run of fillable cells that forms a slot
pub const MIN_SLOT_LENGTH: usize = 2;

/// Fixed seed for reproducible heuristic tie-breaking
pub const DEFAULT_TIE_BREAK_SEED: u64 = 42;
