//! Immutable grid model: slot scanning and overlap derivation
//!
//! The grid is pure derivation from a static occupancy structure. It owns
//! no solving state and is shared read-only by every solving step.

use ndarray::Array2;
use std::collections::HashMap;

use crate::configuration::MIN_SLOT_LENGTH;
use crate::spatial::slot::{Direction, Slot};

/// Character positions at which two crossing slots must agree
///
/// `first` indexes into the word of the slot the overlap was queried for,
/// `second` into its neighbor's word. Lookup is symmetric: querying the
/// reversed pair yields the transposed indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlap {
    /// Character position within the first slot's word
    pub first: usize,
    /// Character position within the second slot's word
    pub second: usize,
}

/// Static description of slot geometry and pairwise overlaps
///
/// Built once from a boolean occupancy structure (true = fillable) and
/// never mutated thereafter. Slots are addressed by dense ids in scan
/// order: all across slots first, then all down slots.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2<bool>,
    slots: Vec<Slot>,
    overlaps: HashMap<(usize, usize), Overlap>,
    neighbors: Vec<Vec<usize>>,
}

impl Grid {
    /// Derive slots, overlaps, and neighbor lists from an occupancy structure
    pub fn new(cells: Array2<bool>) -> Self {
        let slots = scan_slots(&cells);
        let (overlaps, neighbors) = derive_overlaps(&slots);

        Self {
            cells,
            slots,
            overlaps,
            neighbors,
        }
    }

    /// Number of rows in the occupancy structure
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the occupancy structure
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Whether the cell at (row, col) accepts a letter
    ///
    /// Out-of-bounds coordinates read as blocked.
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        self.cells.get([row, col]).copied().unwrap_or(false)
    }

    /// All slots in id order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The slot with the given id, if it exists
    pub fn slot(&self, id: usize) -> Option<Slot> {
        self.slots.get(id).copied()
    }

    /// Number of slots in the grid
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Ids of every slot sharing a defined overlap with `slot`
    pub fn neighbors(&self, slot: usize) -> &[usize] {
        self.neighbors.get(slot).map_or(&[], Vec::as_slice)
    }

    /// Number of slots crossing `slot`
    pub fn degree(&self, slot: usize) -> usize {
        self.neighbors(slot).len()
    }

    /// The matching character positions of two slots, or `None` if they
    /// do not cross
    pub fn overlap(&self, a: usize, b: usize) -> Option<Overlap> {
        self.overlaps.get(&(a, b)).copied()
    }
}

/// Scan maximal runs of fillable cells in both directions
///
/// A run becomes a slot only when it spans at least `MIN_SLOT_LENGTH`
/// cells; isolated fillable cells belong to no slot.
fn scan_slots(cells: &Array2<bool>) -> Vec<Slot> {
    let rows = cells.nrows();
    let cols = cells.ncols();
    let mut slots = Vec::new();

    for row in 0..rows {
        let mut run_start = None;
        for col in 0..=cols {
            let fillable = cells.get([row, col]).copied().unwrap_or(false);
            match (run_start, fillable) {
                (None, true) => run_start = Some(col),
                (Some(start), false) => {
                    if col - start >= MIN_SLOT_LENGTH {
                        slots.push(Slot {
                            row,
                            col: start,
                            direction: Direction::Across,
                            length: col - start,
                        });
                    }
                    run_start = None;
                }
                _ => {}
            }
        }
    }

    for col in 0..cols {
        let mut run_start = None;
        for row in 0..=rows {
            let fillable = cells.get([row, col]).copied().unwrap_or(false);
            match (run_start, fillable) {
                (None, true) => run_start = Some(row),
                (Some(start), false) => {
                    if row - start >= MIN_SLOT_LENGTH {
                        slots.push(Slot {
                            row: start,
                            col,
                            direction: Direction::Down,
                            length: row - start,
                        });
                    }
                    run_start = None;
                }
                _ => {}
            }
        }
    }

    slots
}

/// Compute both orderings of every crossing pair plus per-slot neighbor lists
///
/// Only perpendicular slots can share a cell, and any cell is covered by at
/// most one slot per direction, so each pair crosses at most once.
fn derive_overlaps(slots: &[Slot]) -> (HashMap<(usize, usize), Overlap>, Vec<Vec<usize>>) {
    let mut cover: HashMap<[usize; 2], (usize, usize)> = HashMap::new();
    for (id, slot) in slots.iter().enumerate() {
        if slot.direction == Direction::Down {
            for offset in 0..slot.length {
                let _ = cover.insert(slot.cell(offset), (id, offset));
            }
        }
    }

    let mut overlaps = HashMap::new();
    let mut neighbors = vec![Vec::new(); slots.len()];

    for (id, slot) in slots.iter().enumerate() {
        if slot.direction != Direction::Across {
            continue;
        }
        for offset in 0..slot.length {
            let Some(&(down_id, down_offset)) = cover.get(&slot.cell(offset)) else {
                continue;
            };
            let _ = overlaps.insert(
                (id, down_id),
                Overlap {
                    first: offset,
                    second: down_offset,
                },
            );
            let _ = overlaps.insert(
                (down_id, id),
                Overlap {
                    first: down_offset,
                    second: offset,
                },
            );
            if let Some(list) = neighbors.get_mut(id) {
                list.push(down_id);
            }
            if let Some(list) = neighbors.get_mut(down_id) {
                list.push(id);
            }
        }
    }

    for list in &mut neighbors {
        list.sort_unstable();
    }

    (overlaps, neighbors)
}
