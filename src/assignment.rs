//! Partial slot-to-word assignments and letter projection
//!
//! An assignment grows by one entry per search branch and shrinks by one on
//! backtrack. External renderers read it through `letter_grid`, which
//! projects assigned words onto grid coordinates without rendering anything
//! itself.

use ndarray::Array2;
use std::collections::HashSet;

use crate::error::{Result, SolverError};
use crate::spatial::Grid;
use crate::vocabulary::Vocabulary;

/// A partial mapping from slot ids to word ids
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    entries: Vec<Option<usize>>,
    assigned: usize,
}

impl Assignment {
    /// Create an empty assignment over `slot_count` slots
    pub fn new(slot_count: usize) -> Self {
        Self {
            entries: vec![None; slot_count],
            assigned: 0,
        }
    }

    /// The word assigned to a slot, if any
    pub fn get(&self, slot: usize) -> Option<usize> {
        self.entries.get(slot).copied().flatten()
    }

    /// Whether a slot has an assigned word
    pub fn contains(&self, slot: usize) -> bool {
        self.get(slot).is_some()
    }

    /// Assign a word to a slot, replacing any previous entry
    pub fn insert(&mut self, slot: usize, word: usize) {
        if let Some(entry) = self.entries.get_mut(slot) {
            if entry.is_none() {
                self.assigned += 1;
            }
            *entry = Some(word);
        }
    }

    /// Clear a slot's entry
    pub fn remove(&mut self, slot: usize) {
        if let Some(entry) = self.entries.get_mut(slot) {
            if entry.is_some() {
                self.assigned -= 1;
            }
            *entry = None;
        }
    }

    /// Number of assigned slots
    pub fn assigned_count(&self) -> usize {
        self.assigned
    }

    /// Whether every slot has an assigned word
    pub fn is_complete(&self) -> bool {
        self.assigned == self.entries.len()
    }

    /// All (slot id, word id) pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| entry.map(|word| (slot, word)))
    }

    /// Whether the assignment satisfies every constraint it touches
    ///
    /// True when each assigned word's length equals its slot's length, all
    /// assigned words are mutually distinct, and every pair of assigned
    /// crossing slots agrees at the shared character position. Unassigned
    /// slots impose nothing, so a partial assignment can be consistent.
    pub fn is_consistent(&self, grid: &Grid, vocabulary: &Vocabulary) -> bool {
        let mut used = HashSet::new();

        for (slot_id, word) in self.iter() {
            let Some(slot) = grid.slot(slot_id) else {
                return false;
            };
            if vocabulary.length(word) != slot.length {
                return false;
            }
            if !used.insert(word) {
                return false;
            }
            for &neighbor in grid.neighbors(slot_id) {
                let Some(partner) = self.get(neighbor) else {
                    continue;
                };
                let Some(overlap) = grid.overlap(slot_id, neighbor) else {
                    continue;
                };
                if vocabulary.letter_at(word, overlap.first)
                    != vocabulary.letter_at(partner, overlap.second)
                {
                    return false;
                }
            }
        }
        true
    }

    /// Project assigned words onto grid coordinates
    ///
    /// Character `k` of a slot's word lands on `slot.cell(k)`; cells not
    /// covered by any assigned slot stay `None`.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::LengthMismatch` when an assigned word's
    /// character count differs from its slot's length. That pairing breaks
    /// the caller's contract and is never silently tolerated.
    pub fn letter_grid(
        &self,
        grid: &Grid,
        vocabulary: &Vocabulary,
    ) -> Result<Array2<Option<char>>> {
        let mut letters = Array2::from_elem((grid.rows(), grid.cols()), None);

        for (slot_id, word) in self.iter() {
            let Some(slot) = grid.slot(slot_id) else {
                continue;
            };
            if vocabulary.length(word) != slot.length {
                return Err(SolverError::LengthMismatch {
                    slot,
                    word: vocabulary.word(word).to_owned(),
                    word_length: vocabulary.length(word),
                });
            }
            for (offset, &letter) in vocabulary.letters(word).iter().enumerate() {
                if let Some(cell) = letters.get_mut(slot.cell(offset)) {
                    *cell = Some(letter);
                }
            }
        }

        Ok(letters)
    }
}

#[cfg(test)]
mod tests {
    use super::Assignment;
    use crate::error::SolverError;
    use crate::spatial::Grid;
    use crate::vocabulary::Vocabulary;
    use ndarray::Array2;

    fn plus_grid() -> Grid {
        let cells = Array2::from_shape_vec(
            (3, 3),
            vec![
                false, true, false, //
                true, true, true, //
                false, true, false,
            ],
        )
        .unwrap();
        Grid::new(cells)
    }

    #[test]
    fn grows_and_shrinks_one_entry_at_a_time() {
        let mut assignment = Assignment::new(2);
        assert!(!assignment.is_complete());

        assignment.insert(0, 3);
        assert_eq!(assignment.assigned_count(), 1);
        assert!(assignment.contains(0));

        assignment.insert(1, 4);
        assert!(assignment.is_complete());

        assignment.remove(0);
        assert_eq!(assignment.assigned_count(), 1);
        assert_eq!(assignment.get(0), None);
        assert_eq!(assignment.get(1), Some(4));
    }

    #[test]
    fn repeated_words_are_inconsistent() {
        let grid = plus_grid();
        let vocabulary = Vocabulary::new(["MAM"]);
        let mut assignment = Assignment::new(grid.slot_count());
        assignment.insert(0, 0);
        assignment.insert(1, 0);

        assert!(!assignment.is_consistent(&grid, &vocabulary));
    }

    #[test]
    fn crossing_disagreement_is_inconsistent() {
        let grid = plus_grid();
        let vocabulary = Vocabulary::new(["CAT", "DOG"]);
        let mut assignment = Assignment::new(grid.slot_count());
        assignment.insert(0, 0);
        assignment.insert(1, 1);

        assert!(!assignment.is_consistent(&grid, &vocabulary));
    }

    #[test]
    fn agreeing_partial_assignment_is_consistent() {
        let grid = plus_grid();
        let vocabulary = Vocabulary::new(["CAT", "MAD"]);
        let mut assignment = Assignment::new(grid.slot_count());
        assignment.insert(0, 0);
        assert!(assignment.is_consistent(&grid, &vocabulary));

        assignment.insert(1, 1);
        assert!(assignment.is_consistent(&grid, &vocabulary));
    }

    #[test]
    fn letters_project_onto_grid_cells() {
        let grid = plus_grid();
        let vocabulary = Vocabulary::new(["CAT", "MAD"]);
        let mut assignment = Assignment::new(grid.slot_count());
        assignment.insert(0, 0);
        assignment.insert(1, 1);

        let letters = assignment.letter_grid(&grid, &vocabulary).unwrap();
        assert_eq!(letters.get([1, 0]).copied().flatten(), Some('C'));
        assert_eq!(letters.get([1, 1]).copied().flatten(), Some('A'));
        assert_eq!(letters.get([1, 2]).copied().flatten(), Some('T'));
        assert_eq!(letters.get([0, 1]).copied().flatten(), Some('M'));
        assert_eq!(letters.get([2, 1]).copied().flatten(), Some('D'));
        assert_eq!(letters.get([0, 0]).copied().flatten(), None);
    }

    #[test]
    fn mismatched_length_fails_loudly() {
        let grid = plus_grid();
        let vocabulary = Vocabulary::new(["HOUSE"]);
        let mut assignment = Assignment::new(grid.slot_count());
        assignment.insert(0, 0);

        let err = assignment.letter_grid(&grid, &vocabulary).unwrap_err();
        assert!(matches!(err, SolverError::LengthMismatch { word_length: 5, .. }));
    }
}
