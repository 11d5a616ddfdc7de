use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;

use crate::algorithm::domains::DomainStore;
use crate::algorithm::propagation::{
    enforce_arc_consistency, enforce_arcs, enforce_node_consistency,
};
use crate::algorithm::selection::{order_domain_values, select_unassigned_slot};
use crate::assignment::Assignment;
use crate::configuration::DEFAULT_TIE_BREAK_SEED;
use crate::spatial::Grid;
use crate::vocabulary::Vocabulary;

/// Parameters controlling solver behavior
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Seed for the rng breaking final-tier variable-selection ties
    ///
    /// Any slot in a tied set is an acceptable choice; the seed only makes
    /// runs reproducible.
    pub tie_break_seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tie_break_seed: DEFAULT_TIE_BREAK_SEED,
        }
    }
}

/// Backtracking search driver owning the solve's working memory
///
/// The grid and vocabulary stay read-only for the life of the solve; the
/// domain store is created at construction, mutated by the one active
/// search path, and discarded when `solve` returns.
pub struct Solver<'a> {
    grid: &'a Grid,
    vocabulary: &'a Vocabulary,
    domains: DomainStore,
    rng: StdRng,
}

impl<'a> Solver<'a> {
    /// Create a solver with the default configuration
    pub fn new(grid: &'a Grid, vocabulary: &'a Vocabulary) -> Self {
        Self::with_config(grid, vocabulary, SolverConfig::default())
    }

    /// Create a solver with an explicit configuration
    pub fn with_config(grid: &'a Grid, vocabulary: &'a Vocabulary, config: SolverConfig) -> Self {
        Self {
            grid,
            vocabulary,
            domains: DomainStore::new(grid.slot_count(), vocabulary.len()),
            rng: StdRng::seed_from_u64(config.tie_break_seed),
        }
    }

    /// Run node consistency, global arc consistency, then backtracking
    ///
    /// Returns the completed assignment, or `None` when no assignment
    /// exists, including the case where initial propagation alone proves
    /// unsatisfiability without entering search.
    pub fn solve(mut self) -> Option<Assignment> {
        enforce_node_consistency(&mut self.domains, self.grid, self.vocabulary);
        if !enforce_arc_consistency(&mut self.domains, self.grid, self.vocabulary) {
            debug!("initial arc consistency proved unsatisfiability");
            return None;
        }

        let remaining: usize = (0..self.grid.slot_count())
            .map(|slot| self.domains.size(slot))
            .sum();
        debug!(
            "initial propagation kept {remaining} candidates across {} slots",
            self.grid.slot_count()
        );

        let mut assignment = Assignment::new(self.grid.slot_count());
        self.backtrack(&mut assignment).then_some(assignment)
    }

    /// Depth-first extension of the partial assignment
    ///
    /// The snapshot is taken before the tentative single-word restriction,
    /// so a failed branch restores the store bit-for-bit to its pre-branch
    /// state before the next candidate is tried.
    fn backtrack(&mut self, assignment: &mut Assignment) -> bool {
        if assignment.is_complete() {
            return true;
        }
        let Some(slot) =
            select_unassigned_slot(&self.domains, self.grid, assignment, &mut self.rng)
        else {
            return false;
        };

        for word in
            order_domain_values(&self.domains, self.grid, self.vocabulary, assignment, slot)
        {
            if !self.extension_consistent(assignment, slot, word) {
                continue;
            }
            trace!("assign slot {slot} <- '{}'", self.vocabulary.word(word));
            assignment.insert(slot, word);
            let snapshot = self.domains.snapshot();
            self.domains.restrict_to(slot, word);

            // Only arcs pointing into the assigned slot's neighborhood can
            // have lost support, so re-propagation starts from those alone
            let arcs: VecDeque<(usize, usize)> = self
                .grid
                .neighbors(slot)
                .iter()
                .map(|&neighbor| (neighbor, slot))
                .collect();

            if enforce_arcs(&mut self.domains, self.grid, self.vocabulary, arcs)
                && self.backtrack(assignment)
            {
                return true;
            }

            trace!("retract slot {slot}");
            self.domains.restore(snapshot);
            assignment.remove(slot);
        }
        false
    }

    /// Whether extending the assignment with (slot, word) stays consistent
    ///
    /// Checks the new entry against the partial assignment: length match,
    /// distinctness, and agreement with every assigned crossing slot. The
    /// rest of the assignment was consistent before, so nothing else needs
    /// rechecking.
    fn extension_consistent(&self, assignment: &Assignment, slot_id: usize, word: usize) -> bool {
        let Some(slot) = self.grid.slot(slot_id) else {
            return false;
        };
        if self.vocabulary.length(word) != slot.length {
            return false;
        }
        if assignment.iter().any(|(_, assigned)| assigned == word) {
            return false;
        }
        for &neighbor in self.grid.neighbors(slot_id) {
            let Some(partner) = assignment.get(neighbor) else {
                continue;
            };
            let Some(overlap) = self.grid.overlap(slot_id, neighbor) else {
                continue;
            };
            if self.vocabulary.letter_at(word, overlap.first)
                != self.vocabulary.letter_at(partner, overlap.second)
            {
                return false;
            }
        }
        true
    }
}

/// Solve a grid against a vocabulary with the default configuration
///
/// Convenience wrapper over [`Solver`]; one word per slot, every unary and
/// binary constraint satisfied, or `None` when the puzzle is unsatisfiable.
pub fn solve(grid: &Grid, vocabulary: &Vocabulary) -> Option<Assignment> {
    Solver::new(grid, vocabulary).solve()
}
