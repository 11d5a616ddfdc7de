use log::debug;
use std::collections::{HashSet, VecDeque};

use crate::algorithm::domains::DomainStore;
use crate::spatial::Grid;
use crate::vocabulary::Vocabulary;

/// An ordered slot pair queued for revision
pub type Arc = (usize, usize);

/// Remove every candidate whose length differs from its slot's length
///
/// Unary constraint enforcement. Applied once before any arc consistency;
/// running it again removes nothing further.
pub fn enforce_node_consistency(domains: &mut DomainStore, grid: &Grid, vocabulary: &Vocabulary) {
    for (slot_id, slot) in grid.slots().iter().enumerate() {
        let mismatched: Vec<usize> = domains
            .get(slot_id)
            .iter()
            .filter(|&word| vocabulary.length(word) != slot.length)
            .collect();
        for word in mismatched {
            domains.remove(slot_id, word);
        }
    }
}

/// Make slot `x` arc consistent with slot `y`
///
/// Removes from domain(x) every word with no overlap-compatible partner in
/// domain(y). Returns whether any word was removed; a no-op returning false
/// when the slots do not cross.
pub fn revise(
    domains: &mut DomainStore,
    grid: &Grid,
    vocabulary: &Vocabulary,
    x: usize,
    y: usize,
) -> bool {
    let Some(overlap) = grid.overlap(x, y) else {
        return false;
    };

    // Letters domain(y) can still place at the crossing; a candidate for x
    // survives iff its own crossing letter appears here
    let supported: HashSet<char> = domains
        .get(y)
        .iter()
        .filter_map(|word| vocabulary.letter_at(word, overlap.second))
        .collect();

    let unsupported: Vec<usize> = domains
        .get(x)
        .iter()
        .filter(|&word| {
            vocabulary
                .letter_at(word, overlap.first)
                .is_none_or(|letter| !supported.contains(&letter))
        })
        .collect();

    let revised = !unsupported.is_empty();
    for word in unsupported {
        domains.remove(x, word);
    }
    revised
}

/// Enforce arc consistency starting from every arc in the grid
///
/// Seeds the worklist with both directions of every edge. Returns false as
/// soon as a domain empties, proving unsatisfiability before search.
pub fn enforce_arc_consistency(
    domains: &mut DomainStore,
    grid: &Grid,
    vocabulary: &Vocabulary,
) -> bool {
    let mut queue = VecDeque::new();
    for slot in 0..grid.slot_count() {
        for &neighbor in grid.neighbors(slot) {
            queue.push_back((slot, neighbor));
        }
    }
    enforce_arcs(domains, grid, vocabulary, queue)
}

/// Run the AC-3 worklist until it drains or a domain empties
///
/// Callers seed the queue themselves to re-propagate incrementally, e.g.
/// with only the arcs pointing into a freshly assigned slot's neighborhood.
/// When a revision shrinks domain(x), the arcs `(z, x)` for every neighbor
/// `z` other than the just-revised `y` re-enter the queue; a shrink in `x`
/// can only invalidate arcs pointing into `x`.
pub fn enforce_arcs(
    domains: &mut DomainStore,
    grid: &Grid,
    vocabulary: &Vocabulary,
    mut queue: VecDeque<Arc>,
) -> bool {
    while let Some((x, y)) = queue.pop_front() {
        if revise(domains, grid, vocabulary, x, y) {
            if domains.is_empty(x) {
                debug!("propagation emptied the domain of slot {x}");
                return false;
            }
            for &z in grid.neighbors(x) {
                if z != y {
                    queue.push_back((z, x));
                }
            }
        }
    }
    true
}
