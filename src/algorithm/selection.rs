use rand::Rng;
use rand::rngs::StdRng;

use crate::algorithm::domains::DomainStore;
use crate::assignment::Assignment;
use crate::spatial::Grid;
use crate::vocabulary::Vocabulary;

/// Choose the next slot to assign
///
/// Minimum-remaining-values first, highest degree among ties, and a seeded
/// random pick among slots still tied after both filters. Any slot in the
/// final tied set is an acceptable choice; the rng only makes runs
/// reproducible. Returns `None` when every slot is assigned.
pub fn select_unassigned_slot(
    domains: &DomainStore,
    grid: &Grid,
    assignment: &Assignment,
    rng: &mut StdRng,
) -> Option<usize> {
    let unassigned: Vec<usize> =
        (0..grid.slot_count()).filter(|&slot| !assignment.contains(slot)).collect();

    let smallest = unassigned.iter().map(|&slot| domains.size(slot)).min()?;
    let fewest_values: Vec<usize> = unassigned
        .into_iter()
        .filter(|&slot| domains.size(slot) == smallest)
        .collect();

    let highest = fewest_values.iter().map(|&slot| grid.degree(slot)).max()?;
    let tied: Vec<usize> = fewest_values
        .into_iter()
        .filter(|&slot| grid.degree(slot) == highest)
        .collect();

    match tied.as_slice() {
        [] => None,
        [only] => Some(*only),
        _ => tied.get(rng.random_range(0..tied.len())).copied(),
    }
}

/// Order a slot's candidates by the least-constraining-value heuristic
///
/// For each candidate, counts how many values it would rule out across the
/// domains of unassigned neighboring slots, as those domains stand right
/// now. Sorted ascending; the stable sort keeps tied candidates in domain
/// iteration order.
pub fn order_domain_values(
    domains: &DomainStore,
    grid: &Grid,
    vocabulary: &Vocabulary,
    assignment: &Assignment,
    slot: usize,
) -> Vec<usize> {
    let unassigned_neighbors: Vec<usize> = grid
        .neighbors(slot)
        .iter()
        .copied()
        .filter(|&neighbor| !assignment.contains(neighbor))
        .collect();

    let mut ranked: Vec<(usize, usize)> = domains
        .get(slot)
        .iter()
        .map(|word| {
            let ruled_out = unassigned_neighbors
                .iter()
                .map(|&neighbor| conflicts_with_neighbor(domains, grid, vocabulary, slot, word, neighbor))
                .sum();
            (word, ruled_out)
        })
        .collect();

    ranked.sort_by_key(|&(_, ruled_out)| ruled_out);
    ranked.into_iter().map(|(word, _)| word).collect()
}

/// Count the neighbor's candidates incompatible with `word` at the crossing
fn conflicts_with_neighbor(
    domains: &DomainStore,
    grid: &Grid,
    vocabulary: &Vocabulary,
    slot: usize,
    word: usize,
    neighbor: usize,
) -> usize {
    let Some(overlap) = grid.overlap(slot, neighbor) else {
        return 0;
    };
    let letter = vocabulary.letter_at(word, overlap.first);

    domains
        .get(neighbor)
        .iter()
        .filter(|&candidate| vocabulary.letter_at(candidate, overlap.second) != letter)
        .count()
}

#[cfg(test)]
mod tests {
    use super::{order_domain_values, select_unassigned_slot};
    use crate::algorithm::domains::DomainStore;
    use crate::algorithm::propagation::enforce_node_consistency;
    use crate::assignment::Assignment;
    use crate::configuration::DEFAULT_TIE_BREAK_SEED;
    use crate::spatial::{Direction, Grid};
    use crate::vocabulary::Vocabulary;
    use ndarray::Array2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid(pattern: &[&str]) -> Grid {
        let rows = pattern.len();
        let cols = pattern.first().map_or(0, |line| line.len());
        let cells = pattern
            .iter()
            .flat_map(|line| line.chars().map(|c| c == '#'))
            .collect();
        Grid::new(Array2::from_shape_vec((rows, cols), cells).unwrap())
    }

    #[test]
    fn mrv_prefers_the_smallest_domain() {
        let g = grid(&[".#.", "###", ".#."]);
        let vocabulary = Vocabulary::new(["CAT", "DOG", "TIE"]);
        let mut domains = DomainStore::new(g.slot_count(), vocabulary.len());
        domains.remove(1, 0);

        let assignment = Assignment::new(g.slot_count());
        let mut rng = StdRng::seed_from_u64(DEFAULT_TIE_BREAK_SEED);
        let selected = select_unassigned_slot(&domains, &g, &assignment, &mut rng);

        assert_eq!(selected, Some(1));
    }

    #[test]
    fn equal_domains_fall_back_to_the_highest_degree() {
        // One across slot crossing two down slots; the downs have degree 1
        let g = grid(&["###", "#.#", "#.#"]);
        let vocabulary = Vocabulary::new(["ARM", "BED", "CUP"]);
        let domains = DomainStore::new(g.slot_count(), vocabulary.len());
        let assignment = Assignment::new(g.slot_count());
        let mut rng = StdRng::seed_from_u64(DEFAULT_TIE_BREAK_SEED);

        let across = (0..g.slot_count())
            .find(|&id| g.slot(id).is_some_and(|s| s.direction == Direction::Across));
        let selected = select_unassigned_slot(&domains, &g, &assignment, &mut rng);

        assert_eq!(g.degree(selected.unwrap()), 2);
        assert_eq!(selected, across);
    }

    #[test]
    fn full_ties_stay_within_the_tied_set() {
        // Two disjoint across slots, identical domains and degree zero
        let g = grid(&["##.##"]);
        let vocabulary = Vocabulary::new(["AB", "CD"]);
        let domains = DomainStore::new(g.slot_count(), vocabulary.len());
        let assignment = Assignment::new(g.slot_count());

        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected = select_unassigned_slot(&domains, &g, &assignment, &mut rng);
            assert!(matches!(selected, Some(0 | 1)));
        }
    }

    #[test]
    fn every_slot_assigned_selects_nothing() {
        let g = grid(&["##"]);
        let domains = DomainStore::new(g.slot_count(), 1);
        let mut assignment = Assignment::new(g.slot_count());
        assignment.insert(0, 0);
        let mut rng = StdRng::seed_from_u64(DEFAULT_TIE_BREAK_SEED);

        assert_eq!(select_unassigned_slot(&domains, &g, &assignment, &mut rng), None);
    }

    #[test]
    fn least_constraining_value_orders_ascending() {
        let g = grid(&[".#.", "###", ".#."]);
        let vocabulary = Vocabulary::new(["MAT", "MIT", "MOT", "TAP", "TIP"]);
        let mut domains = DomainStore::new(g.slot_count(), vocabulary.len());
        enforce_node_consistency(&mut domains, &g, &vocabulary);

        // Slot 0 across picks between MAT and MIT; slot 1 down offers
        // MAT, MOT, TAP, TIP as crossing partners
        domains.set(0, {
            let mut d = crate::algorithm::bitset::WordBitset::new(vocabulary.len());
            d.insert(0);
            d.insert(1);
            d
        });
        domains.set(1, {
            let mut d = crate::algorithm::bitset::WordBitset::new(vocabulary.len());
            d.insert(0);
            d.insert(2);
            d.insert(3);
            d.insert(4);
            d
        });

        let assignment = Assignment::new(g.slot_count());
        let ordered = order_domain_values(&domains, &g, &vocabulary, &assignment, 0);

        // MAT's middle A matches MAT/TAP (2 conflicts); MIT's middle I
        // matches TIP only (3 conflicts)
        assert_eq!(ordered, vec![0, 1]);
    }

    #[test]
    fn assigned_neighbors_do_not_influence_ordering() {
        let g = grid(&[".#.", "###", ".#."]);
        let vocabulary = Vocabulary::new(["MAT", "MIT", "TIP"]);
        let mut domains = DomainStore::new(g.slot_count(), vocabulary.len());
        enforce_node_consistency(&mut domains, &g, &vocabulary);

        let mut assignment = Assignment::new(g.slot_count());
        assignment.insert(1, 2);
        let ordered = order_domain_values(&domains, &g, &vocabulary, &assignment, 0);

        // With the only neighbor assigned, counts are all zero and the
        // stable sort preserves domain iteration order
        assert_eq!(ordered, vec![0, 1, 2]);
    }
}
