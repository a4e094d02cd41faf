//! Elitist selection and the deterministic pairing of elites.
//!
//! After the population is sorted best-first, the top fraction becomes the
//! breeding pool. Every output slot of the next generation is assigned a
//! fixed pair of elites:
//!
//! ```text
//! parent1 = elites[i mod E]
//! parent2 = elites[i / ceil(N / E)]
//! ```
//!
//! The first index cycles through the pool on every slot; the second
//! advances once per `ceil(N / E)` slots, so every elite is used and every
//! elite also mates with itself.

use super::types::Chromosome;

/// Number of elites: `ceil(population_size × top_percentage)`, at least 1
/// and at most `population_size`.
///
/// # Examples
///
/// ```
/// use hello_evolve::ga::selection::elite_count;
///
/// assert_eq!(elite_count(1000, 0.10), 100);
/// assert_eq!(elite_count(7, 0.10), 1);
/// ```
pub fn elite_count(population_size: usize, top_percentage: f64) -> usize {
    let raw = (population_size as f64 * top_percentage).ceil();
    // Guard against float noise such as 1000 × 0.1 = 100.00000000000001
    let rounded = if (raw - 1.0 - population_size as f64 * top_percentage).abs() < 1e-9 {
        raw - 1.0
    } else {
        raw
    };
    (rounded as usize).clamp(1, population_size.max(1))
}

/// Slots served by each second-parent index: `ceil(population_size / elites)`.
pub fn rows_per_parent(population_size: usize, elites: usize) -> usize {
    population_size.div_ceil(elites.max(1))
}

/// Elite indices `(parent1, parent2)` feeding output slot `slot`.
///
/// # Panics
/// Panics if `elites` is zero.
pub fn parent_indices(slot: usize, elites: usize, rows_per_parent: usize) -> (usize, usize) {
    assert!(elites > 0, "elite pool must not be empty");
    let parent1 = slot % elites;
    let parent2 = (slot / rows_per_parent.max(1)).min(elites - 1);
    (parent1, parent2)
}

/// The best `count` individuals of an already sorted population.
pub fn select_elites(sorted: &[Chromosome], count: usize) -> &[Chromosome] {
    &sorted[..count.min(sorted.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_elite_count_examples() {
        assert_eq!(elite_count(1000, 0.10), 100);
        assert_eq!(elite_count(7, 0.10), 1);
        assert_eq!(elite_count(4, 0.10), 1);
        assert_eq!(elite_count(4, 0.5), 2);
        assert_eq!(elite_count(4, 1.0), 4);
        assert_eq!(elite_count(11, 0.10), 2);
        assert_eq!(elite_count(200, 0.3), 60);
    }

    #[test]
    fn test_elite_count_never_zero() {
        assert_eq!(elite_count(2, 1e-9), 1);
    }

    #[test]
    fn test_rows_per_parent() {
        assert_eq!(rows_per_parent(1000, 100), 10);
        assert_eq!(rows_per_parent(7, 1), 7);
        assert_eq!(rows_per_parent(11, 2), 6);
    }

    #[test]
    fn test_parent_indices_sequence() {
        // N = 6, E = 3 → rows_per_parent = 2
        let rows = rows_per_parent(6, 3);
        let pairs: Vec<_> = (0..6).map(|i| parent_indices(i, 3, rows)).collect();
        assert_eq!(
            pairs,
            vec![(0, 0), (1, 0), (2, 1), (0, 1), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn test_every_elite_used_and_self_mated() {
        for (n, top) in [(1000, 0.10), (7, 0.10), (11, 0.10), (50, 0.3), (9, 1.0)] {
            let e = elite_count(n, top);
            let rows = rows_per_parent(n, e);
            let pairs: Vec<_> = (0..n).map(|i| parent_indices(i, e, rows)).collect();

            let firsts: HashSet<_> = pairs.iter().map(|p| p.0).collect();
            let seconds: HashSet<_> = pairs.iter().map(|p| p.1).collect();
            assert_eq!(firsts.len(), e, "n={n} top={top}");
            assert!(pairs.iter().all(|&(a, b)| a < e && b < e));
            if n % e == 0 {
                assert_eq!(seconds.len(), e, "n={n} top={top}");
            }
        }
    }

    #[test]
    fn test_select_elites_prefix() {
        let pop: Vec<Chromosome> = (0..5)
            .map(|i| Chromosome {
                genes: vec!['a'],
                fitness: i,
            })
            .collect();
        let elites = select_elites(&pop, 2);
        assert_eq!(elites.len(), 2);
        assert_eq!(elites[0].fitness, 0);
        assert_eq!(elites[1].fitness, 1);
        assert_eq!(select_elites(&pop, 10).len(), 5);
    }
}
