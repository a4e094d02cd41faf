//! Genetic operators for character chromosomes.
//!
//! All operators are pure: they read parent sequences and return new ones.
//!
//! - [`fitness`]: summed code-point distance to the target
//! - [`random_genes`]: uniform genes over `[32, 122)`
//! - [`crossover`] / [`crossover_at`]: single-point recombination
//! - [`mutate`] / [`shift_gene`]: ±1 nudge of one character, wrapping within `[32, 122]`
//! - [`best_of_three`]: optional fallback to a dominating parent

use super::types::{Chromosome, Fitness, GENE_MAX, GENE_MIN};
use rand::Rng;

// ============================================================================
// Fitness
// ============================================================================

/// Sum of absolute code-point differences between `genes` and `target`.
///
/// Zero means an exact match. Symmetric in its arguments.
///
/// # Complexity
/// O(n)
pub fn fitness(genes: &[char], target: &[char]) -> Fitness {
    debug_assert_eq!(genes.len(), target.len(), "length mismatch");
    genes
        .iter()
        .zip(target)
        .map(|(&g, &t)| Fitness::from((g as u32).abs_diff(t as u32)))
        .sum()
}

// ============================================================================
// Initialization
// ============================================================================

/// Creates `len` genes, each uniform over code points `[32, 122)`.
pub fn random_genes<R: Rng>(len: usize, rng: &mut R) -> Vec<char> {
    (0..len).map(|_| random_gene(rng)).collect()
}

fn random_gene<R: Rng>(rng: &mut R) -> char {
    let code = rng.random_range(GENE_MIN..GENE_MAX);
    // [32, 122) is plain ASCII
    char::from_u32(code).unwrap_or(' ')
}

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover at a random split in `[0, len)`.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn crossover<R: Rng>(parent1: &[char], parent2: &[char], rng: &mut R) -> Vec<char> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let split = rng.random_range(0..n);
    crossover_at(parent1, parent2, split)
}

/// `parent1[..split]` followed by `parent2[split..]`.
///
/// `split` may be anywhere in `[0, len]`: 0 yields a copy of `parent2`,
/// `len` a copy of `parent1`.
///
/// # Panics
/// Panics if parents have different lengths or `split > len`.
pub fn crossover_at(parent1: &[char], parent2: &[char], split: usize) -> Vec<char> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(split <= parent1.len(), "split out of range");

    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..split]);
    child.extend_from_slice(&parent2[split..]);
    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Returns a copy of `genes` with one random character moved one code point
/// up or down.
///
/// Leaves empty input unchanged.
pub fn mutate<R: Rng>(genes: &[char], rng: &mut R) -> Vec<char> {
    let mut child = genes.to_vec();
    if child.is_empty() {
        return child;
    }
    let pos = rng.random_range(0..child.len());
    let up = rng.random_bool(0.5);
    child[pos] = shift_gene(child[pos], up);
    child
}

/// Moves `gene` one code point up or down, wrapping cyclically within
/// `[32, 122]`: one below 32 becomes 122, one above 122 becomes 32.
///
/// A gene outside the range is first clamped into it.
pub fn shift_gene(gene: char, up: bool) -> char {
    let code = (gene as u32).clamp(GENE_MIN, GENE_MAX);
    let shifted = if up {
        if code == GENE_MAX {
            GENE_MIN
        } else {
            code + 1
        }
    } else if code == GENE_MIN {
        GENE_MAX
    } else {
        code - 1
    };
    char::from_u32(shifted).unwrap_or(' ')
}

// ============================================================================
// Best-parent fallback
// ============================================================================

/// Picks between an offspring and its parents.
///
/// Returns `parent1`'s genes if it beats both the offspring and `parent2`,
/// else `parent2`'s genes if it beats the offspring, else the offspring.
/// Parent fitness values must be current.
pub fn best_of_three(
    parent1: &Chromosome,
    parent2: &Chromosome,
    offspring: Vec<char>,
    target: &[char],
) -> Vec<char> {
    let offspring_fitness = fitness(&offspring, target);
    if parent1.fitness < offspring_fitness && parent1.fitness < parent2.fitness {
        parent1.genes.clone()
    } else if parent2.fitness < offspring_fitness {
        parent2.genes.clone()
    } else {
        offspring
    }
}

// ============================================================================
// Tests
// ============================================================================
