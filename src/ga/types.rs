//! Core data types for the string evolver.
//!
//! [`Chromosome`] is the candidate solution; [`GenerationObserver`] is the
//! contract between the evolutionary loop and whoever reports progress.

/// Distance of a chromosome from the target. Zero is an exact match.
pub type Fitness = u64;

/// Lowest code point a gene may take (ASCII space).
pub const GENE_MIN: u32 = 32;

/// Highest code point a gene may take (`'z'`), inclusive.
pub const GENE_MAX: u32 = 122;

/// A candidate solution: a fixed-length character sequence and its score.
///
/// The fitness is only meaningful after the evolver has evaluated the
/// current generation. Fresh chromosomes carry [`Fitness::MAX`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    /// Characters, one per target position.
    pub genes: Vec<char>,

    /// Last computed distance to the target.
    pub fitness: Fitness,
}

impl Chromosome {
    /// Wraps `genes` with a stale fitness.
    pub fn new(genes: Vec<char>) -> Self {
        Self {
            genes,
            fitness: Fitness::MAX,
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Renders the genes as a string.
    pub fn render(&self) -> String {
        self.genes.iter().collect()
    }
}

impl std::fmt::Display for Chromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.render(), self.fitness)
    }
}

/// Receives progress after every evaluated generation.
///
/// Called once per generation, after fitness evaluation and sorting and
/// before the termination check, so the generation that reaches the target
/// is reported as well.
///
/// Any `FnMut(usize, &str, Fitness)` closure is an observer:
///
/// ```
/// use hello_evolve::ga::{Evolver, EvolverConfig};
///
/// let config = EvolverConfig::default()
///     .with_target("Hi")
///     .with_population_size(50)
///     .with_seed(1);
/// let mut evolver = Evolver::new(config).unwrap();
/// let mut lines = Vec::new();
/// let result = evolver.run_with_observer(5, &mut |gen: usize, best: &str, fitness: u64| {
///     lines.push(format!("{gen}\tBest: {best} ({fitness})"));
/// });
/// assert_eq!(lines.len(), result.generations);
/// ```
pub trait GenerationObserver {
    /// Reports generation `generation` (0-based), its best rendered string
    /// and that string's fitness.
    fn on_generation(&mut self, generation: usize, best: &str, best_fitness: Fitness);
}

impl<F> GenerationObserver for F
where
    F: FnMut(usize, &str, Fitness),
{
    fn on_generation(&mut self, generation: usize, best: &str, best_fitness: Fitness) {
        self(generation, best, best_fitness)
    }
}

/// Observer that discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_generation(&mut self, _generation: usize, _best: &str, _best_fitness: Fitness) {}
}
