//! String-matching genetic algorithm.
//!
//! Evolves fixed-length character strings toward a target phrase by
//! elitist selection, single-point crossover and ±1 character mutation.
//!
//! # Key Types
//!
//! - [`EvolverConfig`]: Algorithm parameters (population size, elite fraction, rates)
//! - [`Evolver`]: Owns the population and executes the generation loop
//! - [`EvolverResult`]: Outcome of a run with per-generation history
//! - [`GenerationObserver`]: Per-generation progress callback
//!
//! # Submodules
//!
//! - [`operators`]: Fitness, crossover, mutation and best-parent fallback
//! - [`selection`]: Elite count and the deterministic parent pairing
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{EvolverConfig, DEFAULT_TARGET};
pub use runner::{Evolver, EvolverResult, EvolverState};
pub use types::{Chromosome, Fitness, GenerationObserver, NoopObserver, GENE_MAX, GENE_MIN};
