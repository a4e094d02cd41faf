//! Elitist genetic algorithm that evolves random strings into a target phrase.
//!
//! Starting from a random population, each generation is scored by summed
//! character distance to the target, sorted, and rebuilt from the best
//! fraction through single-point crossover and small mutations, until an
//! exact match appears or the generation budget runs out.
//!
//! ```
//! use hello_evolve::ga::{Evolver, EvolverConfig};
//!
//! let config = EvolverConfig::default().with_target("Hi").with_seed(7);
//! let mut evolver = Evolver::new(config)?;
//! let result = evolver.run(20_000);
//! println!("{} after {} generations", result.best, result.generations);
//! # Ok::<(), hello_evolve::error::EvolverError>(())
//! ```
//!
//! # Modules
//!
//! - [`ga`]: Configuration, operators, selection and the generation loop
//! - [`error`]: Configuration errors
//! - [`random`]: Seedable random source

pub mod error;
pub mod ga;
pub mod random;
