//! Evolver configuration.
//!
//! [`EvolverConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{EvolverError, Result};

/// Target phrase used when none is given.
pub const DEFAULT_TARGET: &str = "Hello world!";

/// Configuration for the [`Evolver`](super::Evolver).
///
/// # Defaults
///
/// ```
/// use hello_evolve::ga::EvolverConfig;
///
/// let config = EvolverConfig::default();
/// assert_eq!(config.population_size, 1000);
/// assert_eq!(config.max_generations, 20_000);
/// assert_eq!(config.target, "Hello world!");
/// ```
///
/// # Builder Pattern
///
/// ```
/// use hello_evolve::ga::EvolverConfig;
///
/// let config = EvolverConfig::default()
///     .with_population_size(200)
///     .with_top_percentage(0.2)
///     .with_mutation_rate(0.5)
///     .with_seed(42);
/// assert_eq!(config.elite_count(), 40);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolverConfig {
    /// Number of individuals in the population. Constant for the whole run.
    pub population_size: usize,

    /// Fraction of the sorted population that breeds the next generation.
    ///
    /// Must lie in `(0, 1]`. The elite count is rounded up.
    pub top_percentage: f64,

    /// Generation budget used by [`Evolver::run_to_budget`](super::Evolver::run_to_budget).
    pub max_generations: usize,

    /// Probability that an offspring has one of its characters nudged (0.0–1.0).
    pub mutation_rate: f64,

    /// Replace an offspring by a strictly better parent.
    ///
    /// Off by default. Enabling it makes the best fitness close to monotone
    /// and changes convergence dynamics.
    pub use_best_parent_if_offspring_is_worse: bool,

    /// Phrase the population evolves towards.
    pub target: String,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical either way.
    pub parallel: bool,
}

impl Default for EvolverConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            top_percentage: 0.10,
            max_generations: 20_000,
            mutation_rate: 0.25,
            use_best_parent_if_offspring_is_worse: false,
            target: DEFAULT_TARGET.to_string(),
            seed: None,
            parallel: true,
        }
    }
}

impl EvolverConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the elite fraction.
    pub fn with_top_percentage(mut self, ratio: f64) -> Self {
        self.top_percentage = ratio;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Enables or disables the best-parent fallback.
    pub fn with_best_parent_fallback(mut self, enabled: bool) -> Self {
        self.use_best_parent_if_offspring_is_worse = enabled;
        self
    }

    /// Sets the target phrase.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Small preset for demos and benchmarks: 200 individuals, 2000 generations.
    pub fn quick() -> Self {
        Self {
            population_size: 200,
            max_generations: 2_000,
            ..Self::default()
        }
    }

    /// Number of elites bred each generation: `ceil(population_size × top_percentage)`.
    pub fn elite_count(&self) -> usize {
        super::selection::elite_count(self.population_size, self.top_percentage)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`EvolverError::InvalidConfig`] naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.target.is_empty() {
            return Err(invalid("target must not be empty"));
        }
        if !(self.top_percentage > 0.0 && self.top_percentage <= 1.0) {
            return Err(invalid("top_percentage must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be in [0, 1]"));
        }
        if self.max_generations == 0 {
            return Err(invalid("max_generations must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> EvolverError {
    EvolverError::InvalidConfig(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolverConfig::default();
        assert_eq!(config.population_size, 1000);
        assert!((config.top_percentage - 0.10).abs() < 1e-10);
        assert_eq!(config.max_generations, 20_000);
        assert!((config.mutation_rate - 0.25).abs() < 1e-10);
        assert!(!config.use_best_parent_if_offspring_is_worse);
        assert_eq!(config.target, "Hello world!");
        assert!(config.seed.is_none());
        assert!(config.parallel);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolverConfig::default()
            .with_population_size(200)
            .with_top_percentage(0.2)
            .with_max_generations(500)
            .with_mutation_rate(0.05)
            .with_best_parent_fallback(true)
            .with_target("Hi")
            .with_seed(42)
            .with_parallel(false);

        assert_eq!(config.population_size, 200);
        assert!((config.top_percentage - 0.2).abs() < 1e-10);
        assert_eq!(config.max_generations, 500);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!(config.use_best_parent_if_offspring_is_worse);
        assert_eq!(config.target, "Hi");
        assert_eq!(config.seed, Some(42));
        assert!(!config.parallel);
    }

    #[test]
    fn test_validate_ok() {
        assert!(EvolverConfig::default().validate().is_ok());
        assert!(EvolverConfig::quick().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let err = EvolverConfig::default()
            .with_population_size(1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EvolverError::InvalidConfig(_)));
        assert!(EvolverConfig::default().with_population_size(2).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_target() {
        let config = EvolverConfig::default().with_target("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_top_percentage_bounds() {
        for bad in [0.0, -0.1, 1.01, f64::NAN] {
            let config = EvolverConfig::default().with_top_percentage(bad);
            assert!(config.validate().is_err(), "top_percentage {bad} accepted");
        }
        assert!(EvolverConfig::default().with_top_percentage(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_mutation_rate_bounds() {
        for bad in [-0.01, 1.5, f64::NAN] {
            let config = EvolverConfig::default().with_mutation_rate(bad);
            assert!(config.validate().is_err(), "mutation_rate {bad} accepted");
        }
        for ok in [0.0, 1.0] {
            assert!(EvolverConfig::default().with_mutation_rate(ok).validate().is_ok());
        }
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = EvolverConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_error_message() {
        let err = EvolverConfig::default().with_target("").validate().unwrap_err();
        assert_eq!(err.to_string(), "InvalidConfig: target must not be empty");
    }

    #[test]
    fn test_elite_count() {
        assert_eq!(EvolverConfig::default().elite_count(), 100);
        assert_eq!(EvolverConfig::default().with_population_size(7).elite_count(), 1);
    }

    #[test]
    fn test_preset_quick_chainable() {
        let config = EvolverConfig::quick().with_seed(3);
        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 2_000);
        assert_eq!(config.seed, Some(3));
    }
}
