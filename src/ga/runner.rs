//! Evolutionary loop execution.
//!
//! [`Evolver`] owns the population and drives it generation by generation:
//! evaluation → sort → termination check → elite selection → regeneration.

use super::config::EvolverConfig;
use super::operators::{best_of_three, crossover, fitness, mutate, random_genes};
use super::selection::{parent_indices, rows_per_parent, select_elites};
use super::types::{Chromosome, Fitness, GenerationObserver, NoopObserver};
use crate::error::Result;
use crate::random::{rng_from_seed, EvolveRng};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, instrument, trace, warn};

/// Result of an evolver run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolverResult {
    /// Best individual seen in any evaluated generation.
    pub best: Chromosome,

    /// Best fitness value (same as `best.fitness`).
    pub best_fitness: Fitness,

    /// Generation index at which the run ended: the converging generation,
    /// or the last evaluated one.
    pub generation: usize,

    /// Number of generations evaluated by this call.
    pub generations: usize,

    /// Whether an exact match was found.
    pub converged: bool,

    /// Best fitness of each evaluated generation, in order.
    ///
    /// Not necessarily monotone: elites are not carried over unchanged.
    pub fitness_history: Vec<Fitness>,
}

/// Lifecycle of an [`Evolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolverState {
    /// Generations may still be executed.
    Running,
    /// An exact match was found or the budget ran out.
    Terminated,
}

/// Evolves a population of strings toward a target phrase.
///
/// # Usage
///
/// ```
/// use hello_evolve::ga::{Evolver, EvolverConfig};
///
/// let config = EvolverConfig::default()
///     .with_target("Hi")
///     .with_population_size(200)
///     .with_seed(42);
/// let mut evolver = Evolver::new(config).unwrap();
/// let result = evolver.run(20_000);
/// assert!(result.generations <= 20_000);
/// ```
#[derive(Debug, Clone)]
pub struct Evolver {
    config: EvolverConfig,
    target: Vec<char>,
    population: Vec<Chromosome>,
    rng: EvolveRng,
    state: EvolverState,
    generation: usize,
    best: Option<(Chromosome, usize)>,
}

impl Evolver {
    /// Validates `config` and builds a random initial population.
    ///
    /// The generator is seeded from `config.seed`, or randomly when unset.
    ///
    /// # Errors
    /// [`EvolverError::InvalidConfig`](crate::error::EvolverError::InvalidConfig)
    /// if the configuration is invalid.
    pub fn new(config: EvolverConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(config, rng)
    }

    /// Like [`new`](Self::new) but draws all randomness from `rng`.
    pub fn with_rng(config: EvolverConfig, mut rng: EvolveRng) -> Result<Self> {
        config.validate()?;

        let target: Vec<char> = config.target.chars().collect();
        let population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::new(random_genes(target.len(), &mut rng)))
            .collect();

        debug!(
            population_size = config.population_size,
            target_len = target.len(),
            elites = config.elite_count(),
            "initialized population"
        );

        Ok(Self {
            config,
            target,
            population,
            rng,
            state: EvolverState::Running,
            generation: 0,
            best: None,
        })
    }

    /// The configuration this evolver was built with.
    pub fn config(&self) -> &EvolverConfig {
        &self.config
    }

    /// The current population. Fitness values are stale between generations.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EvolverState {
        self.state
    }

    /// Index of the next generation to evaluate.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Runs until convergence or `config.max_generations`.
    pub fn run_to_budget(&mut self) -> EvolverResult {
        let budget = self.config.max_generations;
        self.run(budget)
    }

    /// Runs up to `max_generations` generations without progress reporting.
    pub fn run(&mut self, max_generations: usize) -> EvolverResult {
        self.run_with_observer(max_generations, &mut NoopObserver)
    }

    /// Runs up to `max_generations` generations, reporting each one to
    /// `observer`.
    ///
    /// Stops early, with `converged` set, at the first generation whose best
    /// fitness is zero. Once terminated, further calls evaluate nothing and
    /// report the retained best.
    #[instrument(
        level = "debug",
        skip_all,
        fields(population_size = self.config.population_size, target_len = self.target.len())
    )]
    pub fn run_with_observer<O>(
        &mut self,
        max_generations: usize,
        observer: &mut O,
    ) -> EvolverResult
    where
        O: GenerationObserver + ?Sized,
    {
        let mut fitness_history =
            Vec::with_capacity(max_generations.min(self.config.max_generations));

        if self.state == EvolverState::Terminated {
            debug!("evolver already terminated");
            return self.result(fitness_history);
        }

        for _ in 0..max_generations {
            let gen = self.generation;

            self.evaluate();
            self.sort();

            let leader = &self.population[0];
            let best_fitness = leader.fitness;
            let rendered = leader.render();
            fitness_history.push(best_fitness);
            observer.on_generation(gen, &rendered, best_fitness);
            trace!(
                generation = gen,
                best = %rendered,
                fitness = best_fitness,
                "generation evaluated"
            );

            if self.best.as_ref().map_or(true, |(b, _)| best_fitness < b.fitness) {
                self.best = Some((leader.clone(), gen));
            }

            if best_fitness == 0 {
                info!(generation = gen, best = %rendered, "target reached");
                self.state = EvolverState::Terminated;
                return self.result(fitness_history);
            }

            self.regenerate();
            self.generation += 1;
        }

        if self.best.is_some() {
            self.state = EvolverState::Terminated;
            warn!(
                generations = fitness_history.len(),
                best_fitness = self.best.as_ref().map(|(b, _)| b.fitness),
                "generation budget exhausted without an exact match"
            );
        }
        self.result(fitness_history)
    }

    /// Scores every individual against the target.
    fn evaluate(&mut self) {
        let target = &self.target;

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                self.population.par_iter_mut().for_each(|ind| {
                    ind.fitness = fitness(&ind.genes, target);
                });
                return;
            }
        }

        for ind in self.population.iter_mut() {
            ind.fitness = fitness(&ind.genes, target);
        }
    }

    /// Orders the population best first. Ties are left in arbitrary order.
    fn sort(&mut self) {
        self.population.sort_unstable_by_key(|c| c.fitness);
    }

    /// Replaces the population with offspring of the current elites.
    ///
    /// Expects the population to be evaluated and sorted.
    fn regenerate(&mut self) {
        let n = self.config.population_size;
        let elites = select_elites(&self.population, self.config.elite_count());
        let rows = rows_per_parent(n, elites.len());
        trace!(elites = elites.len(), rows_per_parent = rows, "regenerating");

        let next: Vec<Chromosome> = (0..n)
            .map(|slot| {
                let (i1, i2) = parent_indices(slot, elites.len(), rows);
                let genes = breed(
                    &elites[i1],
                    &elites[i2],
                    &self.target,
                    &self.config,
                    &mut self.rng,
                );
                Chromosome::new(genes)
            })
            .collect();

        self.population = next;
    }

    fn result(&self, fitness_history: Vec<Fitness>) -> EvolverResult {
        let (best, found_at) = match &self.best {
            Some((best, gen)) => (best.clone(), *gen),
            None => (self.population[0].clone(), self.generation),
        };
        let converged = best.fitness == 0;
        let generation = if converged {
            found_at
        } else {
            self.generation.saturating_sub(1)
        };

        EvolverResult {
            best_fitness: best.fitness,
            best,
            generation,
            generations: fitness_history.len(),
            converged,
            fitness_history,
        }
    }
}

/// Produces one offspring: crossover, optional mutation, optional fallback.
///
/// Draw order: split position, mutation coin, then mutation position and
/// direction when the coin lands.
fn breed<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    target: &[char],
    config: &EvolverConfig,
    rng: &mut R,
) -> Vec<char> {
    let mut offspring = crossover(&parent1.genes, &parent2.genes, rng);

    if rng.random_bool(config.mutation_rate) {
        offspring = mutate(&offspring, rng);
    }

    if config.use_best_parent_if_offspring_is_worse {
        best_of_three(parent1, parent2, offspring, target)
    } else {
        offspring
    }
}

// ============================================================================
// Tests
// ============================================================================
