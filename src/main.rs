//! hello-evolve CLI - evolves random strings into "Hello world!".

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use hello_evolve::ga::{Evolver, EvolverConfig, Fitness};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hello-evolve")]
#[command(about = "Evolve a population of random strings into \"Hello world!\"", long_about = None)]
struct Cli {
    /// Number of individuals per generation
    #[arg(long, default_value = "1000")]
    population_size: usize,

    /// Fraction of the population that breeds the next generation
    #[arg(long, default_value = "0.1")]
    top_percentage: f64,

    /// Generation budget
    #[arg(long, default_value = "20000")]
    max_generations: usize,

    /// Probability that an offspring is mutated
    #[arg(long, default_value = "0.25")]
    mutation_rate: f64,

    /// Replace offspring by a strictly better parent
    #[arg(long)]
    best_parent_fallback: bool,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate fitness on a single thread
    #[arg(long)]
    sequential: bool,
}

impl Cli {
    fn config(&self) -> EvolverConfig {
        let config = EvolverConfig::default()
            .with_population_size(self.population_size)
            .with_top_percentage(self.top_percentage)
            .with_max_generations(self.max_generations)
            .with_mutation_rate(self.mutation_rate)
            .with_best_parent_fallback(self.best_parent_fallback)
            .with_parallel(!self.sequential);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    println!("-- Application start --");
    println!();

    let budget = config.max_generations;
    let started = Instant::now();
    let mut evolver = Evolver::new(config)?;
    let result = evolver.run_with_observer(
        budget,
        &mut |generation: usize, best: &str, fitness: Fitness| {
            println!("{generation}\tBest: {best} ({fitness})");
        },
    );
    let elapsed = started.elapsed();

    if result.converged {
        info!(generation = result.generation, "converged");
    } else {
        info!(
            best = %result.best,
            generations = result.generations,
            "stopped without an exact match"
        );
    }

    println!();
    println!("RunTime: {}", format_elapsed(elapsed));
    println!("-- Application end --");
    Ok(())
}

/// Formats `elapsed` as `HH:MM:SS.cc`.
fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:02}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        elapsed.subsec_millis() / 10
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(1_234)), "00:00:01.23");
        assert_eq!(
            format_elapsed(Duration::from_secs(3_723) + Duration::from_millis(990)),
            "01:02:03.99"
        );
    }

    #[test]
    fn test_cli_defaults_match_config() {
        let cli = Cli::parse_from(["hello-evolve"]);
        assert_eq!(cli.config(), EvolverConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "hello-evolve",
            "--population-size",
            "50",
            "--seed",
            "9",
            "--best-parent-fallback",
            "--sequential",
        ]);
        let config = cli.config();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.seed, Some(9));
        assert!(config.use_best_parent_if_offspring_is_worse);
        assert!(!config.parallel);
    }
}
