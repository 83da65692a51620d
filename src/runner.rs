//! # EvolutionRunner
//!
//! The `EvolutionRunner` drives a [`Population`] through a bounded number of
//! generations, recording one [`GenerationStats`] snapshot per completed
//! generation. Bounding the run is entirely the driver's job; the engine
//! itself has no notion of termination.
//!
//! The module also provides [`random_search`], a baseline that scores
//! independent random genomes and reports the best-so-far trajectory, useful
//! for comparing the genetic algorithm against blind sampling.
//!
//! ## Example
//!
//! ```rust
//! use evobits::config::EngineConfig;
//! use evobits::genome::Genome;
//! use evobits::population::Population;
//! use evobits::rng::RandomNumberGenerator;
//! use evobits::runner::EvolutionRunner;
//! use std::sync::Arc;
//!
//! fn main() -> evobits::error::Result<()> {
//!     let scorer = Arc::new(|genome: &Genome| genome.count_ones() as f64);
//!     let config = EngineConfig::builder().max_population_size(20).build();
//!     let mut rng = RandomNumberGenerator::from_seed(42);
//!
//!     let population = Population::new(10, scorer, 8, config, &mut rng)?;
//!     let mut runner = EvolutionRunner::new(population);
//!     let result = runner.run(25, &mut rng)?;
//!
//!     assert_eq!(result.history.len(), 25);
//!     println!("best fitness: {}", result.best.fitness());
//!     Ok(())
//! }
//! ```

use tracing::debug;

use crate::error::Result;
use crate::fitness::FitnessFunction;
use crate::genome::Genome;
use crate::individual::Individual;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// A snapshot of the population after one completed generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// The 1-based number of the completed generation.
    pub generation: usize,
    /// The population size after the generational step.
    pub population_size: usize,
    /// The reported fitness of the best individual.
    pub best_fitness: f64,
    /// The mean reported fitness over all individuals.
    pub average_fitness: f64,
    /// The number of distinct genomes present.
    pub diversity: usize,
}

/// The outcome of a bounded evolution run: the best individual and the
/// per-generation fitness history.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The best individual at the end of the run.
    pub best: Individual,
    /// One snapshot per completed generation, in order.
    pub history: Vec<GenerationStats>,
}

/// Drives a population through generations and keeps a generation counter
/// across calls.
#[derive(Debug)]
pub struct EvolutionRunner {
    population: Population,
    completed_generations: usize,
}

impl EvolutionRunner {
    /// Creates a new runner owning the given population.
    pub fn new(population: Population) -> Self {
        Self {
            population,
            completed_generations: 0,
        }
    }

    /// Returns the population being evolved.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Returns the number of generations completed so far, across all
    /// `run` calls.
    pub fn completed_generations(&self) -> usize {
        self.completed_generations
    }

    /// Advances the population by `generations` generations.
    ///
    /// Records one [`GenerationStats`] snapshot per completed generation and
    /// returns the best individual together with the history. Repeated calls
    /// continue from where the previous run stopped.
    ///
    /// # Errors
    ///
    /// Propagates any error of the generational step.
    pub fn run(
        &mut self,
        generations: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        let mut history = Vec::with_capacity(generations);
        for _ in 0..generations {
            self.population.advance_generation(rng)?;
            self.completed_generations += 1;

            let stats = GenerationStats {
                generation: self.completed_generations,
                population_size: self.population.size(),
                best_fitness: self.population.best_individual().fitness(),
                average_fitness: self.population.average_fitness(),
                diversity: self.population.diversity(),
            };
            debug!(
                generation = stats.generation,
                size = stats.population_size,
                best = stats.best_fitness,
                average = stats.average_fitness,
                diversity = stats.diversity,
                "generation complete"
            );
            history.push(stats);
        }

        Ok(EvolutionResult {
            best: self.population.best_individual().clone(),
            history,
        })
    }
}

/// Scores `trials` independent random genomes and returns the best-so-far
/// trajectory, one entry per trial.
///
/// Each genome has every bit set independently with probability
/// `one_probability`. This is the blind-sampling baseline the genetic
/// algorithm is usually compared against.
///
/// # Errors
///
/// Returns `GeneticError::InvalidGenome` if `genome_length` is zero.
pub fn random_search(
    fitness_function: &dyn FitnessFunction,
    genome_length: usize,
    one_probability: f64,
    trials: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<f64>> {
    let mut trajectory = Vec::with_capacity(trials);
    let mut best = f64::NEG_INFINITY;
    for _ in 0..trials {
        let genome = Genome::random(genome_length, one_probability, rng)?;
        let score = fitness_function.score(&genome);
        if score > best {
            best = score;
        }
        trajectory.push(best);
    }
    Ok(trajectory)
}
