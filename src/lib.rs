//! # evobits
//!
//! A genetic algorithm engine over fixed-length bitstring search spaces.
//! A caller supplies a fitness function and a genome length; the engine
//! evolves a population toward high-scoring genomes using
//! fitness-proportionate selection, single-point crossover, per-bit
//! mutation, and identity-based elitism.
//!
//! ## Example
//!
//! ```rust
//! use evobits::{EngineConfig, Genome, Population, RandomNumberGenerator};
//! use std::sync::Arc;
//!
//! fn main() -> evobits::error::Result<()> {
//!     let scorer = Arc::new(|genome: &Genome| genome.count_ones() as f64);
//!     let config = EngineConfig::builder().max_population_size(20).build();
//!     let mut rng = RandomNumberGenerator::from_seed(42);
//!
//!     let mut population = Population::new(10, scorer, 8, config, &mut rng)?;
//!     for _ in 0..25 {
//!         population.advance_generation(&mut rng)?;
//!     }
//!
//!     println!("best fitness: {}", population.best_individual().fitness());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod individual;
pub mod population;
pub mod problems;
pub mod rng;
pub mod runner;

// Re-export commonly used types for convenience
pub use config::{EngineConfig, EngineConfigBuilder};
pub use error::{GeneticError, Result};
pub use fitness::FitnessFunction;
pub use genome::Genome;
pub use individual::Individual;
pub use population::Population;
pub use rng::RandomNumberGenerator;
pub use runner::{random_search, EvolutionResult, EvolutionRunner, GenerationStats};
