//! # Individual
//!
//! The `Individual` struct binds a [`Genome`] to a fitness score computed
//! eagerly at construction from the supplied [`FitnessFunction`], and carries
//! the variation operators: mutation, single-point crossover, and the
//! combined breed step used by the generational loop.
//!
//! Individuals are immutable values; every variation operator returns new
//! individuals. Each individual also carries a stable identity tag assigned
//! at creation, which the population's elitism check uses to decide whether
//! the previous best literally survived into the next generation. Cloning
//! preserves the tag: a clone is the same logical individual, while
//! construction, mutation, and crossover always produce fresh identities.
//!
//! ## Example
//!
//! ```rust
//! use evobits::config::EngineConfig;
//! use evobits::genome::Genome;
//! use evobits::individual::Individual;
//! use evobits::rng::RandomNumberGenerator;
//! use std::sync::Arc;
//!
//! fn main() -> evobits::error::Result<()> {
//!     let scorer = Arc::new(|genome: &Genome| genome.count_ones() as f64);
//!     let config = EngineConfig::default();
//!     let mut rng = RandomNumberGenerator::from_seed(42);
//!
//!     let individual = Individual::new("1010".parse()?, scorer)?;
//!     assert_eq!(individual.fitness(), 2.0);
//!
//!     let mutated = individual.mutate(&config, &mut rng)?;
//!     assert_eq!(mutated.genome().len(), 4);
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::error::{GeneticError, Result};
use crate::fitness::FitnessFunction;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A genome paired with its cached fitness score and an identity tag.
#[derive(Clone)]
pub struct Individual {
    genome: Genome,
    score: f64,
    fitness_function: Arc<dyn FitnessFunction>,
    id: u64,
}

impl Individual {
    /// Creates a new individual, scoring the genome eagerly.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::FitnessCalculation` if the fitness function
    /// returns a negative or non-finite score.
    pub fn new(genome: Genome, fitness_function: Arc<dyn FitnessFunction>) -> Result<Self> {
        let score = fitness_function.score(&genome);
        if !score.is_finite() || score < 0.0 {
            return Err(GeneticError::FitnessCalculation(format!(
                "fitness function returned {} for genome {}",
                score, genome
            )));
        }
        Ok(Self {
            genome,
            score,
            fitness_function,
            id: next_id(),
        })
    }

    /// Creates an individual with a random genome of the given length.
    ///
    /// Each bit is set independently with the configured
    /// `random_one_probability`.
    pub fn random(
        fitness_function: Arc<dyn FitnessFunction>,
        length: usize,
        config: &EngineConfig,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        let genome = Genome::random(length, config.get_random_one_probability(), rng)?;
        Self::new(genome, fitness_function)
    }

    /// Returns the genome.
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Returns the reported fitness: the raw score of the fitness function.
    pub fn fitness(&self) -> f64 {
        self.score
    }

    /// Returns the identity tag assigned at creation.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns a handle to the fitness function this individual was scored with.
    pub fn fitness_function(&self) -> Arc<dyn FitnessFunction> {
        Arc::clone(&self.fitness_function)
    }

    /// Returns a mutated copy of this individual.
    ///
    /// Each bit is flipped independently with probability
    /// `mutation_probability / L` (clamped to 1.0), so the expected number of
    /// flips per genome stays at `mutation_probability` regardless of genome
    /// length. The result is re-scored with the same fitness function and
    /// carries a fresh identity.
    pub fn mutate(&self, config: &EngineConfig, rng: &mut RandomNumberGenerator) -> Result<Self> {
        let per_bit = (config.get_mutation_probability() / self.genome.len() as f64).min(1.0);
        let bits = self
            .genome
            .iter()
            .map(|bit| {
                if rng.uniform(0.0, 1.0) < per_bit {
                    !bit
                } else {
                    bit
                }
            })
            .collect();
        Self::new(Genome::new(bits)?, Arc::clone(&self.fitness_function))
    }

    /// Performs single-point crossover between two parents, producing two
    /// children.
    ///
    /// With probability 0.5 the operand roles are swapped first, removing the
    /// positional bias where the first operand would always contribute the
    /// genome prefix. The crossing point is drawn uniformly from
    /// `[0, L - 2]`, so both segments are non-empty and the operation never
    /// degenerates to a full copy. Each child inherits the fitness function
    /// of the parent that contributed its prefix; the parents may carry
    /// different fitness functions as long as their genome lengths match.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::LengthMismatch` if the parent genomes differ in
    /// length, or `GeneticError::InvalidGenome` if the genomes are shorter
    /// than two bits.
    pub fn crossover(
        a: &Individual,
        b: &Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        if a.genome.len() != b.genome.len() {
            return Err(GeneticError::LengthMismatch {
                expected: a.genome.len(),
                actual: b.genome.len(),
            });
        }
        if a.genome.len() < 2 {
            return Err(GeneticError::InvalidGenome(
                "crossover requires genomes of at least two bits".to_string(),
            ));
        }

        let (first, second) = if rng.uniform(0.0, 1.0) < 0.5 {
            (b, a)
        } else {
            (a, b)
        };
        let crossing_point = rng.gen_range(0..first.genome.len() - 1);
        Self::crossover_at(first, second, crossing_point)
    }

    /// Recombines two parents at the given crossing point.
    ///
    /// The crossing point is the last index of the prefix segment, so it must
    /// lie in `[0, L - 2]`.
    fn crossover_at(
        a: &Individual,
        b: &Individual,
        crossing_point: usize,
    ) -> Result<(Individual, Individual)> {
        let (prefix_a, suffix_a) = a.genome.bits().split_at(crossing_point + 1);
        let (prefix_b, suffix_b) = b.genome.bits().split_at(crossing_point + 1);

        let child1 = Self::new(
            Genome::new([prefix_a, suffix_b].concat())?,
            Arc::clone(&a.fitness_function),
        )?;
        let child2 = Self::new(
            Genome::new([prefix_b, suffix_a].concat())?,
            Arc::clone(&b.fitness_function),
        )?;
        Ok((child1, child2))
    }

    /// Breeds two children from two parents.
    ///
    /// With probability `crossover_probability` the parents are recombined by
    /// [`Individual::crossover`]; otherwise both are copied. Both results are
    /// then independently mutated.
    pub fn combine(
        a: &Individual,
        b: &Individual,
        config: &EngineConfig,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        let (first, second) = if rng.uniform(0.0, 1.0) < config.get_crossover_probability() {
            Self::crossover(a, b, rng)?
        } else {
            (a.clone(), b.clone())
        };
        Ok((first.mutate(config, rng)?, second.mutate(config, rng)?))
    }
}

impl fmt::Debug for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Individual")
            .field("genome", &self.genome)
            .field("score", &self.score)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
