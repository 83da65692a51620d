//! # Population
//!
//! The `Population` struct is the evolving collection of individuals. It
//! owns fitness-proportionate parent selection, the generational replacement
//! algorithm, and the elitism bookkeeping that guarantees the best-ever
//! individual is never lost.
//!
//! A population is never empty: construction rejects a zero initial size,
//! and the generational step always leaves at least one individual, so the
//! read-only queries are total.
//!
//! ## Example
//!
//! ```rust
//! use evobits::config::EngineConfig;
//! use evobits::genome::Genome;
//! use evobits::population::Population;
//! use evobits::rng::RandomNumberGenerator;
//! use std::sync::Arc;
//!
//! fn main() -> evobits::error::Result<()> {
//!     let scorer = Arc::new(|genome: &Genome| genome.count_ones() as f64);
//!     let config = EngineConfig::builder().max_population_size(20).build();
//!     let mut rng = RandomNumberGenerator::from_seed(42);
//!
//!     let mut population = Population::new(10, scorer, 8, config, &mut rng)?;
//!     for _ in 0..5 {
//!         population.advance_generation(&mut rng)?;
//!     }
//!
//!     println!("best fitness: {}", population.best_individual().fitness());
//!     println!("average fitness: {}", population.average_fitness());
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::config::EngineConfig;
use crate::error::{GeneticError, Result};
use crate::fitness::FitnessFunction;
use crate::genome::Genome;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// An ordered collection of individuals sharing one fitness function and
/// genome length.
pub struct Population {
    individuals: Vec<Individual>,
    fitness_function: Arc<dyn FitnessFunction>,
    genome_length: usize,
    config: EngineConfig,
    best: Individual,
}

impl Population {
    /// Creates a new population of randomly seeded individuals.
    ///
    /// # Arguments
    ///
    /// * `initial_size` - The number of individuals to seed. Must be at
    ///   least 1.
    /// * `fitness_function` - The shared fitness function.
    /// * `genome_length` - The genome length, fixed for the lifetime of the
    ///   population. Must be at least 1.
    /// * `config` - The engine configuration; validated here.
    /// * `rng` - The random number generator to seed from.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the configuration is invalid
    /// or the genome length is zero, and `GeneticError::EmptyPopulation` if
    /// `initial_size` is zero.
    pub fn new(
        initial_size: usize,
        fitness_function: Arc<dyn FitnessFunction>,
        genome_length: usize,
        config: EngineConfig,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        config.validate()?;
        if genome_length == 0 {
            return Err(GeneticError::Configuration(
                "genome length must be positive".to_string(),
            ));
        }
        if initial_size == 0 {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut individuals = Vec::with_capacity(initial_size);
        for _ in 0..initial_size {
            individuals.push(Individual::random(
                Arc::clone(&fitness_function),
                genome_length,
                &config,
                rng,
            )?);
        }
        let best = Self::scan_best(&individuals)
            .ok_or(GeneticError::EmptyPopulation)?
            .clone();

        Ok(Self {
            individuals,
            fitness_function,
            genome_length,
            config,
            best,
        })
    }

    /// Returns the current number of individuals.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Returns the genome length shared by all individuals.
    pub fn genome_length(&self) -> usize {
        self.genome_length
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the individuals in iteration order.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Returns a handle to the shared fitness function.
    pub fn fitness_function(&self) -> Arc<dyn FitnessFunction> {
        Arc::clone(&self.fitness_function)
    }

    /// Returns the best individual as of the last re-derivation.
    pub fn best_individual(&self) -> &Individual {
        &self.best
    }

    /// Returns the number of distinct genomes currently present.
    ///
    /// A cheap convergence diagnostic; the algorithm itself does not use it.
    pub fn diversity(&self) -> usize {
        self.individuals
            .iter()
            .map(Individual::genome)
            .collect::<HashSet<&Genome>>()
            .len()
    }

    /// Returns the mean reported fitness over all individuals.
    pub fn average_fitness(&self) -> f64 {
        let total: f64 = self.individuals.iter().map(Individual::fitness).sum();
        total / self.individuals.len() as f64
    }

    /// Re-derives the best individual by scanning the full individual set.
    ///
    /// Ties break toward the later individual in iteration order, so the
    /// best reference is an identity, not merely a fitness value.
    pub fn find_best(&mut self) -> &Individual {
        if let Some(best) = Self::scan_best(&self.individuals) {
            self.best = best.clone();
        }
        &self.best
    }

    /// Scans for the maximum-score individual with the last-equal-wins
    /// tie-break.
    fn scan_best(individuals: &[Individual]) -> Option<&Individual> {
        let mut best: Option<&Individual> = None;
        for candidate in individuals {
            match best {
                Some(current) if candidate.fitness() < current.fitness() => {}
                _ => best = Some(candidate),
            }
        }
        best
    }

    /// Draws two parents independently, with replacement, by
    /// fitness-proportionate roulette sampling.
    ///
    /// The same individual may be drawn twice.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if the population has no
    /// individuals, which cannot happen through the public API.
    pub fn select_parents(
        &self,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(&Individual, &Individual)> {
        Ok((self.select_one(rng)?, self.select_one(rng)?))
    }

    /// Draws one individual with probability proportional to
    /// `fitness + epsilon`.
    ///
    /// The epsilon margin keeps every weight strictly positive even when the
    /// fitness function legitimately returns zero, so the cumulative walk
    /// always terminates within the set.
    fn select_one(&self, rng: &mut RandomNumberGenerator) -> Result<&Individual> {
        let last = self.individuals.last().ok_or(GeneticError::EmptyPopulation)?;

        let epsilon = self.config.get_epsilon();
        let total: f64 = self
            .individuals
            .iter()
            .map(|individual| individual.fitness() + epsilon)
            .sum();
        let threshold = rng.uniform(0.0, total);

        let mut accumulated = 0.0;
        for individual in &self.individuals {
            accumulated += individual.fitness() + epsilon;
            if accumulated >= threshold {
                return Ok(individual);
            }
        }
        // Accumulated rounding can leave the threshold unmet by a hair;
        // the walk then resolves to the last individual.
        Ok(last)
    }

    /// Advances the population by one generation.
    ///
    /// Breeds a replacement individual set by repeated proportional
    /// selection and [`Individual::combine`], then re-derives the best
    /// individual. If the previous best did not literally survive (same
    /// identity tag), it is re-appended, which makes the best reported
    /// fitness monotonically non-decreasing across generations.
    ///
    /// The breeding target is `min(max_population_size - 2, size - 1)`: the
    /// cap prevents growth past the configured ceiling, and staying slightly
    /// below the current size applies mild downward pressure on the
    /// population size, which only the elitism reinsertion and the ceiling
    /// arrest.
    pub fn advance_generation(&mut self, rng: &mut RandomNumberGenerator) -> Result<()> {
        let target = self
            .config
            .get_max_population_size()
            .saturating_sub(2)
            .min(self.size().saturating_sub(1));
        trace!(
            target_size = target,
            current_size = self.size(),
            "breeding next generation"
        );

        let mut next = Vec::with_capacity(target + 2);
        while next.len() < target {
            let (first, second) = self.select_parents(rng)?;
            let (child1, child2) = Individual::combine(first, second, &self.config, rng)?;
            next.push(child1);
            next.push(child2);
        }

        let previous_best = self.best.clone();
        self.individuals = next;

        let retained = Self::scan_best(&self.individuals)
            .map(|best| best.id() == previous_best.id())
            .unwrap_or(false);
        if !retained {
            trace!(
                best_id = previous_best.id(),
                best_fitness = previous_best.fitness(),
                "previous best did not survive, reinserting"
            );
            // Appended last, the previous best wins ties against equal-score
            // children under the last-equal-wins rule.
            self.individuals.push(previous_best);
        }
        self.find_best();
        Ok(())
    }
}

impl fmt::Debug for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Population")
            .field("size", &self.size())
            .field("genome_length", &self.genome_length)
            .field("config", &self.config)
            .field("best", &self.best)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones_scorer() -> Arc<dyn FitnessFunction> {
        Arc::new(|genome: &Genome| genome.count_ones() as f64)
    }

    fn small_config() -> EngineConfig {
        EngineConfig::builder().max_population_size(20).build()
    }

    #[test]
    fn test_construction_seeds_requested_size() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let population = Population::new(10, ones_scorer(), 8, small_config(), &mut rng).unwrap();
        assert_eq!(population.size(), 10);
        assert_eq!(population.genome_length(), 8);
        for individual in population.individuals() {
            assert_eq!(individual.genome().len(), 8);
        }
    }

    #[test]
    fn test_construction_rejects_zero_size() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let result = Population::new(0, ones_scorer(), 8, small_config(), &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_construction_rejects_zero_genome_length() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let result = Population::new(10, ones_scorer(), 0, small_config(), &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_construction_rejects_invalid_config() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let config = EngineConfig::new(2.0, 0.01, 0.5, 20, 1e-5);
        let result = Population::new(10, ones_scorer(), 8, config, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_best_individual_ties_break_toward_later() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let constant: Arc<dyn FitnessFunction> = Arc::new(|_: &Genome| 1.0);
        let mut population = Population::new(10, constant, 4, small_config(), &mut rng).unwrap();

        // All scores are equal, so the scan must settle on the last
        // individual in iteration order.
        let last_id = population.individuals().last().unwrap().id();
        assert_eq!(population.best_individual().id(), last_id);
        assert_eq!(population.find_best().id(), last_id);
    }

    #[test]
    fn test_average_fitness_is_mean_of_reported_fitness() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let population = Population::new(10, ones_scorer(), 6, small_config(), &mut rng).unwrap();

        let expected: f64 = population
            .individuals()
            .iter()
            .map(|i| i.genome().count_ones() as f64)
            .sum::<f64>()
            / 10.0;
        assert_eq!(population.average_fitness(), expected);
    }

    #[test]
    fn test_diversity_counts_distinct_genomes() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let population = Population::new(30, ones_scorer(), 3, small_config(), &mut rng).unwrap();

        // 3-bit genomes admit at most 8 distinct values.
        let diversity = population.diversity();
        assert!(diversity >= 1);
        assert!(diversity <= 8);
    }

    #[test]
    fn test_selection_returns_members_of_the_population() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        // Skewed scores with one dominant pattern: genomes starting with a
        // set bit score a thousand times higher.
        let skewed: Arc<dyn FitnessFunction> =
            Arc::new(|genome: &Genome| if genome.bit(0) { 1000.0 } else { 0.0 });
        let population = Population::new(20, skewed, 5, small_config(), &mut rng).unwrap();

        let ids: HashSet<u64> = population.individuals().iter().map(|i| i.id()).collect();
        for _ in 0..1000 {
            let (first, second) = population.select_parents(&mut rng).unwrap();
            assert!(ids.contains(&first.id()));
            assert!(ids.contains(&second.id()));
        }
    }

    #[test]
    fn test_selection_handles_all_zero_scores() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        let zero: Arc<dyn FitnessFunction> = Arc::new(|_: &Genome| 0.0);
        let population = Population::new(10, zero, 4, small_config(), &mut rng).unwrap();

        // The epsilon margin keeps the total weight strictly positive, so
        // sampling stays well-defined even when every raw score is zero.
        for _ in 0..100 {
            let (first, _) = population.select_parents(&mut rng).unwrap();
            assert_eq!(first.genome().len(), 4);
        }
    }

    #[test]
    fn test_advance_generation_keeps_population_within_bounds() {
        let mut rng = RandomNumberGenerator::from_seed(11);
        let mut population =
            Population::new(10, ones_scorer(), 6, small_config(), &mut rng).unwrap();

        for _ in 0..30 {
            population.advance_generation(&mut rng).unwrap();
            assert!(population.size() >= 1);
            assert!(population.size() <= 20);
        }
    }

    #[test]
    fn test_advance_generation_preserves_genome_length() {
        let mut rng = RandomNumberGenerator::from_seed(11);
        let mut population =
            Population::new(10, ones_scorer(), 6, small_config(), &mut rng).unwrap();

        for _ in 0..10 {
            population.advance_generation(&mut rng).unwrap();
            for individual in population.individuals() {
                assert_eq!(individual.genome().len(), 6);
            }
        }
    }

    #[test]
    fn test_best_fitness_is_monotonically_non_decreasing() {
        let mut rng = RandomNumberGenerator::from_seed(13);
        let mut population =
            Population::new(10, ones_scorer(), 8, small_config(), &mut rng).unwrap();

        let mut previous = population.best_individual().fitness();
        for _ in 0..50 {
            population.advance_generation(&mut rng).unwrap();
            let current = population.best_individual().fitness();
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_elitism_reinserts_by_identity_under_constant_scores() {
        let mut rng = RandomNumberGenerator::from_seed(17);
        let constant: Arc<dyn FitnessFunction> = Arc::new(|_: &Genome| 1.0);
        let mut population = Population::new(10, constant, 4, small_config(), &mut rng).unwrap();

        // Every bred child is a fresh individual, so under constant scores
        // the reinserted previous best stays champion by identity forever,
        // even when children tie its fitness value.
        let original_id = population.best_individual().id();
        for _ in 0..10 {
            population.advance_generation(&mut rng).unwrap();
            assert_eq!(population.best_individual().id(), original_id);
        }
    }

    #[test]
    fn test_single_individual_population_survives_advancement() {
        let mut rng = RandomNumberGenerator::from_seed(19);
        let mut population =
            Population::new(1, ones_scorer(), 4, small_config(), &mut rng).unwrap();

        // With one individual the breeding target is zero, and the elitism
        // reinsertion alone keeps the population alive.
        for _ in 0..5 {
            population.advance_generation(&mut rng).unwrap();
            assert_eq!(population.size(), 1);
        }
    }
}
