//! # EngineConfig
//!
//! The `EngineConfig` struct holds the hyperparameters of the genetic
//! algorithm: crossover probability, mutation rate, the bit distribution of
//! random genomes, the population-size ceiling, and the selection-weight
//! epsilon. The configuration is validated at population construction and
//! never changes during a run.
//!
//! ## Example
//!
//! ```rust
//! use evobits::config::EngineConfig;
//!
//! // Create a new EngineConfig instance with custom parameters
//! let custom_config = EngineConfig::new(0.7, 0.02, 0.5, 500, 1e-5);
//!
//! // Create a new EngineConfig instance with default parameters
//! let default_config = EngineConfig::default();
//!
//! // Or use the builder for a fluent interface
//! let built = EngineConfig::builder()
//!     .crossover_probability(0.7)
//!     .mutation_probability(0.02)
//!     .max_population_size(500)
//!     .build();
//! ```

use crate::error::{GeneticError, Result};

/// Configuration options for the genetic algorithm engine.
///
/// The mutation probability is interpreted as the expected number of flipped
/// bits per genome: the per-bit flip probability is
/// `mutation_probability / genome_length`, so the expected total number of
/// flips stays constant regardless of genome length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    crossover_probability: f64,
    mutation_probability: f64,
    random_one_probability: f64,
    max_population_size: usize,
    epsilon: f64,
}

impl EngineConfig {
    /// Creates a new `EngineConfig` instance with the specified parameters.
    ///
    /// # Arguments
    ///
    /// * `crossover_probability` - The probability that a parent pair is
    ///   recombined by crossover rather than copied.
    /// * `mutation_probability` - The expected number of bit flips per genome.
    /// * `random_one_probability` - The probability that a bit of a randomly
    ///   seeded genome is set.
    /// * `max_population_size` - The population-size ceiling.
    /// * `epsilon` - The margin added to each score when selection weights
    ///   are formed, keeping every weight strictly positive.
    pub fn new(
        crossover_probability: f64,
        mutation_probability: f64,
        random_one_probability: f64,
        max_population_size: usize,
        epsilon: f64,
    ) -> Self {
        Self {
            crossover_probability,
            mutation_probability,
            random_one_probability,
            max_population_size,
            epsilon,
        }
    }

    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_random_one_probability(&self) -> f64 {
        self.random_one_probability
    }

    pub fn get_max_population_size(&self) -> usize {
        self.max_population_size
    }

    pub fn get_epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Sets the crossover probability.
    pub fn set_crossover_probability(&mut self, crossover_probability: f64) {
        self.crossover_probability = crossover_probability;
    }

    /// Sets the mutation probability.
    pub fn set_mutation_probability(&mut self, mutation_probability: f64) {
        self.mutation_probability = mutation_probability;
    }

    /// Sets the probability that a randomly seeded bit is set.
    pub fn set_random_one_probability(&mut self, random_one_probability: f64) {
        self.random_one_probability = random_one_probability;
    }

    /// Sets the population-size ceiling.
    pub fn set_max_population_size(&mut self, max_population_size: usize) {
        self.max_population_size = max_population_size;
    }

    /// Sets the selection-weight epsilon.
    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if any probability lies outside
    /// `[0, 1]`, the mutation probability is negative or non-finite, the
    /// population-size ceiling is zero, or the epsilon is not strictly
    /// positive.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(GeneticError::Configuration(format!(
                "crossover probability must be in [0, 1], got {}",
                self.crossover_probability
            )));
        }
        if !self.mutation_probability.is_finite() || self.mutation_probability < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "mutation probability must be finite and non-negative, got {}",
                self.mutation_probability
            )));
        }
        if !(0.0..=1.0).contains(&self.random_one_probability) {
            return Err(GeneticError::Configuration(format!(
                "random one probability must be in [0, 1], got {}",
                self.random_one_probability
            )));
        }
        if self.max_population_size == 0 {
            return Err(GeneticError::Configuration(
                "maximum population size must be positive".to_string(),
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(GeneticError::Configuration(format!(
                "epsilon must be finite and strictly positive, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Returns a builder for creating an `EngineConfig` instance.
    ///
    /// This provides a more flexible way to configure the engine with a
    /// fluent interface.
    ///
    /// # Example
    ///
    /// ```rust
    /// use evobits::config::EngineConfig;
    ///
    /// let config = EngineConfig::builder()
    ///     .crossover_probability(0.8)
    ///     .mutation_probability(1.0)
    ///     .random_one_probability(0.25)
    ///     .max_population_size(200)
    ///     .epsilon(1e-6)
    ///     .build();
    /// ```
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            crossover_probability: 0.5,
            mutation_probability: 0.01,
            random_one_probability: 0.5,
            max_population_size: 1100,
            epsilon: 1e-5,
        }
    }
}

/// Builder for `EngineConfig`.
///
/// Provides a fluent interface for constructing `EngineConfig` instances.
/// Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    crossover_probability: Option<f64>,
    mutation_probability: Option<f64>,
    random_one_probability: Option<f64>,
    max_population_size: Option<usize>,
    epsilon: Option<f64>,
}

impl EngineConfigBuilder {
    /// Sets the crossover probability.
    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    /// Sets the mutation probability.
    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    /// Sets the probability that a randomly seeded bit is set.
    pub fn random_one_probability(mut self, value: f64) -> Self {
        self.random_one_probability = Some(value);
        self
    }

    /// Sets the population-size ceiling.
    pub fn max_population_size(mut self, value: usize) -> Self {
        self.max_population_size = Some(value);
        self
    }

    /// Sets the selection-weight epsilon.
    pub fn epsilon(mut self, value: f64) -> Self {
        self.epsilon = Some(value);
        self
    }

    /// Builds the `EngineConfig` instance.
    pub fn build(self) -> EngineConfig {
        let defaults = EngineConfig::default();
        EngineConfig {
            crossover_probability: self
                .crossover_probability
                .unwrap_or(defaults.crossover_probability),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
            random_one_probability: self
                .random_one_probability
                .unwrap_or(defaults.random_one_probability),
            max_population_size: self
                .max_population_size
                .unwrap_or(defaults.max_population_size),
            epsilon: self.epsilon.unwrap_or(defaults.epsilon),
        }
    }
}
