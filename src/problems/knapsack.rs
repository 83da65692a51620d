//! # Knapsack Problem
//!
//! A classic 0/1 knapsack evaluator: genome bit `i` selects item `i`, and
//! the score of a selection is its total value, or exactly 0 the moment its
//! total weight exceeds the capacity. Over-capacity selections get no
//! partial credit; this is a hard constraint.
//!
//! ## Example
//!
//! ```rust
//! use evobits::fitness::FitnessFunction;
//! use evobits::genome::Genome;
//! use evobits::problems::knapsack::{KnapsackItem, KnapsackProblem};
//!
//! fn main() -> evobits::error::Result<()> {
//!     let problem = KnapsackProblem::new(
//!         vec![
//!             KnapsackItem { weight: 2, value: 3 },
//!             KnapsackItem { weight: 3, value: 4 },
//!             KnapsackItem { weight: 4, value: 5 },
//!         ],
//!         5,
//!     )?;
//!
//!     let selection: Genome = "110".parse()?;
//!     assert_eq!(problem.score(&selection), 7.0);
//!
//!     let too_heavy: Genome = "111".parse()?;
//!     assert_eq!(problem.score(&too_heavy), 0.0);
//!     Ok(())
//! }
//! ```

use crate::error::{GeneticError, Result};
use crate::fitness::FitnessFunction;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

/// One item of a knapsack instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackItem {
    pub weight: u64,
    pub value: u64,
}

/// A 0/1 knapsack instance usable as a fitness function.
///
/// The genome length the instance expects equals the number of items.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackProblem {
    items: Vec<KnapsackItem>,
    capacity: u64,
}

impl KnapsackProblem {
    /// Creates a knapsack instance from the given items and capacity.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the item list is empty or
    /// any item has a zero weight or value.
    pub fn new(items: Vec<KnapsackItem>, capacity: u64) -> Result<Self> {
        if items.is_empty() {
            return Err(GeneticError::Configuration(
                "knapsack instance must contain at least one item".to_string(),
            ));
        }
        if items.iter().any(|item| item.weight == 0 || item.value == 0) {
            return Err(GeneticError::Configuration(
                "knapsack item weights and values must be positive".to_string(),
            ));
        }
        Ok(Self { items, capacity })
    }

    /// Creates a random knapsack instance with `num_items` items.
    ///
    /// Weights are drawn uniformly from `1..=20` and values from `1..=15`;
    /// the capacity is a uniformly random fraction of the total weight, so
    /// the constraint usually binds.
    pub fn random_instance(num_items: usize, rng: &mut RandomNumberGenerator) -> Result<Self> {
        let mut items = Vec::with_capacity(num_items);
        let mut total_weight: u64 = 0;
        for _ in 0..num_items {
            let weight: u64 = rng.gen_range(1..=20);
            let value: u64 = rng.gen_range(1..=15);
            total_weight += weight;
            items.push(KnapsackItem { weight, value });
        }
        let capacity = (rng.uniform(0.0, 1.0) * total_weight as f64) as u64;
        Self::new(items, capacity)
    }

    /// Returns the genome length this instance expects: one bit per item.
    pub fn genome_length(&self) -> usize {
        self.items.len()
    }

    /// Returns the capacity.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Returns the items.
    pub fn items(&self) -> &[KnapsackItem] {
        &self.items
    }
}

impl FitnessFunction for KnapsackProblem {
    /// Scores a selection by accumulating the set bits' weights and values
    /// in index order. Returns 0 the moment the accumulated weight exceeds
    /// the capacity; a weight exactly equal to the capacity is feasible.
    fn score(&self, genome: &Genome) -> f64 {
        let mut weight: u64 = 0;
        let mut value: u64 = 0;
        for (item, bit) in self.items.iter().zip(genome.iter()) {
            if !bit {
                continue;
            }
            weight += item.weight;
            if weight > self.capacity {
                return 0.0;
            }
            value += item.value;
        }
        value as f64
    }
}
