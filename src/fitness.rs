//! # FitnessFunction Trait
//!
//! The `FitnessFunction` trait is the contract between the engine and the
//! problem being optimized: a pure mapping from a genome to a non-negative
//! score. The engine shares one fitness function across a population via
//! `Arc<dyn FitnessFunction>`, and every closure of the right shape
//! implements the trait automatically.
//!
//! ## Example
//!
//! ```rust
//! use evobits::fitness::FitnessFunction;
//! use evobits::genome::Genome;
//!
//! struct OnesCount;
//!
//! impl FitnessFunction for OnesCount {
//!     fn score(&self, genome: &Genome) -> f64 {
//!         genome.count_ones() as f64
//!     }
//! }
//!
//! // Closures work too:
//! let by_closure = |genome: &Genome| genome.count_ones() as f64;
//! let genome: Genome = "1011".parse().unwrap();
//! assert_eq!(OnesCount.score(&genome), by_closure.score(&genome));
//! ```

use crate::genome::Genome;

/// The scoring contract supplied by the caller.
///
/// Implementations must be pure: deterministic given the genome, with no
/// side effects, and defined for every genome of the declared length. The
/// returned score must be finite and non-negative; the engine rejects
/// violations with a `FitnessCalculation` error at individual construction,
/// where the score is cached.
pub trait FitnessFunction: Send + Sync {
    /// Scores the given genome.
    fn score(&self, genome: &Genome) -> f64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Genome) -> f64 + Send + Sync,
{
    fn score(&self, genome: &Genome) -> f64 {
        self(genome)
    }
}
