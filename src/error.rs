//! # Error Types
//!
//! This module defines the error types for the genetic algorithm engine.
//! Every failure the engine can produce is local and synchronous: it is
//! surfaced to the immediate caller as a [`GeneticError`], with no retries
//! and no partial-failure semantics.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evobits::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the genetic algorithm engine.
///
/// This enum provides specific error variants for the failure scenarios
/// of genome construction, variation operators, configuration validation,
/// and population queries.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when a genome is empty, too short for the requested
    /// operation, or parsed from a malformed bit string.
    #[error("Invalid genome: {0}")]
    InvalidGenome(String),

    /// Error that occurs when crossover is attempted between genomes of
    /// differing lengths.
    #[error("Genome length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness function violates its contract by
    /// returning a negative or non-finite value.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
///
/// ## Examples
///
/// ```rust
/// use evobits::error::{GeneticError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GeneticError>;
