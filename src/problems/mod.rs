//! Example problem suppliers built purely on the public engine contract.
//!
//! The engine is domain-agnostic; these modules provide two classic
//! bitstring problems as ready-made [`FitnessFunction`](crate::fitness::FitnessFunction)
//! implementations, plus seeded random-instance generators for each.

pub mod knapsack;
pub mod sat;

pub use knapsack::{KnapsackItem, KnapsackProblem};
pub use sat::{random_3sat, SatFormula};
