//! # Genome
//!
//! The `Genome` struct is a fixed-length bit vector representing one
//! candidate solution. Genomes are immutable once constructed: mutation and
//! crossover always build new genomes rather than editing in place.
//!
//! Genomes support equality and hashing so a population can count its
//! distinct genomes as a cheap convergence diagnostic.
//!
//! ## Example
//!
//! ```rust
//! use evobits::genome::Genome;
//!
//! fn main() -> evobits::error::Result<()> {
//!     let genome: Genome = "1010".parse()?;
//!     assert_eq!(genome.len(), 4);
//!     assert_eq!(genome.count_ones(), 2);
//!     assert_eq!(genome.to_string(), "1010");
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A fixed-length bit vector representing one candidate solution.
///
/// A genome always contains at least one bit; constructing an empty genome
/// fails with [`GeneticError::InvalidGenome`].
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    bits: Vec<bool>,
}

impl Genome {
    /// Creates a genome from the given bits.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidGenome` if `bits` is empty.
    pub fn new(bits: Vec<bool>) -> Result<Self> {
        if bits.is_empty() {
            return Err(GeneticError::InvalidGenome(
                "genome must contain at least one bit".to_string(),
            ));
        }
        Ok(Self { bits })
    }

    /// Creates a random genome of the given length.
    ///
    /// Each bit is set independently with probability `one_probability`.
    ///
    /// # Arguments
    ///
    /// * `length` - The number of bits in the genome.
    /// * `one_probability` - The probability that any single bit is set.
    /// * `rng` - The random number generator to draw from.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidGenome` if `length` is zero.
    pub fn random(
        length: usize,
        one_probability: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        let draws = rng.fetch_uniform(0.0, 1.0, length);
        Self::new(draws.iter().map(|&u| u < one_probability).collect())
    }

    /// Returns the number of bits in the genome.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the genome contains no bits.
    ///
    /// Always `false` for a successfully constructed genome.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Returns the underlying bits as a slice.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Returns an iterator over the bits.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Genome(\"{}\")", self)
    }
}

impl FromStr for Genome {
    type Err = GeneticError;

    /// Parses a genome from a string of `'0'` and `'1'` characters.
    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GeneticError::InvalidGenome(format!(
                    "invalid character '{}' in bit string",
                    other
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;
        Self::new(bits)
    }
}
