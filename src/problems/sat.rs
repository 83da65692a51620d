//! # CNF / 3-SAT Problem
//!
//! A clause-satisfaction evaluator over CNF formulas. Construction reduces
//! every clause to at most three literals by recursively splitting long
//! clauses around fresh auxiliary variables, then canonicalizes and
//! deduplicates the clause list. The reduction is preprocessing that
//! produces a fitness function; the engine itself knows nothing of it.
//!
//! Literals are non-zero integers: `v` means variable `v` must be true,
//! `-v` that it must be false. Variables are 1-based and densely indexed
//! into the genome, so literal `v` reads genome bit `v - 1`. Auxiliary
//! variables extend the variable space, and the genome length the formula
//! declares equals the post-reduction variable count.
//!
//! ## Example
//!
//! ```rust
//! use evobits::fitness::FitnessFunction;
//! use evobits::genome::Genome;
//! use evobits::problems::sat::SatFormula;
//!
//! fn main() -> evobits::error::Result<()> {
//!     // (x1 or x2) and (x3 or not x1)
//!     let formula = SatFormula::new(vec![vec![1, 2], vec![3, -1]])?;
//!     assert_eq!(formula.genome_length(), 3);
//!
//!     let assignment: Genome = "011".parse()?;
//!     assert_eq!(formula.score(&assignment), 2.0);
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;

use crate::error::{GeneticError, Result};
use crate::fitness::FitnessFunction;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

/// A CNF formula reduced to clauses of at most three literals, usable as a
/// fitness function counting satisfied clauses.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SatFormula {
    clauses: Vec<Vec<i32>>,
    num_variables: usize,
    num_input_variables: usize,
}

impl SatFormula {
    /// Creates a formula from CNF clauses, reducing to 3-SAT form.
    ///
    /// A clause longer than three literals takes a fresh auxiliary variable
    /// `k` and splits at its midpoint into `left + [k]` and `right + [-k]`,
    /// recursing on both halves. Afterwards every clause is canonicalized
    /// (literals sorted) and duplicates are dropped, first occurrence kept.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the clause list is empty,
    /// any clause is empty, or any literal is zero.
    pub fn new(clauses: Vec<Vec<i32>>) -> Result<Self> {
        if clauses.is_empty() {
            return Err(GeneticError::Configuration(
                "formula must contain at least one clause".to_string(),
            ));
        }
        let mut num_input_variables: usize = 0;
        for clause in &clauses {
            if clause.is_empty() {
                return Err(GeneticError::Configuration(
                    "clauses must contain at least one literal".to_string(),
                ));
            }
            for &literal in clause {
                if literal == 0 {
                    return Err(GeneticError::Configuration(
                        "literals must be non-zero".to_string(),
                    ));
                }
                num_input_variables = num_input_variables.max(literal.unsigned_abs() as usize);
            }
        }

        let mut next_variable = num_input_variables;
        let mut reduced = Vec::new();
        for clause in clauses {
            Self::reduce_clause(clause, &mut next_variable, &mut reduced);
        }

        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for mut clause in reduced {
            clause.sort_unstable();
            if seen.insert(clause.clone()) {
                unique.push(clause);
            }
        }

        Ok(Self {
            clauses: unique,
            num_variables: next_variable,
            num_input_variables,
        })
    }

    /// Splits a clause into 3-SAT form, minting auxiliary variables as
    /// needed.
    fn reduce_clause(clause: Vec<i32>, next_variable: &mut usize, out: &mut Vec<Vec<i32>>) {
        if clause.len() <= 3 {
            out.push(clause);
            return;
        }

        *next_variable += 1;
        let auxiliary = *next_variable as i32;
        let mid = clause.len() / 2;

        let mut left = clause[..mid].to_vec();
        left.push(auxiliary);
        let mut right = clause[mid..].to_vec();
        right.push(-auxiliary);

        Self::reduce_clause(left, next_variable, out);
        Self::reduce_clause(right, next_variable, out);
    }

    /// Returns the genome length this formula expects: the post-reduction
    /// variable count, auxiliary variables included.
    pub fn genome_length(&self) -> usize {
        self.num_variables
    }

    /// Returns the number of variables in the input formula, before
    /// reduction.
    pub fn num_input_variables(&self) -> usize {
        self.num_input_variables
    }

    /// Returns the number of clauses after reduction and deduplication.
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Returns the reduced clauses.
    pub fn clauses(&self) -> &[Vec<i32>] {
        &self.clauses
    }

    /// Returns the number of clauses the assignment satisfies.
    ///
    /// Literal `v` is satisfied when bit `v - 1` is set, literal `-v` when
    /// bit `v - 1` is clear.
    pub fn satisfied_count(&self, assignment: &Genome) -> usize {
        self.clauses
            .iter()
            .filter(|clause| {
                clause.iter().any(|&literal| {
                    let index = literal.unsigned_abs() as usize - 1;
                    if index >= assignment.len() {
                        return false;
                    }
                    if literal > 0 {
                        assignment.bit(index)
                    } else {
                        !assignment.bit(index)
                    }
                })
            })
            .count()
    }

    /// Returns `true` if the assignment satisfies every clause.
    pub fn is_satisfied(&self, assignment: &Genome) -> bool {
        self.satisfied_count(assignment) == self.clauses.len()
    }
}

impl FitnessFunction for SatFormula {
    fn score(&self, genome: &Genome) -> f64 {
        self.satisfied_count(genome) as f64
    }
}

/// Generates a random 3-SAT instance as raw clauses: `num_clauses` clauses
/// of three literals each, over variables `1..=num_variables`, with each
/// literal negated with probability 0.5. Any variable the draw never
/// mentioned is appended to a random clause, so every variable occurs in the
/// formula.
///
/// # Errors
///
/// Returns `GeneticError::Configuration` if `num_variables` or `num_clauses`
/// is zero.
pub fn random_3sat(
    num_variables: usize,
    num_clauses: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Vec<i32>>> {
    if num_variables == 0 || num_clauses == 0 {
        return Err(GeneticError::Configuration(
            "a random 3-SAT instance needs at least one variable and one clause".to_string(),
        ));
    }

    let mut mentioned = vec![false; num_variables + 1];
    let mut clauses = Vec::with_capacity(num_clauses);
    for _ in 0..num_clauses {
        let mut clause = Vec::with_capacity(3);
        for _ in 0..3 {
            let variable = rng.gen_range(1..=num_variables);
            mentioned[variable] = true;
            let literal = if rng.uniform(0.0, 1.0) < 0.5 {
                variable as i32
            } else {
                -(variable as i32)
            };
            clause.push(literal);
        }
        clauses.push(clause);
    }

    for variable in 1..=num_variables {
        if !mentioned[variable] {
            let clause_index = rng.gen_range(0..num_clauses);
            clauses[clause_index].push(variable as i32);
        }
    }

    Ok(clauses)
}
