//! Trait definitions for algorithm drivers and their operators.
//!
//! The core ships no concrete operators. A driver combines a
//! [`Generator`], a [`Selector`], and a [`Variator`] with the ranking and
//! fitness routines of this crate, and implements [`Algorithm`] so callers
//! can run it against an evaluation budget.

use crate::error::{MoeaError, Result};
use crate::model::{Problem, Solution};
use log::trace;
use rand::Rng;
use std::sync::Arc;

/// An iterative optimizer advancing one generation per [`step`](Algorithm::step).
pub trait Algorithm {
    /// The problem being optimized.
    fn problem(&self) -> &Arc<Problem>;

    /// Number of function evaluations performed so far.
    fn nfe(&self) -> usize;

    /// Advances the search by one generation.
    fn step(&mut self) -> Result<()>;

    /// Steps until at least `evaluations` function evaluations have been
    /// performed.
    ///
    /// # Errors
    ///
    /// Propagates step errors. Returns [`MoeaError::Stalled`] if a step
    /// leaves the evaluation count unchanged.
    fn run(&mut self, evaluations: usize) -> Result<()> {
        while self.nfe() < evaluations {
            let before = self.nfe();
            self.step()?;
            if self.nfe() == before {
                return Err(MoeaError::Stalled { nfe: before });
            }
            trace!("step finished at {} evaluations", self.nfe());
        }
        Ok(())
    }
}

/// Creates initial solutions.
pub trait Generator {
    /// Creates one unevaluated solution of `problem`.
    fn generate<R: Rng>(&self, problem: &Arc<Problem>, rng: &mut R) -> Solution;
}

/// Produces offspring from parents (crossover, mutation, or both).
pub trait Variator {
    /// Number of parents consumed by one call to [`evolve`](Variator::evolve).
    fn arity(&self) -> usize;

    /// Creates offspring from exactly [`arity`](Variator::arity) parents.
    /// Offspring are returned unevaluated.
    fn evolve<R: Rng>(&self, parents: &[&Solution], rng: &mut R) -> Vec<Solution>;
}

/// A single-parent variation operator.
///
/// Every `Mutation` is a [`Variator`] of arity 1 whose `evolve` mutates each
/// parent it is given.
pub trait Mutation {
    /// Creates one unevaluated child from `parent`.
    fn mutate<R: Rng>(&self, parent: &Solution, rng: &mut R) -> Solution;
}

impl<M: Mutation> Variator for M {
    fn arity(&self) -> usize {
        1
    }

    fn evolve<R: Rng>(&self, parents: &[&Solution], rng: &mut R) -> Vec<Solution> {
        parents.iter().map(|parent| self.mutate(parent, rng)).collect()
    }
}

/// Chooses parents from a population.
pub trait Selector {
    /// Picks one solution. `population` must not be empty.
    fn select_one<'a, R: Rng>(&self, population: &'a [Solution], rng: &mut R) -> &'a Solution;

    /// Picks `n` solutions, with replacement.
    fn select<'a, R: Rng>(
        &self,
        n: usize,
        population: &'a [Solution],
        rng: &mut R,
    ) -> Vec<&'a Solution> {
        (0..n).map(|_| self.select_one(population, rng)).collect()
    }
}
