//! Driver contract for evolutionary algorithms.
//!
//! # Key Types
//!
//! - [`Algorithm`]: `step` one generation, `run` to an evaluation budget
//! - [`Generator`]: creates initial solutions
//! - [`Variator`]: turns parents into offspring
//! - [`Mutation`]: single-parent operator, usable wherever a `Variator` is
//! - [`Selector`]: picks parents from a ranked population
//!
//! [`evaluate_all`] evaluates the unevaluated members of a population and
//! reports how many evaluations it spent. It is the one place where the
//! `parallel` feature applies.
//!
//! # Generation Loop
//!
//! A typical NSGA-II style step:
//!
//! 1. select parents and evolve offspring
//! 2. [`evaluate_all`] the offspring, add the count to the driver's NFE
//! 3. merge parents and offspring, [`nondominated_sort`](crate::sorting::nondominated_sort)
//! 4. reduce with [`nondominated_truncate`](crate::sorting::nondominated_truncate)
//!    or [`nondominated_prune`](crate::sorting::nondominated_prune)
//!
//! An IBEA style step replaces 3–4 with a
//! [`FitnessEvaluator`](crate::fitness::FitnessEvaluator): evaluate once, then
//! repeatedly `remove` the largest fitness.

mod evaluate;
mod types;

pub use evaluate::evaluate_all;
pub use types::{Algorithm, Generator, Mutation, Selector, Variator};
