//! Domain-agnostic multi-objective evolutionary core.
//!
//! Provides the mathematics that multi-objective evolutionary algorithms
//! share, independent of any particular driver:
//!
//! - **Model**: [`Problem`](model::Problem) (shape, directions, constraints,
//!   evaluation function) and [`Solution`](model::Solution) (variables,
//!   objectives, and ranking metadata), sharing the problem through an `Arc`.
//! - **Dominance**: Pareto, epsilon-box, and attribute relations behind the
//!   [`Dominance`](dominance::Dominance) trait.
//! - **Archive**: incrementally maintained set of mutually non-dominated
//!   solutions, optionally truncated by fitness.
//! - **Sorting**: non-dominated sorting, crowding distance, and the
//!   split/prune/truncate reduction strategies of NSGA-II.
//! - **Fitness**: IBEA-style indicator fitness with a recursive hypervolume
//!   indicator and O(n) incremental removal.
//! - **Algorithm**: the traits a driver implements on top of all of the above.
//!
//! # Conventions
//!
//! Every routine expects evaluated solutions of the same problem. Comparisons
//! return [`std::cmp::Ordering`], where `Less` means the first argument is
//! preferred. Ranks are 0-based with 0 the best front.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! contains no problem-specific concepts and no concrete variation
//! operators; those belong to consumers at higher layers.

pub mod algorithm;
pub mod archive;
pub mod dominance;
pub mod error;
pub mod fitness;
pub mod model;
pub mod sorting;

#[cfg(test)]
mod test_utils;

pub use error::{MoeaError, Result};

/// Smallest objective range treated as non-degenerate.
pub const EPSILON: f64 = f64::EPSILON;
