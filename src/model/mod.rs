//! Problem, solution, and constraint abstractions.
//!
//! # Key Types
//!
//! - [`Problem`]: Shape, directions, constraints, and evaluation function
//! - [`Solution`]: A candidate point plus the metadata ranking routines assign
//! - [`Constraint`]: Relational constraint parsed from text like `"<=0"`
//! - [`FixedArray`]: Bounds-checked fixed-length storage used by solutions
//!
//! A problem is built once, wrapped in an `Arc`, and shared by every
//! solution created from it.

mod constraint;
mod fixed;
mod problem;
mod solution;

pub use constraint::{Constraint, Operator};
pub use fixed::FixedArray;
pub use problem::{Direction, Evaluation, Problem};
pub use solution::Solution;
