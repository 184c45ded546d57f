//! Non-dominated archives.
//!
//! - [`Archive`]: incrementally maintained set of mutually non-dominated
//!   solutions under any [`Dominance`](crate::dominance::Dominance)
//! - [`FitnessArchive`]: archive that truncates itself with a fitness evaluator
//! - [`nondominated`]: one-shot extraction of the non-dominated subset

mod fitness;
mod nondominated;

pub use fitness::FitnessArchive;
pub use nondominated::{nondominated, Archive, DuplicatePolicy};
