//! Error types shared by every module of the crate.
//!
//! All errors are reported synchronously to the caller. Nothing in the core
//! retries; a driver that wants to re-evaluate after a failure does so itself.

use thiserror::Error;

/// Errors raised by the multi-objective core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoeaError {
    /// An evaluation function (or a bulk assignment) produced a sequence whose
    /// length differs from the declared shape.
    #[error("incorrect number of {what}: expected {expected}, received {actual}")]
    DimensionMismatch {
        /// What was being counted (`"objectives"`, `"constraints"`, ...).
        what: &'static str,
        /// Declared length.
        expected: usize,
        /// Length actually received.
        actual: usize,
    },

    /// Normalization found an objective whose range is below machine epsilon.
    #[error("objective {objective} has an empty range ({range})")]
    DegenerateRange {
        /// Index of the offending objective.
        objective: usize,
        /// The observed `max - min`.
        range: f64,
    },

    /// A fixed-size container was accessed outside its declared bounds.
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfRange {
        /// Requested index (or range end).
        index: usize,
        /// Container length.
        len: usize,
    },

    /// A constraint expression could not be parsed.
    #[error("invalid constraint expression: {0}")]
    InvalidConstraint(String),

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An algorithm step finished without evaluating anything, so a run
    /// towards an evaluation budget could never end.
    #[error("algorithm stalled at {nfe} evaluations")]
    Stalled {
        /// Evaluation count when the step made no progress.
        nfe: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MoeaError>;
