//! Objective normalization.

use crate::error::{MoeaError, Result};
use crate::model::Solution;
use crate::EPSILON;
use log::warn;

/// Per-objective bounds used to scale objectives into `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    /// Lower bound of each objective.
    pub minimum: Vec<f64>,
    /// Upper bound of each objective.
    pub maximum: Vec<f64>,
}

/// Scales every solution's objectives into `normalized_objectives`.
///
/// Missing bounds are computed from the feasible solutions, or from the
/// whole population when none is feasible. Every solution is written,
/// so infeasible members may land outside `[0, 1]`.
///
/// Returns the bounds that were applied (empty for an empty population).
///
/// # Errors
///
/// - [`MoeaError::DimensionMismatch`] if supplied bounds have the wrong length.
/// - [`MoeaError::DegenerateRange`] if any objective's `max - min` is below
///   [`EPSILON`]. No solution is modified in that case.
pub fn normalize(
    solutions: &mut [Solution],
    minimum: Option<&[f64]>,
    maximum: Option<&[f64]>,
) -> Result<Bounds> {
    let Some(first) = solutions.first() else {
        return Ok(Bounds {
            minimum: Vec::new(),
            maximum: Vec::new(),
        });
    };
    let m = first.problem().objective_count();

    let feasible: Vec<&Solution> = solutions.iter().filter(|s| s.is_feasible()).collect();
    let source: Vec<&Solution> = if feasible.is_empty() {
        solutions.iter().collect()
    } else {
        feasible
    };

    let minimum = resolve(minimum, m, || {
        (0..m)
            .map(|i| source.iter().map(|s| s.objectives[i]).fold(f64::INFINITY, f64::min))
            .collect()
    })?;
    let maximum = resolve(maximum, m, || {
        (0..m)
            .map(|i| source.iter().map(|s| s.objectives[i]).fold(f64::NEG_INFINITY, f64::max))
            .collect()
    })?;

    for (objective, (lo, hi)) in minimum.iter().zip(&maximum).enumerate() {
        let range = hi - lo;
        if range.is_nan() || range < EPSILON {
            warn!("cannot normalize objective {objective}: range {range}");
            return Err(MoeaError::DegenerateRange { objective, range });
        }
    }

    for s in solutions.iter_mut() {
        for i in 0..m {
            let value = (s.objectives[i] - minimum[i]) / (maximum[i] - minimum[i]);
            s.normalized_objectives.set(i, value)?;
        }
    }

    Ok(Bounds { minimum, maximum })
}

fn resolve<F>(given: Option<&[f64]>, m: usize, compute: F) -> Result<Vec<f64>>
where
    F: FnOnce() -> Vec<f64>,
{
    match given {
        Some(values) if values.len() != m => Err(MoeaError::DimensionMismatch {
            what: "bounds",
            expected: m,
            actual: values.len(),
        }),
        Some(values) => Ok(values.to_vec()),
        None => Ok(compute()),
    }
}
