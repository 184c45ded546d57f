//! Problem definition.
//!
//! A [`Problem`] fixes the shape of a search space (variable, objective, and
//! constraint counts), the optimization direction of each objective, the
//! constraint expressions, and the user's evaluation function. It is built
//! once per run, wrapped in an [`Arc`](std::sync::Arc), and shared read-only
//! by every [`Solution`] derived from it.

use super::constraint::Constraint;
use super::fixed::FixedArray;
use super::solution::Solution;
use crate::error::{MoeaError, Result};
use std::fmt;

/// Optimization direction of one objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Lower values are better.
    #[default]
    Minimize,
    /// Higher values are better.
    Maximize,
}

impl Direction {
    /// Maps a raw objective value onto a minimization scale.
    #[inline]
    pub fn orient(self, value: f64) -> f64 {
        match self {
            Direction::Minimize => value,
            Direction::Maximize => -value,
        }
    }
}

/// Output of an evaluation function.
///
/// Unconstrained problems may simply return their objective vector; the
/// `From<Vec<f64>>` conversion leaves `constraints` empty. Constrained
/// problems return an `(objectives, constraints)` pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Evaluation {
    /// Objective values, one per declared objective.
    pub objectives: Vec<f64>,
    /// Raw constraint values, one per declared constraint.
    pub constraints: Vec<f64>,
}

impl From<Vec<f64>> for Evaluation {
    fn from(objectives: Vec<f64>) -> Self {
        Self {
            objectives,
            constraints: Vec::new(),
        }
    }
}

impl From<(Vec<f64>, Vec<f64>)> for Evaluation {
    fn from((objectives, constraints): (Vec<f64>, Vec<f64>)) -> Self {
        Self {
            objectives,
            constraints,
        }
    }
}

type EvaluationFn = dyn Fn(&[f64]) -> Evaluation + Send + Sync;

/// An optimization problem.
///
/// Counts are fixed at construction. Directions default to
/// [`Direction::Minimize`] and constraints to `"==0"`; both can be adjusted
/// until the problem is shared.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use u_moea::model::{Direction, Problem, Solution};
///
/// // Schaffer N.1: minimize x² and (x-2)²
/// let problem = Arc::new(Problem::new(1, 2, 0, |x: &[f64]| {
///     vec![x[0] * x[0], (x[0] - 2.0) * (x[0] - 2.0)]
/// }));
///
/// let mut solution = Solution::new(&problem).with_variables(&[1.0]).unwrap();
/// solution.evaluate().unwrap();
/// assert_eq!(solution.objectives().as_slice(), &[1.0, 1.0]);
/// assert_eq!(problem.direction(0), Direction::Minimize);
/// ```
pub struct Problem {
    nvars: usize,
    nobjs: usize,
    nconstrs: usize,
    directions: FixedArray<Direction>,
    constraints: FixedArray<Constraint>,
    function: Box<EvaluationFn>,
}

impl Problem {
    /// Creates a problem with the given shape and evaluation function.
    pub fn new<F, E>(nvars: usize, nobjs: usize, nconstrs: usize, function: F) -> Self
    where
        F: Fn(&[f64]) -> E + Send + Sync + 'static,
        E: Into<Evaluation>,
    {
        Self {
            nvars,
            nobjs,
            nconstrs,
            directions: FixedArray::new(nobjs, Direction::Minimize),
            constraints: FixedArray::new(nconstrs, Constraint::default()),
            function: Box::new(move |variables: &[f64]| function(variables).into()),
        }
    }

    /// Sets every objective's direction. A single direction is broadcast.
    pub fn with_directions(mut self, directions: &[Direction]) -> Result<Self> {
        self.directions.assign(0..self.nobjs, directions)?;
        Ok(self)
    }

    /// Sets every constraint from its textual form. A single expression is
    /// broadcast.
    pub fn with_constraints(mut self, expressions: &[&str]) -> Result<Self> {
        let parsed = expressions
            .iter()
            .map(|text| Constraint::parse(text))
            .collect::<Result<Vec<_>>>()?;
        self.constraints.assign(0..self.nconstrs, &parsed)?;
        Ok(self)
    }

    /// Sets the direction of objective `index`.
    pub fn set_direction(&mut self, index: usize, direction: Direction) -> Result<()> {
        self.directions.set(index, direction)
    }

    /// Sets constraint `index`.
    pub fn set_constraint(&mut self, index: usize, constraint: Constraint) -> Result<()> {
        self.constraints.set(index, constraint)
    }

    /// Number of decision variables.
    pub fn variable_count(&self) -> usize {
        self.nvars
    }

    /// Number of objectives.
    pub fn objective_count(&self) -> usize {
        self.nobjs
    }

    /// Number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.nconstrs
    }

    /// Direction of objective `index`.
    ///
    /// # Panics
    /// Panics if `index >= objective_count()`.
    pub fn direction(&self, index: usize) -> Direction {
        self.directions[index]
    }

    /// All objective directions.
    pub fn directions(&self) -> &[Direction] {
        self.directions.as_slice()
    }

    /// All constraints.
    pub fn constraints(&self) -> &[Constraint] {
        self.constraints.as_slice()
    }

    /// Sum of absolute constraint violations for raw constraint `values`.
    pub fn violation(&self, values: &[f64]) -> f64 {
        self.constraints
            .iter()
            .zip(values)
            .map(|(constraint, &value)| constraint.violation(value).abs())
            .sum()
    }

    /// Evaluates `solution` in place.
    ///
    /// Calls the evaluation function on the solution's variables, checks the
    /// returned shape, and writes objectives, constraints, and the total
    /// constraint violation onto the solution.
    ///
    /// # Errors
    /// [`MoeaError::DimensionMismatch`] if the function returns the wrong
    /// number of objectives or constraints. The solution is left untouched.
    pub fn evaluate(&self, solution: &mut Solution) -> Result<()> {
        debug_assert_eq!(solution.variables.len(), self.nvars);

        let Evaluation {
            objectives,
            constraints,
        } = (self.function)(solution.variables.as_slice());

        if objectives.len() != self.nobjs {
            return Err(MoeaError::DimensionMismatch {
                what: "objectives",
                expected: self.nobjs,
                actual: objectives.len(),
            });
        }
        if constraints.len() != self.nconstrs {
            return Err(MoeaError::DimensionMismatch {
                what: "constraints",
                expected: self.nconstrs,
                actual: constraints.len(),
            });
        }

        solution.constraint_violation = self.violation(&constraints);
        solution.objectives = FixedArray::from_vec(objectives);
        solution.constraints = FixedArray::from_vec(constraints);
        solution.evaluated = true;
        Ok(())
    }
}

impl fmt::Debug for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("nvars", &self.nvars)
            .field("nobjs", &self.nobjs)
            .field("nconstrs", &self.nconstrs)
            .field("directions", &self.directions)
            .field("constraints", &self.constraints)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Problem with {} variables, {} objectives and {} constraints",
            self.nvars, self.nobjs, self.nconstrs
        )
    }
}
