//! Candidate solutions.

use super::fixed::FixedArray;
use super::problem::Problem;
use crate::error::Result;
use std::fmt;
use std::sync::Arc;

/// A candidate point in the search space.
///
/// Holds the decision variables, the values written by
/// [`Problem::evaluate`], and the metadata assigned by ranking and fitness
/// routines. Objectives, constraints, and `constraint_violation` are only
/// meaningful once `evaluated` is `true`.
///
/// The problem is held through a shared [`Arc`] handle: cloning a solution
/// deep-copies its own fields and re-attaches the same problem.
///
/// The value containers are read through accessors and always keep the
/// problem's shape; only their contents can be written from outside.
///
/// ```compile_fail
/// # use std::sync::Arc;
/// # use u_moea::model::{FixedArray, Problem, Solution};
/// # let problem = Arc::new(Problem::new(2, 1, 0, |v: &[f64]| vec![v[0]]));
/// let mut solution = Solution::new(&problem);
/// solution.variables = FixedArray::new(5, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    problem: Arc<Problem>,

    /// Decision variables.
    pub(crate) variables: FixedArray<f64>,

    /// Objective values.
    pub(crate) objectives: FixedArray<f64>,

    /// Raw constraint values as returned by the evaluation function.
    pub(crate) constraints: FixedArray<f64>,

    /// Sum of absolute constraint violations; zero means feasible.
    pub constraint_violation: f64,

    /// Whether the problem has evaluated this solution.
    pub evaluated: bool,

    /// Index of the non-dominated front (0 = best).
    pub rank: usize,

    /// Crowding distance within its front; `f64::INFINITY` for boundary points.
    pub crowding_distance: f64,

    /// Scalar fitness assigned by a fitness evaluator.
    pub fitness: f64,

    /// Objectives scaled into the population's `[0, 1]` ranges.
    pub(crate) normalized_objectives: FixedArray<f64>,
}

impl Solution {
    /// Creates an unevaluated solution for `problem` with all variables at zero.
    pub fn new(problem: &Arc<Problem>) -> Self {
        Self {
            problem: Arc::clone(problem),
            variables: FixedArray::new(problem.variable_count(), 0.0),
            objectives: FixedArray::new(problem.objective_count(), 0.0),
            constraints: FixedArray::new(problem.constraint_count(), 0.0),
            constraint_violation: 0.0,
            evaluated: false,
            rank: 0,
            crowding_distance: 0.0,
            fitness: 0.0,
            normalized_objectives: FixedArray::new(problem.objective_count(), 0.0),
        }
    }

    /// Sets the decision variables. `variables` must match the problem's
    /// variable count.
    pub fn with_variables(mut self, variables: &[f64]) -> Result<Self> {
        self.variables.copy_from(variables)?;
        self.evaluated = false;
        Ok(self)
    }

    /// Decision variables.
    pub fn variables(&self) -> &FixedArray<f64> {
        &self.variables
    }

    /// Writable decision variables. Marks the solution unevaluated.
    pub fn variables_mut(&mut self) -> &mut [f64] {
        self.evaluated = false;
        self.variables.as_mut_slice()
    }

    /// Objective values, meaningful once evaluated.
    pub fn objectives(&self) -> &FixedArray<f64> {
        &self.objectives
    }

    /// Raw constraint values, meaningful once evaluated.
    pub fn constraints(&self) -> &FixedArray<f64> {
        &self.constraints
    }

    /// Objectives scaled by the last normalization pass.
    pub fn normalized_objectives(&self) -> &FixedArray<f64> {
        &self.normalized_objectives
    }

    /// The problem this solution belongs to.
    pub fn problem(&self) -> &Arc<Problem> {
        &self.problem
    }

    /// Evaluates this solution with its own problem.
    pub fn evaluate(&mut self) -> Result<()> {
        let problem = Arc::clone(&self.problem);
        problem.evaluate(self)
    }

    /// Whether the solution satisfies every constraint.
    pub fn is_feasible(&self) -> bool {
        self.constraint_violation == 0.0
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solution[")?;
        for (i, value) in self.objectives.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
