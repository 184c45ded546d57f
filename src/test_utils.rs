//! Shared fixtures for unit tests.

use crate::model::{Direction, Problem, Solution};
use std::sync::Arc;

/// Routes `log` output to the test harness. Safe to call from every test.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Problem whose objectives are its variables, all minimized.
pub(crate) fn identity_problem(nobjs: usize) -> Arc<Problem> {
    Arc::new(Problem::new(nobjs, nobjs, 0, |v: &[f64]| v.to_vec()))
}

/// Identity problem with explicit directions.
pub(crate) fn directed_problem(directions: &[Direction]) -> Arc<Problem> {
    let nobjs = directions.len();
    Arc::new(
        Problem::new(nobjs, nobjs, 0, |v: &[f64]| v.to_vec())
            .with_directions(directions)
            .unwrap(),
    )
}

/// Identity problem plus one `<=0` constraint read from the last variable.
pub(crate) fn constrained_problem(nobjs: usize) -> Arc<Problem> {
    Arc::new(
        Problem::new(nobjs + 1, nobjs, 1, move |v: &[f64]| {
            (v[..nobjs].to_vec(), vec![v[nobjs]])
        })
        .with_constraints(&["<=0"])
        .unwrap(),
    )
}

/// Evaluated solution of an identity problem.
pub(crate) fn solution(problem: &Arc<Problem>, objectives: &[f64]) -> Solution {
    let mut s = Solution::new(problem).with_variables(objectives).unwrap();
    s.evaluate().unwrap();
    s
}

/// Evaluated solution of a [`constrained_problem`].
pub(crate) fn constrained_solution(
    problem: &Arc<Problem>,
    objectives: &[f64],
    constraint: f64,
) -> Solution {
    let mut variables = objectives.to_vec();
    variables.push(constraint);
    solution(problem, &variables)
}

/// Evaluated population over a fresh identity problem.
pub(crate) fn population(points: &[&[f64]]) -> Vec<Solution> {
    let problem = identity_problem(points[0].len());
    points.iter().map(|p| solution(&problem, p)).collect()
}

/// Objective vectors of `solutions`, for readable assertions.
pub(crate) fn objectives_of(solutions: &[Solution]) -> Vec<Vec<f64>> {
    solutions.iter().map(|s| s.objectives.as_slice().to_vec()).collect()
}
