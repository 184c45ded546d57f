//! Pareto dominance.

use super::{compare_oriented, compare_violation, Dominance};
use crate::model::Solution;
use std::cmp::Ordering;

/// Classic Pareto dominance.
///
/// Constraint violation is checked first: a feasible solution (or the one
/// with smaller violation) wins outright. Otherwise `a` dominates `b` when it
/// is no worse in every objective and strictly better in at least one.
/// Maximized objectives are negated before comparison.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use std::sync::Arc;
/// use u_moea::dominance::{Dominance, ParetoDominance};
/// use u_moea::model::{Problem, Solution};
///
/// let problem = Arc::new(Problem::new(2, 2, 0, |v: &[f64]| v.to_vec()));
/// let mut a = Solution::new(&problem).with_variables(&[1.0, 1.0]).unwrap();
/// let mut b = Solution::new(&problem).with_variables(&[2.0, 1.0]).unwrap();
/// a.evaluate().unwrap();
/// b.evaluate().unwrap();
///
/// assert_eq!(ParetoDominance.compare(&a, &b), Ordering::Less);
/// assert_eq!(ParetoDominance.compare(&b, &a), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParetoDominance;

impl Dominance for ParetoDominance {
    fn compare(&self, a: &Solution, b: &Solution) -> Ordering {
        if let Some(outcome) = compare_violation(a, b) {
            return outcome;
        }

        let directions = a.problem().directions();
        debug_assert_eq!(a.objectives.len(), b.objectives.len());

        compare_oriented(
            directions
                .iter()
                .zip(a.objectives.iter().zip(b.objectives.iter()))
                .map(|(dir, (&o1, &o2))| (dir.orient(o1), dir.orient(o2))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Direction;
    use crate::test_utils::{
        constrained_problem, constrained_solution, directed_problem, identity_problem, solution,
    };
    use proptest::prelude::*;

    #[test]
    fn test_strictly_better_everywhere() {
        let p = identity_problem(2);
        let a = solution(&p, &[1.0, 1.0]);
        let b = solution(&p, &[2.0, 2.0]);
        assert_eq!(ParetoDominance.compare(&a, &b), Ordering::Less);
        assert_eq!(ParetoDominance.compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_trade_off_is_incomparable() {
        let p = identity_problem(2);
        let a = solution(&p, &[1.0, 3.0]);
        let b = solution(&p, &[3.0, 1.0]);
        assert_eq!(ParetoDominance.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_identical_is_incomparable() {
        let p = identity_problem(3);
        let a = solution(&p, &[1.0, 2.0, 3.0]);
        let b = solution(&p, &[1.0, 2.0, 3.0]);
        assert_eq!(ParetoDominance.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_weak_dominance() {
        let p = identity_problem(2);
        let a = solution(&p, &[1.0, 2.0]);
        let b = solution(&p, &[1.0, 3.0]);
        assert_eq!(ParetoDominance.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_maximize_flips_direction() {
        let p = directed_problem(&[Direction::Minimize, Direction::Maximize]);
        let a = solution(&p, &[1.0, 5.0]);
        let b = solution(&p, &[1.0, 3.0]);
        assert_eq!(ParetoDominance.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_constraints_short_circuit_objectives() {
        let p = constrained_problem(2);
        let feasible = constrained_solution(&p, &[9.0, 9.0], 0.0);
        let infeasible = constrained_solution(&p, &[0.0, 0.0], 1.0);
        assert_eq!(ParetoDominance.compare(&feasible, &infeasible), Ordering::Less);
        assert_eq!(ParetoDominance.compare(&infeasible, &feasible), Ordering::Greater);
    }

    #[test]
    fn test_equal_violation_falls_back_to_objectives() {
        let p = constrained_problem(2);
        let a = constrained_solution(&p, &[1.0, 1.0], 2.0);
        let b = constrained_solution(&p, &[2.0, 2.0], 2.0);
        assert_eq!(ParetoDominance.compare(&a, &b), Ordering::Less);
    }

    proptest! {
        #[test]
        fn prop_antisymmetric(
            a in prop::collection::vec(-10.0f64..10.0, 3),
            b in prop::collection::vec(-10.0f64..10.0, 3),
        ) {
            let p = identity_problem(3);
            let sa = solution(&p, &a);
            let sb = solution(&p, &b);
            prop_assert_eq!(
                ParetoDominance.compare(&sa, &sb),
                ParetoDominance.compare(&sb, &sa).reverse()
            );
        }

        #[test]
        fn prop_strict_improvement_dominates(
            a in prop::collection::vec(-10.0f64..10.0, 3),
            delta in prop::collection::vec(0.01f64..5.0, 3),
        ) {
            let p = identity_problem(3);
            let b: Vec<f64> = a.iter().zip(&delta).map(|(x, d)| x + d).collect();
            let sa = solution(&p, &a);
            let sb = solution(&p, &b);
            prop_assert_eq!(ParetoDominance.compare(&sa, &sb), Ordering::Less);
        }
    }
}
