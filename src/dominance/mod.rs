//! Dominance relations.
//!
//! A [`Dominance`] compares two evaluated solutions and returns an
//! [`Ordering`]:
//!
//! - [`Ordering::Less`]: the first solution dominates (is preferred)
//! - [`Ordering::Greater`]: the second solution dominates
//! - [`Ordering::Equal`]: neither dominates; the pair is incomparable
//!
//! # Variants
//!
//! - [`ParetoDominance`]: classic Pareto dominance with constraint handling
//! - [`EpsilonDominance`]: Pareto dominance over an epsilon-box grid
//! - [`AttributeDominance`]: ordering by a user-supplied key
//!
//! # References
//!
//! - Deb (2000), "An efficient constraint handling method for genetic algorithms"
//! - Laumanns et al. (2002), "Combining Convergence and Diversity in
//!   Evolutionary Multiobjective Optimization"

mod attribute;
mod epsilon;
mod pareto;

pub use attribute::AttributeDominance;
pub use epsilon::EpsilonDominance;
pub use pareto::ParetoDominance;

use crate::model::Solution;
use std::cmp::Ordering;

/// A relation deciding which of two solutions is preferred.
///
/// Both solutions must be evaluated and belong to the same problem.
pub trait Dominance {
    /// Compares `a` against `b`. See the [module docs](self) for the
    /// meaning of each [`Ordering`].
    fn compare(&self, a: &Solution, b: &Solution) -> Ordering;
}

impl<D: Dominance + ?Sized> Dominance for &D {
    fn compare(&self, a: &Solution, b: &Solution) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Constraint-first comparison shared by the Pareto-style relations.
///
/// Returns `None` when the problem is unconstrained or both violations are
/// equal, meaning the objectives must decide. Otherwise a feasible solution
/// beats an infeasible one, and between two infeasible solutions the smaller
/// violation wins.
pub(crate) fn compare_violation(a: &Solution, b: &Solution) -> Option<Ordering> {
    if a.problem().constraint_count() == 0 || a.constraint_violation == b.constraint_violation {
        return None;
    }

    if a.constraint_violation == 0.0 {
        Some(Ordering::Less)
    } else if b.constraint_violation == 0.0 {
        Some(Ordering::Greater)
    } else {
        a.constraint_violation.partial_cmp(&b.constraint_violation)
    }
}

/// Folds per-objective comparisons into a dominance outcome.
///
/// `pairs` yields `(a, b)` values already oriented for minimization. Stops
/// as soon as both sides have been strictly better somewhere.
pub(crate) fn compare_oriented<I>(pairs: I) -> Ordering
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut dominate1 = false;
    let mut dominate2 = false;

    for (o1, o2) in pairs {
        if o1 < o2 {
            dominate1 = true;
            if dominate2 {
                return Ordering::Equal;
            }
        } else if o1 > o2 {
            dominate2 = true;
            if dominate1 {
                return Ordering::Equal;
            }
        }
    }

    match (dominate1, dominate2) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
