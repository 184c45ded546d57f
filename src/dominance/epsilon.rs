//! Epsilon-box dominance.

use super::{compare_oriented, compare_violation, Dominance};
use crate::error::{MoeaError, Result};
use crate::model::Solution;
use std::cmp::Ordering;

/// Pareto dominance evaluated on an epsilon-box grid.
///
/// Objective space is divided into boxes of side `epsilon` (per objective,
/// reused cyclically when fewer epsilons than objectives are given). Two
/// solutions are compared by their box indices `floor(value / epsilon)`.
/// When the boxes tie, the solution closer to the lower corner of its own
/// box wins, so the relation never reports a pair in the same box as
/// incomparable.
///
/// Used as the archive relation, it keeps at most one solution per box.
#[derive(Debug, Clone, PartialEq)]
pub struct EpsilonDominance {
    epsilons: Vec<f64>,
}

impl EpsilonDominance {
    /// Creates the relation.
    ///
    /// # Errors
    /// [`MoeaError::InvalidConfig`] if `epsilons` is empty or contains a
    /// non-positive or non-finite value.
    pub fn new(epsilons: Vec<f64>) -> Result<Self> {
        if epsilons.is_empty() {
            return Err(MoeaError::InvalidConfig("epsilons must not be empty".into()));
        }
        if let Some(bad) = epsilons.iter().find(|e| !(e.is_finite() && **e > 0.0)) {
            return Err(MoeaError::InvalidConfig(format!(
                "epsilons must be positive and finite, got {bad}"
            )));
        }
        Ok(Self { epsilons })
    }

    /// The configured epsilons.
    pub fn epsilons(&self) -> &[f64] {
        &self.epsilons
    }

    /// Epsilon applied to objective `index`.
    #[inline]
    pub fn epsilon(&self, index: usize) -> f64 {
        self.epsilons[index % self.epsilons.len()]
    }

    /// Oriented value, box index, and epsilon of every objective of `s`.
    fn boxes<'a>(&'a self, s: &'a Solution) -> impl Iterator<Item = (f64, f64, f64)> + 'a {
        s.problem()
            .directions()
            .iter()
            .zip(s.objectives.iter())
            .enumerate()
            .map(move |(i, (dir, &value))| {
                let value = dir.orient(value);
                let epsilon = self.epsilon(i);
                (value, (value / epsilon).floor(), epsilon)
            })
    }

    /// Squared distance from `s` to the lower corner of its box.
    fn corner_distance(&self, s: &Solution) -> f64 {
        self.boxes(s)
            .map(|(value, index, epsilon)| (value - index * epsilon).powi(2))
            .sum()
    }
}

impl Dominance for EpsilonDominance {
    fn compare(&self, a: &Solution, b: &Solution) -> Ordering {
        if let Some(outcome) = compare_violation(a, b) {
            return outcome;
        }

        let boxed = compare_oriented(
            self.boxes(a)
                .zip(self.boxes(b))
                .map(|((_, i1, _), (_, i2, _))| (i1, i2)),
        );

        if boxed != Ordering::Equal {
            return boxed;
        }

        // Equal also means "both better somewhere"; only a full tie of box
        // indices goes to the corner-distance fallback.
        let same_box = self
            .boxes(a)
            .zip(self.boxes(b))
            .all(|((_, i1, _), (_, i2, _))| i1 == i2);
        if !same_box {
            return Ordering::Equal;
        }

        if self.corner_distance(a) < self.corner_distance(b) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}
