//! Attribute-based ordering.

use super::Dominance;
use crate::model::Solution;
use std::cmp::Ordering;

/// Orders solutions by a key extracted from each one.
///
/// Smaller keys are preferred. There is no constraint handling: the key is
/// the only thing compared. Incomparable keys (NaN) compare as equal.
///
/// ```
/// use u_moea::dominance::AttributeDominance;
///
/// // prefer lower rank
/// let by_rank = AttributeDominance::by_rank();
/// // prefer larger crowding distance
/// let by_spread = AttributeDominance::new(|s: &u_moea::model::Solution| -s.crowding_distance);
/// # let _ = (by_rank, by_spread);
/// ```
#[derive(Clone, Copy)]
pub struct AttributeDominance<F> {
    key: F,
}

impl<F> AttributeDominance<F> {
    /// Creates the relation from a key accessor.
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl AttributeDominance<fn(&Solution) -> usize> {
    /// Orders by non-dominated rank.
    pub fn by_rank() -> Self {
        Self::new(|s| s.rank)
    }
}

impl AttributeDominance<fn(&Solution) -> f64> {
    /// Orders by fitness, smaller first.
    pub fn by_fitness() -> Self {
        Self::new(|s| s.fitness)
    }
}

impl<F, K> Dominance for AttributeDominance<F>
where
    F: Fn(&Solution) -> K,
    K: PartialOrd,
{
    fn compare(&self, a: &Solution, b: &Solution) -> Ordering {
        (self.key)(a)
            .partial_cmp(&(self.key)(b))
            .unwrap_or(Ordering::Equal)
    }
}

impl<F> std::fmt::Debug for AttributeDominance<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeDominance").finish_non_exhaustive()
    }
}
