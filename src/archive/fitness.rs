//! Archive truncated by fitness.

use super::nondominated::Archive;
use crate::dominance::{Dominance, ParetoDominance};
use crate::error::Result;
use crate::fitness::FitnessEvaluator;
use crate::model::Solution;
use crate::sorting::truncate_by_fitness;
use log::debug;

/// A non-dominated archive that can be cut down to a fixed size using a
/// [`FitnessEvaluator`].
///
/// By default smaller fitness is preferred, matching the convention of
/// [`IndicatorFitnessEvaluator`](crate::fitness::IndicatorFitnessEvaluator)
/// where a larger value means "more dominated by the rest".
#[derive(Debug, Clone)]
pub struct FitnessArchive<E, D = ParetoDominance> {
    archive: Archive<Solution, D>,
    evaluator: E,
    larger_preferred: bool,
}

impl<E: FitnessEvaluator> FitnessArchive<E, ParetoDominance> {
    /// Creates an empty archive under Pareto dominance.
    pub fn new(evaluator: E) -> Self {
        Self::with_dominance(evaluator, ParetoDominance)
    }
}

impl<E: FitnessEvaluator, D: Dominance> FitnessArchive<E, D> {
    /// Creates an empty archive under the given relation.
    pub fn with_dominance(evaluator: E, dominance: D) -> Self {
        Self {
            archive: Archive::with_dominance(dominance),
            evaluator,
            larger_preferred: false,
        }
    }

    /// Whether larger fitness values survive truncation.
    pub fn with_larger_preferred(mut self, larger_preferred: bool) -> Self {
        self.larger_preferred = larger_preferred;
        self
    }

    /// Offers a solution; see [`Archive::add`].
    pub fn add(&mut self, solution: Solution) -> bool {
        self.archive.add(solution)
    }

    /// Re-evaluates fitness over the members and keeps the best `size`.
    ///
    /// Members always leave with fresh fitness, even when none are dropped.
    ///
    /// # Errors
    /// Propagates evaluator errors (e.g. a degenerate objective range). The
    /// archive is unchanged on error.
    pub fn truncate(&mut self, size: usize) -> Result<()> {
        let contents = self.archive.contents_mut();
        self.evaluator.evaluate(contents)?;
        if contents.len() <= size {
            return Ok(());
        }

        let before = contents.len();
        let members = std::mem::take(contents);
        *contents = truncate_by_fitness(members, size, self.larger_preferred, |s| s.fitness);
        debug!("fitness archive truncated from {before} to {}", contents.len());
        Ok(())
    }

    /// The underlying archive.
    pub fn archive(&self) -> &Archive<Solution, D> {
        &self.archive
    }

    /// The fitness evaluator.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Whether the archive is empty.
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Iterates over members.
    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.archive.iter()
    }

    /// Consumes the archive, returning its members.
    pub fn into_vec(self) -> Vec<Solution> {
        self.archive.into_vec()
    }
}

impl<E: FitnessEvaluator, D: Dominance> Extend<Solution> for FitnessArchive<E, D> {
    fn extend<T: IntoIterator<Item = Solution>>(&mut self, iter: T) {
        self.archive.extend(iter);
    }
}
