//! Indicator-based fitness assignment.

use super::normalize::{normalize, Bounds};
use crate::error::{MoeaError, Result};
use crate::model::Solution;
use crate::EPSILON;
use log::debug;

/// A binary quality indicator over normalized objectives.
///
/// `calculate(a, b)` measures how much better `a` is than `b`; negative
/// values mean `a` dominates `b`.
pub trait Indicator {
    /// Indicator value of the ordered pair `(a, b)`.
    fn calculate(&self, a: &Solution, b: &Solution) -> f64;
}

/// Assigns a scalar fitness to every solution of a population.
pub trait FitnessEvaluator {
    /// Computes fitness for every solution from scratch.
    fn evaluate(&mut self, solutions: &mut [Solution]) -> Result<()>;

    /// Removes `solutions[index]` and subtracts its contribution from the
    /// fitness of the rest.
    ///
    /// The result equals a fresh [`evaluate`](FitnessEvaluator::evaluate) of
    /// the reduced population only while the removal leaves the normalization
    /// bounds and the largest indicator magnitude unchanged. Neither is
    /// recomputed here, so removing an extreme point keeps the old scale.
    fn remove(&mut self, solutions: &mut Vec<Solution>, index: usize) -> Result<()>;
}

/// IBEA-style fitness built from a pairwise [`Indicator`] matrix.
///
/// For a population of `n` solutions, `evaluate` stores the `n × n` matrix
/// `I(j, i)` and sets
///
/// ```text
/// fitness(i) = Σ_{j ≠ i} exp(-I(j, i) / max|I| / kappa)
/// ```
///
/// Larger fitness means the solution is dominated by, or contributes little
/// beyond, the others. Environmental selection removes the largest value
/// first and calls [`remove`](FitnessEvaluator::remove) to patch the others
/// in O(n) instead of rebuilding the matrix.
///
/// # Complexity
///
/// `evaluate`: O(n² · C) where C is the indicator cost.
/// `remove`: O(n²) for the matrix compaction, O(n) fitness updates.
///
/// # References
///
/// - Zitzler & Künzli (2004), "Indicator-Based Selection in Multiobjective Search"
#[derive(Debug, Clone)]
pub struct IndicatorFitnessEvaluator<I> {
    indicator: I,
    kappa: f64,
    bounds: Option<Bounds>,
    fitcomp: Vec<Vec<f64>>,
    max_fitness: f64,
}

impl<I: Indicator> IndicatorFitnessEvaluator<I> {
    /// Creates an evaluator with the given sharpness `kappa`.
    pub fn new(indicator: I, kappa: f64) -> Self {
        Self {
            indicator,
            kappa,
            bounds: None,
            fitcomp: Vec::new(),
            max_fitness: 1.0,
        }
    }

    /// Normalizes with fixed bounds instead of the population's own range.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// The indicator.
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Sharpness parameter.
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    /// Largest indicator magnitude of the last `evaluate`.
    pub fn max_fitness(&self) -> f64 {
        self.max_fitness
    }

    /// Pairwise indicator values; row `i`, column `j` holds `I(i, j)`.
    pub fn indicator_matrix(&self) -> &[Vec<f64>] {
        &self.fitcomp
    }

    fn contribution(&self, from: usize, to: usize) -> f64 {
        (-self.fitcomp[from][to] / self.max_fitness / self.kappa).exp()
    }
}

impl<I: Indicator> FitnessEvaluator for IndicatorFitnessEvaluator<I> {
    fn evaluate(&mut self, solutions: &mut [Solution]) -> Result<()> {
        if solutions.is_empty() {
            self.fitcomp.clear();
            return Ok(());
        }

        let (minimum, maximum) = match &self.bounds {
            Some(b) => (Some(b.minimum.as_slice()), Some(b.maximum.as_slice())),
            None => (None, None),
        };
        normalize(solutions, minimum, maximum)?;

        let n = solutions.len();
        let mut fitcomp = vec![vec![0.0; n]; n];
        let mut max_fitness = 0.0f64;
        for (i, row) in fitcomp.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = self.indicator.calculate(&solutions[i], &solutions[j]);
                max_fitness = max_fitness.max(value.abs());
            }
        }

        self.fitcomp = fitcomp;
        self.max_fitness = if max_fitness < EPSILON {
            1.0
        } else {
            max_fitness
        };

        for i in 0..n {
            solutions[i].fitness = (0..n)
                .filter(|&j| j != i)
                .map(|j| self.contribution(j, i))
                .sum();
        }

        debug!(
            "indicator fitness over {n} solutions, max |I| = {}",
            self.max_fitness
        );
        Ok(())
    }

    fn remove(&mut self, solutions: &mut Vec<Solution>, index: usize) -> Result<()> {
        let n = solutions.len();
        if index >= n {
            return Err(MoeaError::IndexOutOfRange { index, len: n });
        }
        if self.fitcomp.len() != n {
            return Err(MoeaError::DimensionMismatch {
                what: "solutions",
                expected: self.fitcomp.len(),
                actual: n,
            });
        }

        for i in (0..n).filter(|&i| i != index) {
            solutions[i].fitness -= self.contribution(index, i);
        }

        self.fitcomp.remove(index);
        for row in &mut self.fitcomp {
            row.remove(index);
        }
        solutions.remove(index);

        debug!("removed solution {index}, {} remain", solutions.len());
        Ok(())
    }
}
