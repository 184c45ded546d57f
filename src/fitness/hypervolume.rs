//! Hypervolume indicator.

use super::config::FitnessConfig;
use super::indicator::{Indicator, IndicatorFitnessEvaluator};
use crate::dominance::{Dominance, ParetoDominance};
use crate::error::Result;
use crate::model::{Direction, Solution};
use std::cmp::Ordering;

/// Exclusive hypervolume between two solutions in normalized objective space.
///
/// For a pair `(a, b)`:
///
/// - if `a` dominates `b`: `-H(a, b)`, minus the volume dominated by `a` but
///   not by `b`
/// - otherwise: `H(b, a)`, the volume dominated by `b` but not by `a`
///
/// Volumes are measured inside the box `[0, rho]^m` and divided by `rho^m`.
/// Maximized objectives are reflected as `1 - value` first; `rho` itself is
/// not reflected.
///
/// # Complexity
///
/// O(2^m) per pair for `m` objectives (the recursion branches once per
/// dimension where `a` is strictly better).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HypervolumeIndicator<D = ParetoDominance> {
    rho: f64,
    dominance: D,
}

impl HypervolumeIndicator<ParetoDominance> {
    /// Creates an indicator with reference point `rho` under Pareto dominance.
    pub fn new(rho: f64) -> Self {
        Self::with_dominance(rho, ParetoDominance)
    }
}

impl<D: Dominance> HypervolumeIndicator<D> {
    /// Creates an indicator deciding the dominating branch with `dominance`.
    pub fn with_dominance(rho: f64, dominance: D) -> Self {
        Self { rho, dominance }
    }

    /// Reference point.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Volume dominated by `s1` and not by `s2` over the first `d`
    /// objectives. `None` stands for the reference point.
    fn volume(&self, s1: &Solution, s2: Option<&Solution>, d: usize) -> f64 {
        let objective = d - 1;
        let reflect = s1.problem().direction(objective) == Direction::Maximize;
        let value = |s: &Solution| {
            let v = s.normalized_objectives[objective];
            if reflect {
                1.0 - v
            } else {
                v
            }
        };

        let a = value(s1);
        let b = s2.map_or(self.rho, value);

        if d == 1 {
            return if a < b { (b - a) / self.rho } else { 0.0 };
        }

        if a < b {
            let capped = self.volume(s1, None, d - 1) * (b - a) / self.rho;
            match s2 {
                Some(_) => capped + self.volume(s1, s2, d - 1) * (self.rho - b) / self.rho,
                None => capped,
            }
        } else {
            self.volume(s1, s2, d - 1) * (self.rho - a) / self.rho
        }
    }
}

impl<D: Dominance> Indicator for HypervolumeIndicator<D> {
    fn calculate(&self, a: &Solution, b: &Solution) -> f64 {
        let m = a.problem().objective_count();
        if m == 0 {
            return 0.0;
        }

        if self.dominance.compare(a, b) == Ordering::Less {
            -self.volume(a, Some(b), m)
        } else {
            self.volume(b, Some(a), m)
        }
    }
}

/// Hypervolume-based fitness evaluator (the IBEA `I_HD` fitness).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use u_moea::fitness::{FitnessEvaluator, HypervolumeFitnessEvaluator};
/// use u_moea::model::{Problem, Solution};
///
/// let problem = Arc::new(Problem::new(2, 2, 0, |v: &[f64]| v.to_vec()));
/// let mut population: Vec<Solution> = [[0.0, 1.0], [1.0, 0.0], [0.9, 0.9]]
///     .iter()
///     .map(|x| {
///         let mut s = Solution::new(&problem).with_variables(x).unwrap();
///         s.evaluate().unwrap();
///         s
///     })
///     .collect();
///
/// let mut evaluator = HypervolumeFitnessEvaluator::default();
/// evaluator.evaluate(&mut population).unwrap();
///
/// // (0.9, 0.9) is dominated by neither corner but covers the least
/// assert!(population[2].fitness > population[0].fitness);
/// ```
pub type HypervolumeFitnessEvaluator = IndicatorFitnessEvaluator<HypervolumeIndicator>;

impl HypervolumeFitnessEvaluator {
    /// Creates a hypervolume evaluator from a validated configuration.
    pub fn from_config(config: &FitnessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(HypervolumeIndicator::new(config.rho), config.kappa))
    }
}

impl Default for HypervolumeFitnessEvaluator {
    fn default() -> Self {
        let config = FitnessConfig::default();
        Self::new(HypervolumeIndicator::new(config.rho), config.kappa)
    }
}
