//! Indicator-based fitness assignment.
//!
//! # Key Types
//!
//! - [`FitnessConfig`]: `kappa` and the hypervolume reference point `rho`
//! - [`FitnessEvaluator`]: full evaluation plus incremental removal
//! - [`IndicatorFitnessEvaluator`]: IBEA fitness over any [`Indicator`]
//! - [`HypervolumeIndicator`]: exclusive hypervolume between two solutions
//! - [`HypervolumeFitnessEvaluator`]: the two combined with default settings
//!
//! Objectives are first scaled into `[0, 1]` by [`normalize`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use u_moea::fitness::{FitnessConfig, FitnessEvaluator, HypervolumeFitnessEvaluator};
//! use u_moea::model::{Problem, Solution};
//!
//! let problem = Arc::new(Problem::new(2, 2, 0, |v: &[f64]| v.to_vec()));
//! let mut population: Vec<Solution> = (0..6)
//!     .map(|i| {
//!         let x = i as f64 / 5.0;
//!         let mut s = Solution::new(&problem).with_variables(&[x, 1.0 - x]).unwrap();
//!         s.evaluate().unwrap();
//!         s
//!     })
//!     .collect();
//!
//! let config = FitnessConfig::default().with_kappa(0.05);
//! let mut evaluator = HypervolumeFitnessEvaluator::from_config(&config).unwrap();
//! evaluator.evaluate(&mut population).unwrap();
//!
//! // environmental selection: drop the worst until four remain
//! while population.len() > 4 {
//!     let worst = population
//!         .iter()
//!         .enumerate()
//!         .max_by(|(_, a), (_, b)| a.fitness.total_cmp(&b.fitness))
//!         .map(|(i, _)| i)
//!         .unwrap();
//!     evaluator.remove(&mut population, worst).unwrap();
//! }
//! assert_eq!(population.len(), 4);
//! ```
//!
//! # References
//!
//! - Zitzler & Künzli (2004), "Indicator-Based Selection in Multiobjective Search"
//! - Zitzler & Thiele (1999), "Multiobjective Evolutionary Algorithms: A
//!   Comparative Case Study and the Strength Pareto Approach"

mod config;
mod hypervolume;
mod indicator;
mod normalize;

pub use config::FitnessConfig;
pub use hypervolume::{HypervolumeFitnessEvaluator, HypervolumeIndicator};
pub use indicator::{FitnessEvaluator, Indicator, IndicatorFitnessEvaluator};
pub use normalize::{normalize, Bounds};
