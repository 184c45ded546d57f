//! Fitness evaluator configuration.

use crate::error::{MoeaError, Result};

/// Parameters of indicator-based fitness assignment.
///
/// # Defaults
///
/// ```
/// use u_moea::fitness::FitnessConfig;
///
/// let config = FitnessConfig::default();
/// assert_eq!(config.kappa, 0.05);
/// assert_eq!(config.rho, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessConfig {
    /// Scaling factor of the exponential fitness contributions.
    ///
    /// Smaller values sharpen the difference between dominated and
    /// non-dominated solutions. Typical range: 0.01–0.1.
    pub kappa: f64,

    /// Reference point of the hypervolume indicator in normalized objective
    /// space. Must lie beyond the unit box.
    pub rho: f64,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        Self {
            kappa: 0.05,
            rho: 2.0,
        }
    }
}

impl FitnessConfig {
    /// Sets kappa.
    pub fn with_kappa(mut self, kappa: f64) -> Self {
        self.kappa = kappa;
        self
    }

    /// Sets the hypervolume reference point.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.kappa.is_finite() && self.kappa > 0.0) {
            return Err(MoeaError::InvalidConfig(format!(
                "kappa must be positive and finite, got {}",
                self.kappa
            )));
        }
        if !(self.rho.is_finite() && self.rho > 1.0) {
            return Err(MoeaError::InvalidConfig(format!(
                "rho must be finite and greater than 1, got {}",
                self.rho
            )));
        }
        Ok(())
    }
}
