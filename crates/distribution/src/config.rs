//! Configuration for distribution fitting.

use crate::error::FitError;

/// Estimator used for the Gumbel family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GumbelEstimator {
    /// Maximum likelihood, solved by Newton iteration on the scale equation.
    /// Falls back to the method of moments if the iteration fails.
    #[default]
    MaximumLikelihood,
    /// Method of moments: scale = sd·√6/π, location = mean − γ·scale.
    Moments,
}

/// Configuration for [`fit`](crate::fit).
///
/// # Example
///
/// ```
/// use hydrofreq_distribution::{FitConfig, GumbelEstimator};
///
/// let config = FitConfig::new()
///     .with_spread_floor(1e-6)
///     .with_gumbel_estimator(GumbelEstimator::Moments);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FitConfig {
    spread_floor: f64,
    gumbel_estimator: GumbelEstimator,
}

impl FitConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `spread_floor = 1e-8`, `gumbel_estimator = MaximumLikelihood`.
    pub fn new() -> Self {
        Self {
            spread_floor: 1e-8,
            gumbel_estimator: GumbelEstimator::MaximumLikelihood,
        }
    }

    /// Sets the smallest spread parameter a fit may produce.
    pub fn with_spread_floor(mut self, v: f64) -> Self {
        self.spread_floor = v;
        self
    }

    /// Sets the Gumbel estimator.
    pub fn with_gumbel_estimator(mut self, e: GumbelEstimator) -> Self {
        self.gumbel_estimator = e;
        self
    }

    /// Returns the smallest spread parameter a fit may produce.
    pub fn spread_floor(&self) -> f64 {
        self.spread_floor
    }

    /// Returns the Gumbel estimator.
    pub fn gumbel_estimator(&self) -> GumbelEstimator {
        self.gumbel_estimator
    }

    /// Validates this configuration.
    ///
    /// `spread_floor` must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), FitError> {
        if !self.spread_floor.is_finite() || self.spread_floor <= 0.0 {
            return Err(FitError::InvalidConfig {
                reason: format!(
                    "spread_floor must be finite and > 0, got {}",
                    self.spread_floor
                ),
            });
        }
        Ok(())
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = FitConfig::new();
        assert!((cfg.spread_floor() - 1e-8).abs() < f64::EPSILON);
        assert_eq!(cfg.gumbel_estimator(), GumbelEstimator::MaximumLikelihood);
    }

    #[test]
    fn builder_chaining() {
        let cfg = FitConfig::new()
            .with_spread_floor(1e-4)
            .with_gumbel_estimator(GumbelEstimator::Moments);
        assert!((cfg.spread_floor() - 1e-4).abs() < f64::EPSILON);
        assert_eq!(cfg.gumbel_estimator(), GumbelEstimator::Moments);
    }

    #[test]
    fn validate_bad_floor() {
        assert!(FitConfig::new().with_spread_floor(0.0).validate().is_err());
        assert!(FitConfig::new().with_spread_floor(-1.0).validate().is_err());
        assert!(
            FitConfig::new()
                .with_spread_floor(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn validate_ok() {
        assert!(FitConfig::default().validate().is_ok());
    }
}
