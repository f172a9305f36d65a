//! SPI configuration.

use crate::error::SpiError;

/// Configuration for [`standardize`](crate::standardize).
///
/// | Field | Default |
/// |-------|---------|
/// | `probability_clamp` | `1e-6` |
#[derive(Debug, Clone, PartialEq)]
pub struct SpiConfig {
    probability_clamp: f64,
}

impl SpiConfig {
    pub fn new() -> Self {
        Self {
            probability_clamp: 1e-6,
        }
    }

    /// CDF values are clamped to `[eps, 1 − eps]` before the inverse normal.
    pub fn with_probability_clamp(mut self, eps: f64) -> Self {
        self.probability_clamp = eps;
        self
    }

    pub fn probability_clamp(&self) -> f64 {
        self.probability_clamp
    }

    /// # Errors
    ///
    /// [`SpiError::InvalidConfig`] unless `0 < probability_clamp < 0.5`.
    pub fn validate(&self) -> Result<(), SpiError> {
        let eps = self.probability_clamp;
        if !(eps > 0.0 && eps < 0.5) {
            return Err(SpiError::InvalidConfig {
                reason: format!("probability_clamp must be in (0, 0.5), got {eps}"),
            });
        }
        Ok(())
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::new()
    }
}
