//! Error types for the hydrofreq-spi crate.

use hydrofreq_distribution::FitError;

/// Error type for all fallible operations in the hydrofreq-spi crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpiError {
    /// The distribution could not be fitted to the aggregated series.
    #[error(transparent)]
    Fit(#[from] FitError),

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydrofreq_distribution::DistributionFamily;

    #[test]
    fn test_fit_error_is_transparent() {
        let inner = FitError::DegenerateSample {
            family: DistributionFamily::Gumbel,
        };
        let err = SpiError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_invalid_config_display() {
        let err = SpiError::InvalidConfig {
            reason: "probability_clamp must be in (0, 0.5)".to_string(),
        };
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpiError>();
    }
}
