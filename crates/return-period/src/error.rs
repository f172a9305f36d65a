//! Error types for the hydrofreq-return-period crate.

/// Error type for all fallible operations in the hydrofreq-return-period crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReturnPeriodError {
    /// Returned when a return period is not a finite value greater than one.
    #[error("invalid return period {years}: must be finite and > 1")]
    InvalidReturnPeriod {
        /// The rejected return period.
        years: f64,
    },

    /// Returned when a value lies so far in the upper tail that its
    /// non-exceedance probability is indistinguishable from one.
    #[error("saturated probability for value {value}: cdf {cdf} >= 1 - {eps}")]
    SaturatedProbability {
        /// The queried value.
        value: f64,
        /// CDF of the fitted distribution at `value`.
        cdf: f64,
        /// Saturation tolerance in effect.
        eps: f64,
    },

    /// Returned when a queried value is NaN or infinite.
    #[error("non-finite query value {value}")]
    NonFiniteValue {
        /// The rejected value.
        value: f64,
    },

    /// Returned when the saturation tolerance is outside (0, 1).
    #[error("invalid saturation tolerance {eps}: must be in (0, 1)")]
    InvalidTolerance {
        /// The rejected tolerance.
        eps: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_return_period_display() {
        let err = ReturnPeriodError::InvalidReturnPeriod { years: 0.5 };
        let msg = err.to_string();
        assert!(msg.contains("0.5"));
        assert!(msg.contains("> 1"));
    }

    #[test]
    fn test_saturated_display() {
        let err = ReturnPeriodError::SaturatedProbability {
            value: 250.0,
            cdf: 1.0,
            eps: 1e-9,
        };
        let msg = err.to_string();
        assert!(msg.contains("saturated probability"));
        assert!(msg.contains("250"));
    }

    #[test]
    fn test_error_trait() {
        let err = ReturnPeriodError::NonFiniteValue { value: f64::NAN };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReturnPeriodError>();
    }
}
