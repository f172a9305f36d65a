//! Error types for the hydrofreq-analysis crate.

use hydrofreq_aggregate::AggregateError;

/// Errors that abort a whole analysis run.
///
/// Failures of individual units are not errors; they are reported per unit
/// as [`UnitFailure`](crate::UnitFailure).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Aggregation of the record failed.
    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the underlying failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = AnalysisError::InvalidConfig {
            reason: "return period 1 must be > 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: return period 1 must be > 1"
        );
    }

    #[test]
    fn test_aggregate_is_transparent() {
        let inner = AggregateError::InvalidRollingWidth { width: 0 };
        let msg = inner.to_string();
        assert_eq!(AnalysisError::from(inner).to_string(), msg);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnalysisError>();
    }
}
