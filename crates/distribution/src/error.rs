//! Error types for the hydrofreq-distribution crate.

use crate::family::DistributionFamily;

/// Error type for all fallible operations in the hydrofreq-distribution crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Returned when the sample is too small to fit the family.
    #[error("insufficient data to fit {family}: need at least {needed} value(s), got {got}")]
    InsufficientData {
        /// Family being fitted.
        family: DistributionFamily,
        /// Minimum number of usable values.
        needed: usize,
        /// Number of usable values supplied.
        got: usize,
    },

    /// Returned when every usable value is identical.
    #[error("degenerate sample for {family}: all values are equal (zero spread)")]
    DegenerateSample {
        /// Family being fitted.
        family: DistributionFamily,
    },

    /// Returned when a family tag is not one of the supported families.
    #[error("unknown distribution family: '{name}'")]
    UnknownDistributionFamily {
        /// The unrecognised tag.
        name: String,
    },

    /// Returned when the sample contains NaN or infinite values.
    #[error("non-finite value at sample index {index}")]
    NonFiniteSample {
        /// Position of the first offending value.
        index: usize,
    },

    /// Returned when explicitly supplied parameters are invalid.
    #[error("invalid {family} parameters: {reason}")]
    InvalidParameters {
        /// Family whose parameters were rejected.
        family: DistributionFamily,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
