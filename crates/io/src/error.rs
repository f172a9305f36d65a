//! Error types for hydrofreq-io.

use std::path::PathBuf;

use hydrofreq_series::SeriesError;

/// Error type for all fallible operations in the hydrofreq-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an operating-system I/O failure on a specific path.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from the csv crate.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a cell is neither a number nor a missing marker.
    #[error("line {line}, column '{column}': cannot parse '{value}' as a number")]
    InvalidValue {
        /// 1-based line number in the input.
        line: u64,
        /// Header of the offending column.
        column: String,
        /// Raw cell text.
        value: String,
    },

    /// The parsed rows do not form a valid record.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}
