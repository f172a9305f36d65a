//! Error types for the hydrofreq-aggregate crate.

use hydrofreq_calendar::Month;

/// Error type for all fallible operations in the hydrofreq-aggregate crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregateError {
    /// Returned when a window lists no months.
    #[error("window '{name}' has no months")]
    EmptyWindow {
        /// Window name.
        name: String,
    },

    /// Returned when a window lists the same month twice.
    #[error("window '{name}' lists {month} more than once")]
    DuplicateMonth {
        /// Window name.
        name: String,
        /// The repeated month.
        month: Month,
    },

    /// Returned when a window-group tag is not recognised.
    #[error("unknown window group: '{name}'")]
    UnknownWindowGroup {
        /// The unrecognised tag.
        name: String,
    },

    /// Returned when a block width is outside `1..=12` months.
    #[error("rolling width must be 1..=12 months, got {width}")]
    InvalidRollingWidth {
        /// The rejected width.
        width: u8,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
