//! Error types for the hydrofreq-calendar crate.

/// Error type for all fallible operations in the hydrofreq-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a month name is not a recognised English name or
    /// three-letter abbreviation.
    #[error("unknown month name: '{name}'")]
    UnknownMonthName {
        /// The unrecognised name.
        name: String,
    },
}
