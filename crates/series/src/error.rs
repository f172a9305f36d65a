//! Error types for the hydrofreq-series crate.

use hydrofreq_calendar::Month;

/// Error type for record construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a record has no rows.
    #[error("precipitation record is empty")]
    EmptyRecord,

    /// Returned when the same year appears twice.
    #[error("duplicate year {year} in precipitation record")]
    DuplicateYear {
        /// The repeated year.
        year: i32,
    },

    /// Returned when the same (year, month) entry is supplied twice.
    #[error("duplicate entry for {month} {year}")]
    DuplicateEntry {
        /// Year of the repeated entry.
        year: i32,
        /// Month of the repeated entry.
        month: Month,
    },

    /// Returned when a value is negative.
    #[error("negative precipitation {value} for {month} {year}")]
    NegativeValue {
        /// Year of the offending value.
        year: i32,
        /// Month of the offending value.
        month: Month,
        /// The negative value.
        value: f64,
    },

    /// Returned when a value is NaN or infinite. Missing values must be
    /// expressed as `None`.
    #[error("non-finite precipitation for {month} {year}")]
    NonFiniteValue {
        /// Year of the offending value.
        year: i32,
        /// Month of the offending value.
        month: Month,
    },

    /// Returned when the first and last year are too far apart.
    #[error("record spans {first}..={last}, more than {max} years")]
    YearSpanTooLarge {
        /// First year of the record.
        first: i32,
        /// Last year of the record.
        last: i32,
        /// Largest accepted span.
        max: u32,
    },
}
