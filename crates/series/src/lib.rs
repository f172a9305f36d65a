//! Immutable in-memory monthly precipitation record.
//!
//! A [`PrecipitationRecord`] holds one row per year with twelve optional
//! monthly values. Missing entries stay `None` all the way through
//! aggregation and fitting; they are never coerced to zero.

mod error;
mod record;

pub use error::SeriesError;
pub use record::{MAX_YEAR_SPAN, PrecipitationRecord, YearRow};
