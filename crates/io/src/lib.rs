//! # hydrofreq-io
//!
//! Load a monthly precipitation table from CSV into a
//! [`PrecipitationRecord`](hydrofreq_series::PrecipitationRecord) and write
//! result rows as CSV or JSON.
//!
//! The input table has one row per year:
//!
//! ```text
//! Year,January,February,...,December
//! 1991,12.5,NA,...,30.1
//! ```
//!
//! Month headers may be full names or three-letter abbreviations but must
//! appear in calendar order. Empty cells and the markers `NA`, `NaN`, `-`
//! and `null` are read as missing.

mod error;
mod reader;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::{ReaderConfig, parse_precipitation_csv, read_precipitation_csv};
pub use writer::{to_json, write_csv, write_json};
