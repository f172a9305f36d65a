//! Calendar and water-year aggregation of monthly precipitation.
//!
//! Monthly values of a [`PrecipitationRecord`](hydrofreq_series::PrecipitationRecord)
//! are summed over fixed groups of months ([`AggregationWindow`]) to give one
//! total per year. Windows that wrap past December (Sep–Jun, Oct–Sep) are
//! attributed to the year of their end month.
//!
//! | Group | Windows |
//! |-------|---------|
//! | `1-month` | each calendar month |
//! | `3-month` | Q1 Jan–Mar, Q2 Apr–Jun, Q3 Jul–Sep, Q4 Oct–Dec |
//! | `6-month` | H1 Jan–Jun, H2 Jul–Dec |
//! | `10-month` | Sep–Jun |
//! | `12-month` | Jan–Dec |
//! | `water-year` | twelve months from a configurable start month |
//! | `N-month-blocks` | consecutive N-month blocks from January, last one possibly shorter |
//!
//! Missing values inside a window are left out of the sum. A window with no
//! present value yields no total for that year.
//!
//! # Example
//!
//! ```
//! use hydrofreq_aggregate::{AggregateOptions, AggregationWindow, aggregate};
//! use hydrofreq_calendar::Month;
//! use hydrofreq_series::PrecipitationRecord;
//!
//! let record = PrecipitationRecord::from_entries([
//!     (2000, Month::Jan, 30.0),
//!     (2000, Month::Mar, 40.0),
//! ])
//! .unwrap();
//! let q1 = AggregationWindow::new("3-Month Q1", vec![Month::Jan, Month::Feb, Month::Mar]).unwrap();
//! let series = aggregate(&record, &q1, &AggregateOptions::new()).unwrap();
//! assert_eq!(series.values(), &[70.0]);
//! ```

mod aggregate;
mod blocks;
mod error;
mod options;
mod window;

pub use aggregate::{AggregatedSeries, aggregate};
pub use blocks::block_windows;
pub use error::AggregateError;
pub use options::AggregateOptions;
pub use window::{AggregationWindow, WindowGroup};
