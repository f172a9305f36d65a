//! # hydrofreq-calendar
//!
//! Calendar months and the water-year attribution rule used by the
//! multi-month aggregation windows.
//!
//! ## Quick Start
//!
//! ```
//! use hydrofreq_calendar::{Month, water_year};
//!
//! let sep = Month::from_name("September").unwrap();
//! assert_eq!(sep, Month::Sep);
//!
//! // A September-start window: Sep 2000 belongs to the window ending in 2001.
//! assert_eq!(water_year(2000, sep, Month::Sep), 2001);
//! assert_eq!(water_year(2001, Month::Jun, Month::Sep), 2001);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | `Month` enum with name and number conversions |
//! | `water_year` | Water year computation |
//! | `error` | Error types |

mod error;
mod month;
mod water_year;

pub use error::CalendarError;
pub use month::Month;
pub use water_year::{crosses_year_boundary, water_year};
