//! Water year computation.

use crate::month::Month;

/// Computes the water year for a given calendar year and month.
///
/// A water year is defined by its `start_month`. All months from `start_month`
/// onward belong to the *next* calendar year's water year, so a window is
/// always attributed to the year of its end month.
///
/// # Examples
///
/// ```
/// use hydrofreq_calendar::{Month, water_year};
///
/// // October-start water year (standard US hydrological convention):
/// assert_eq!(water_year(2000, Month::Oct, Month::Oct), 2001);
/// assert_eq!(water_year(2001, Month::Sep, Month::Oct), 2001);
///
/// // Calendar year (start_month = January):
/// assert_eq!(water_year(2000, Month::Jun, Month::Jan), 2000);
/// ```
pub fn water_year(year: i32, month: Month, start_month: Month) -> i32 {
    if start_month == Month::Jan {
        return year;
    }
    if month >= start_month { year + 1 } else { year }
}

/// Returns `true` when a sequence of months, read in order, wraps past
/// December into the following calendar year.
pub fn crosses_year_boundary(months: &[Month]) -> bool {
    months.windows(2).any(|w| w[1] <= w[0])
}
