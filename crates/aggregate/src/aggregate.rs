//! Per-year window totals.

use std::collections::BTreeMap;

use hydrofreq_series::PrecipitationRecord;
use serde::Serialize;
use tracing::debug;

use crate::error::AggregateError;
use crate::options::AggregateOptions;
use crate::window::AggregationWindow;

/// Per-year totals of one window, ascending by year.
///
/// Years whose window had no present value are listed in
/// [`missing_years`](Self::missing_years) and carry no total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedSeries {
    window: AggregationWindow,
    years: Vec<i32>,
    values: Vec<f64>,
    missing_years: Vec<i32>,
}

impl AggregatedSeries {
    pub fn window(&self) -> &AggregationWindow {
        &self.window
    }

    /// Years with a total.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Totals, aligned with [`years`](Self::years).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Years in the record span whose window had no present value.
    pub fn missing_years(&self) -> &[i32] {
        &self.missing_years
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(year, total)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.years.iter().copied().zip(self.values.iter().copied())
    }

    /// Total for `year`, if present.
    pub fn get(&self, year: i32) -> Option<f64> {
        self.years
            .binary_search(&year)
            .ok()
            .map(|i| self.values[i])
    }
}

#[derive(Default)]
struct Bucket {
    slots: usize,
    present: usize,
    total: f64,
}

/// Sums `window` for every year of `record`.
///
/// Each monthly slot from January of the first year to December of the last
/// is assigned to the year returned by
/// [`AggregationWindow::attribution_year`]. With
/// [`trim_partial_windows`](AggregateOptions::trim_partial_windows), a year
/// whose window reaches outside the record's span is dropped; this only
/// affects windows that wrap past December.
///
/// # Errors
///
/// [`AggregateError::InvalidConfig`] if `opts` does not validate.
pub fn aggregate(
    record: &PrecipitationRecord,
    window: &AggregationWindow,
    opts: &AggregateOptions,
) -> Result<AggregatedSeries, AggregateError> {
    opts.validate()?;

    let mut buckets: BTreeMap<i32, Bucket> = BTreeMap::new();
    for (year, month, value) in record.chronological() {
        if !window.contains(month) {
            continue;
        }
        let bucket = buckets
            .entry(window.attribution_year(year, month))
            .or_default();
        bucket.slots += 1;
        if let Some(v) = value {
            bucket.present += 1;
            bucket.total += opts.floored(v);
        }
    }

    let mut years = Vec::with_capacity(buckets.len());
    let mut values = Vec::with_capacity(buckets.len());
    let mut missing_years = Vec::new();
    for (year, bucket) in buckets {
        if bucket.slots < window.len() && opts.trim_partial_windows() {
            debug!(window = %window, year, covered = bucket.slots, "dropped partial window");
            continue;
        }
        if bucket.present == 0 {
            missing_years.push(year);
        } else {
            years.push(year);
            values.push(bucket.total);
        }
    }

    debug!(
        window = %window,
        n = values.len(),
        missing = missing_years.len(),
        "aggregated window"
    );
    Ok(AggregatedSeries {
        window: window.clone(),
        years,
        values,
        missing_years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowGroup;
    use approx::assert_relative_eq;
    use hydrofreq_calendar::Month;
    use hydrofreq_series::YearRow;

    fn q1() -> AggregationWindow {
        WindowGroup::ThreeMonth.windows(Month::Oct).remove(0)
    }

    #[test]
    fn missing_month_excluded_from_sum() {
        let mut row = [None; 12];
        row[0] = Some(30.0);
        row[2] = Some(40.0);
        let record = PrecipitationRecord::new(vec![YearRow::new(2000, row)]).unwrap();
        let s = aggregate(&record, &q1(), &AggregateOptions::new()).unwrap();
        assert_eq!(s.years(), &[2000]);
        assert_relative_eq!(s.values()[0], 70.0);
    }

    #[test]
    fn all_missing_window_is_missing() {
        let mut a = [None; 12];
        a[5] = Some(1.0);
        let mut b = [None; 12];
        b[1] = Some(5.0);
        let record =
            PrecipitationRecord::new(vec![YearRow::new(2000, a), YearRow::new(2001, b)]).unwrap();
        let s = aggregate(&record, &q1(), &AggregateOptions::new()).unwrap();
        assert_eq!(s.years(), &[2001]);
        assert_eq!(s.missing_years(), &[2000]);
        assert_eq!(s.get(2000), None);
        assert_eq!(s.get(2001), Some(5.0));
    }

    #[test]
    fn annual_total_is_sum_of_present_months() {
        let mut row = [Some(10.0); 12];
        row[3] = None;
        row[8] = None;
        let record = PrecipitationRecord::new(vec![YearRow::new(1990, row)]).unwrap();
        let annual = &WindowGroup::TwelveMonth.windows(Month::Oct)[0];
        let s = aggregate(&record, annual, &AggregateOptions::new()).unwrap();
        assert_relative_eq!(s.values()[0], 100.0);
    }

    #[test]
    fn floor_applies_before_summing() {
        let mut row = [Some(0.0); 12];
        row[0] = Some(5.0);
        let record = PrecipitationRecord::new(vec![YearRow::new(2000, row)]).unwrap();
        let opts = AggregateOptions::new().with_positive_floor(0.01);
        let s = aggregate(&record, &q1(), &opts).unwrap();
        assert_relative_eq!(s.values()[0], 5.02, epsilon = 1e-12);

        let raw = aggregate(&record, &q1(), &AggregateOptions::new()).unwrap();
        assert_relative_eq!(raw.values()[0], 5.0);
    }

    #[test]
    fn gap_year_reported_missing() {
        let record = PrecipitationRecord::new(vec![
            YearRow::new(2000, [Some(1.0); 12]),
            YearRow::new(2002, [Some(2.0); 12]),
        ])
        .unwrap();
        let s = aggregate(&record, &q1(), &AggregateOptions::new()).unwrap();
        assert_eq!(s.years(), &[2000, 2002]);
        assert_eq!(s.missing_years(), &[2001]);
    }

    #[test]
    fn invalid_options_rejected() {
        let record = PrecipitationRecord::new(vec![YearRow::new(2000, [Some(1.0); 12])]).unwrap();
        let opts = AggregateOptions::new().with_positive_floor(-1.0);
        assert!(matches!(
            aggregate(&record, &q1(), &opts),
            Err(AggregateError::InvalidConfig { .. })
        ));
    }
}
