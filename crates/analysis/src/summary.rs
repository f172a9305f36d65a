//! Record and per-year summaries.

use hydrofreq_series::PrecipitationRecord;
use serde::Serialize;

/// Shape of the input record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    pub first_year: i32,
    pub last_year: i32,
    /// Years with a row in the input.
    pub n_years: usize,
    /// Present monthly values.
    pub n_present: usize,
    /// Monthly slots from January of the first year to December of the last.
    pub n_slots: usize,
}

impl RecordSummary {
    pub fn of(record: &PrecipitationRecord) -> Self {
        // Bounded by `MAX_YEAR_SPAN`, so the difference fits.
        let span = (i64::from(record.last_year()) - i64::from(record.first_year()) + 1) as usize;
        Self {
            first_year: record.first_year(),
            last_year: record.last_year(),
            n_years: record.n_years(),
            n_present: record.n_present(),
            n_slots: span * 12,
        }
    }
}

/// Totals for one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualSummary {
    pub year: i32,
    /// Sum of present months; `None` if no month is present.
    pub total: Option<f64>,
    /// Largest monthly value.
    pub max: Option<f64>,
    /// Month of the largest value (first one on ties).
    pub max_month: Option<&'static str>,
    pub months_present: usize,
}

/// One [`AnnualSummary`] per year from the first to the last year of the
/// record, including years absent from the input.
pub fn annual_summary(record: &PrecipitationRecord) -> Vec<AnnualSummary> {
    (record.first_year()..=record.last_year())
        .map(|year| {
            let mut total = None;
            let mut max: Option<(f64, &'static str)> = None;
            let mut months_present = 0;
            if let Some(row) = record.row(year) {
                for (month, v) in row.present() {
                    months_present += 1;
                    *total.get_or_insert(0.0) += v;
                    if max.is_none_or(|(m, _)| v > m) {
                        max = Some((v, month.name()));
                    }
                }
            }
            AnnualSummary {
                year,
                total,
                max: max.map(|(v, _)| v),
                max_month: max.map(|(_, m)| m),
                months_present,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hydrofreq_series::YearRow;

    #[test]
    fn totals_and_max() {
        let mut a = [Some(1.0); 12];
        a[6] = Some(9.0);
        a[10] = Some(9.0);
        a[2] = None;
        let record = PrecipitationRecord::new(vec![
            YearRow::new(2000, a),
            YearRow::new(2002, [None; 12]),
        ])
        .unwrap();
        let s = annual_summary(&record);
        assert_eq!(s.len(), 3);

        assert_eq!(s[0].year, 2000);
        assert_relative_eq!(s[0].total.unwrap(), 9.0 + 9.0 + 9.0);
        assert_eq!(s[0].max, Some(9.0));
        assert_eq!(s[0].max_month, Some("July"));
        assert_eq!(s[0].months_present, 11);

        for empty in &s[1..] {
            assert_eq!(empty.total, None);
            assert_eq!(empty.max, None);
            assert_eq!(empty.months_present, 0);
        }
    }

    #[test]
    fn record_summary() {
        let record = PrecipitationRecord::new(vec![
            YearRow::new(1990, [Some(1.0); 12]),
            YearRow::new(1992, [None; 12]),
        ])
        .unwrap();
        let s = RecordSummary::of(&record);
        assert_eq!(s.first_year, 1990);
        assert_eq!(s.last_year, 1992);
        assert_eq!(s.n_years, 2);
        assert_eq!(s.n_present, 12);
        assert_eq!(s.n_slots, 36);
    }
}
