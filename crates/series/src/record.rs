//! The precipitation record and its rows.

use std::collections::BTreeMap;

use hydrofreq_calendar::Month;

use crate::error::SeriesError;

/// Largest accepted distance between the first and last year, inclusive.
pub const MAX_YEAR_SPAN: u32 = 10_000;

/// One year of monthly values, indexed January..December.
#[derive(Debug, Clone, PartialEq)]
pub struct YearRow {
    year: i32,
    values: [Option<f64>; 12],
}

impl YearRow {
    /// Creates a row. Validation happens when the row is added to a record.
    pub fn new(year: i32, values: [Option<f64>; 12]) -> Self {
        Self { year, values }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Value for `month`, or `None` if missing.
    pub fn get(&self, month: Month) -> Option<f64> {
        self.values[month.index()]
    }

    /// All twelve values.
    pub fn values(&self) -> &[Option<f64>; 12] {
        &self.values
    }

    /// Present values with their months, in calendar order.
    pub fn present(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        Month::ALL
            .iter()
            .zip(self.values.iter())
            .filter_map(|(m, v)| v.map(|v| (*m, v)))
    }

    fn validate(&self) -> Result<(), SeriesError> {
        for (month, value) in Month::ALL.iter().zip(self.values.iter()) {
            if let Some(v) = *value {
                if !v.is_finite() {
                    return Err(SeriesError::NonFiniteValue {
                        year: self.year,
                        month: *month,
                    });
                }
                if v < 0.0 {
                    return Err(SeriesError::NegativeValue {
                        year: self.year,
                        month: *month,
                        value: v,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Immutable monthly precipitation record, ordered ascending by year.
///
/// Years need not be contiguous; a year without a row is treated as twelve
/// missing months. The record is `Send + Sync` and safe to share across
/// worker threads by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationRecord {
    rows: Vec<YearRow>,
}

impl PrecipitationRecord {
    /// Builds a record from year rows in any order.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptyRecord`] if `rows` is empty,
    /// [`SeriesError::DuplicateYear`] if a year repeats,
    /// [`SeriesError::YearSpanTooLarge`] if the years span more than
    /// [`MAX_YEAR_SPAN`], and
    /// [`SeriesError::NegativeValue`] / [`SeriesError::NonFiniteValue`] for
    /// invalid values.
    pub fn new(mut rows: Vec<YearRow>) -> Result<Self, SeriesError> {
        if rows.is_empty() {
            return Err(SeriesError::EmptyRecord);
        }
        for row in &rows {
            row.validate()?;
        }
        rows.sort_by_key(|r| r.year);
        if let Some(w) = rows.windows(2).find(|w| w[0].year == w[1].year) {
            return Err(SeriesError::DuplicateYear { year: w[0].year });
        }
        let (first, last) = (rows[0].year, rows[rows.len() - 1].year);
        if i64::from(last) - i64::from(first) + 1 > i64::from(MAX_YEAR_SPAN) {
            return Err(SeriesError::YearSpanTooLarge {
                first,
                last,
                max: MAX_YEAR_SPAN,
            });
        }
        Ok(Self { rows })
    }

    /// Builds a record from individual `(year, month, value)` observations.
    /// Months never mentioned are missing.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::DuplicateEntry`] if a (year, month) pair repeats,
    /// plus everything [`PrecipitationRecord::new`] returns.
    pub fn from_entries<I>(entries: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = (i32, Month, f64)>,
    {
        let mut by_year: BTreeMap<i32, [Option<f64>; 12]> = BTreeMap::new();
        for (year, month, value) in entries {
            let slot = &mut by_year.entry(year).or_insert([None; 12])[month.index()];
            if slot.is_some() {
                return Err(SeriesError::DuplicateEntry { year, month });
            }
            *slot = Some(value);
        }
        Self::new(
            by_year
                .into_iter()
                .map(|(year, values)| YearRow::new(year, values))
                .collect(),
        )
    }

    /// Rows in ascending year order.
    pub fn rows(&self) -> &[YearRow] {
        &self.rows
    }

    /// Number of year rows.
    pub fn n_years(&self) -> usize {
        self.rows.len()
    }

    /// First year in the record.
    pub fn first_year(&self) -> i32 {
        // Non-empty by construction.
        self.rows[0].year
    }

    /// Last year in the record.
    pub fn last_year(&self) -> i32 {
        self.rows[self.rows.len() - 1].year
    }

    /// Row for `year`, if present.
    pub fn row(&self, year: i32) -> Option<&YearRow> {
        self.rows
            .binary_search_by_key(&year, |r| r.year)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Value for `(year, month)`, or `None` if the year or value is missing.
    pub fn get(&self, year: i32, month: Month) -> Option<f64> {
        self.row(year).and_then(|r| r.get(month))
    }

    /// Year-ordered series for one month, including missing entries.
    pub fn month_series(&self, month: Month) -> Vec<(i32, Option<f64>)> {
        self.rows.iter().map(|r| (r.year, r.get(month))).collect()
    }

    /// Every (year, month, value) slot from January of the first year to
    /// December of the last year, in chronological order. Years absent from
    /// the record yield missing slots.
    pub fn chronological(&self) -> Vec<(i32, Month, Option<f64>)> {
        (self.first_year()..=self.last_year())
            .flat_map(|year| Month::ALL.into_iter().map(move |m| (year, m)))
            .map(|(year, m)| (year, m, self.get(year, m)))
            .collect()
    }

    /// Count of present monthly values.
    pub fn n_present(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.values.iter().filter(|v| v.is_some()).count())
            .sum()
    }
}
