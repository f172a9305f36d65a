//! CSV reader for the monthly precipitation table.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use hydrofreq_series::{PrecipitationRecord, YearRow};
use tracing::{debug, info};

use crate::error::IoError;
use crate::validate::validate_header;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading the precipitation table.
///
/// The [`Default`] reads comma-separated input and treats empty cells,
/// `NA`, `NaN`, `-` and `null` as missing (case-insensitive).
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Field delimiter.
    delimiter: u8,
    /// Lower-case cell contents read as missing.
    missing_markers: Vec<String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing_markers: ["", "na", "nan", "-", "null"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ReaderConfig {
    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Adds a cell value to read as missing.
    pub fn with_missing_marker(mut self, marker: impl AsRef<str>) -> Self {
        self.missing_markers
            .push(marker.as_ref().trim().to_lowercase());
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn missing_markers(&self) -> &[String] {
        &self.missing_markers
    }

    fn is_missing(&self, cell: &str) -> bool {
        let cell = cell.trim();
        self.missing_markers
            .iter()
            .any(|m| m.eq_ignore_ascii_case(cell))
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the delimiter could be part of a
    /// number or is a quote character.
    fn validate(&self) -> Result<(), IoError> {
        let d = self.delimiter;
        if d.is_ascii_alphanumeric() || matches!(d, b'.' | b'-' | b'+' | b'"' | b'\n' | b'\r') {
            return Err(IoError::Validation {
                count: 1,
                details: format!("delimiter {:?} is not usable", char::from(d)),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Reads the precipitation table at `path`.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] / [`IoError::Io`] if the file cannot be read.
/// - Any error of [`parse_precipitation_csv`].
pub fn read_precipitation_csv(
    path: &Path,
    config: &ReaderConfig,
) -> Result<PrecipitationRecord, IoError> {
    config.validate()?;
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read input table");
    parse_precipitation_csv(&text, config)
}

/// Parses the precipitation table from CSV text.
///
/// # Errors
///
/// - [`IoError::Validation`] for a malformed header or configuration.
/// - [`IoError::Csv`] for structurally invalid CSV (e.g. ragged rows).
/// - [`IoError::InvalidValue`] for a year or cell that is not a number.
/// - [`IoError::Series`] for negative or non-finite values, duplicate years,
///   or a table without rows.
pub fn parse_precipitation_csv(
    text: &str,
    config: &ReaderConfig,
) -> Result<PrecipitationRecord, IoError> {
    config.validate()?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(config.delimiter)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    validate_header(&headers).finish()?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        let year_cell = record.get(0).unwrap_or_default();
        let year: i32 = year_cell.parse().map_err(|_| IoError::InvalidValue {
            line,
            column: headers.get(0).unwrap_or("Year").to_string(),
            value: year_cell.to_string(),
        })?;

        let mut values = [None; 12];
        for (i, slot) in values.iter_mut().enumerate() {
            let cell = record.get(i + 1).unwrap_or_default();
            if config.is_missing(cell) {
                continue;
            }
            let v: f64 = cell.parse().map_err(|_| IoError::InvalidValue {
                line,
                column: headers.get(i + 1).unwrap_or_default().to_string(),
                value: cell.to_string(),
            })?;
            *slot = Some(v);
        }
        rows.push(YearRow::new(year, values));
    }

    let record = PrecipitationRecord::new(rows)?;
    info!(
        years = record.n_years(),
        first = record.first_year(),
        last = record.last_year(),
        present = record.n_present(),
        "loaded precipitation record"
    );
    Ok(record)
}
