//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus the header check for the
//! monthly input table.

use csv::StringRecord;
use hydrofreq_calendar::Month;

use crate::error::IoError;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` if nothing was recorded, otherwise one
    /// [`IoError::Validation`] whose details join all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Checks for a year column followed by the twelve months in calendar order.
pub(crate) fn validate_header(headers: &StringRecord) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    if headers.len() != 13 {
        c.push(format!(
            "expected 13 columns (year + 12 months), got {}",
            headers.len()
        ));
    }

    match headers.get(0) {
        Some(h) if h.trim().eq_ignore_ascii_case("year") => {}
        Some(h) => c.push(format!("first column must be 'Year', got '{h}'")),
        None => c.push("header row is empty"),
    }

    for (expected, header) in Month::ALL.iter().zip(headers.iter().skip(1)) {
        match Month::from_name(header) {
            Ok(m) if m == *expected => {}
            Ok(m) => c.push(format!(
                "column '{header}' is {m}, expected {expected} at this position"
            )),
            Err(_) => c.push(format!("column '{header}' is not a month name")),
        }
    }

    c
}
