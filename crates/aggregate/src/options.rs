//! Aggregation options.

use crate::error::AggregateError;

/// Options controlling [`aggregate`](crate::aggregate).
///
/// # Defaults
///
/// | Field | Default |
/// |-------|---------|
/// | `positive_floor` | `None` (values used as recorded) |
/// | `trim_partial_windows` | `true` |
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateOptions {
    positive_floor: Option<f64>,
    trim_partial_windows: bool,
}

impl AggregateOptions {
    /// Creates options with the defaults above.
    pub fn new() -> Self {
        Self {
            positive_floor: None,
            trim_partial_windows: true,
        }
    }

    /// Replace non-positive monthly values with `floor` before summing.
    pub fn with_positive_floor(mut self, floor: f64) -> Self {
        self.positive_floor = Some(floor);
        self
    }

    /// Sum recorded values unchanged.
    pub fn without_positive_floor(mut self) -> Self {
        self.positive_floor = None;
        self
    }

    /// Whether windows not fully covered by the record's years are dropped.
    pub fn with_trim_partial_windows(mut self, trim: bool) -> Self {
        self.trim_partial_windows = trim;
        self
    }

    pub fn positive_floor(&self) -> Option<f64> {
        self.positive_floor
    }

    pub fn trim_partial_windows(&self) -> bool {
        self.trim_partial_windows
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// [`AggregateError::InvalidConfig`] if the floor is not finite and > 0.
    pub fn validate(&self) -> Result<(), AggregateError> {
        if let Some(floor) = self.positive_floor {
            if !floor.is_finite() || floor <= 0.0 {
                return Err(AggregateError::InvalidConfig {
                    reason: format!("positive_floor must be finite and > 0, got {floor}"),
                });
            }
        }
        Ok(())
    }

    /// Applies the floor, if any, to one monthly value.
    pub(crate) fn floored(&self, value: f64) -> f64 {
        match self.positive_floor {
            Some(floor) if value <= 0.0 => floor,
            _ => value,
        }
    }
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = AggregateOptions::new();
        assert_eq!(o.positive_floor(), None);
        assert!(o.trim_partial_windows());
        assert!(o.validate().is_ok());
        assert_eq!(o, AggregateOptions::default());
    }

    #[test]
    fn floor_replaces_non_positive_only() {
        let o = AggregateOptions::new().with_positive_floor(0.01);
        assert_eq!(o.floored(0.0), 0.01);
        assert_eq!(o.floored(-0.0), 0.01);
        assert_eq!(o.floored(0.005), 0.005);
        assert_eq!(o.floored(12.0), 12.0);
        assert_eq!(o.without_positive_floor().floored(0.0), 0.0);
    }

    #[test]
    fn invalid_floor() {
        for floor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let o = AggregateOptions::new().with_positive_floor(floor);
            assert!(matches!(
                o.validate(),
                Err(AggregateError::InvalidConfig { .. })
            ));
        }
    }
}
