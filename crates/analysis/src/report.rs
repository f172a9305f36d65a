//! Structured results of an analysis run.

use hydrofreq_aggregate::WindowGroup;
use hydrofreq_distribution::{DistributionFamily, FittedDistribution};
use hydrofreq_return_period::{CurvePoint, HistogramBin, ReturnPeriodQuantile};
use hydrofreq_spi::{CategoryCounts, SpiValue};
use serde::Serialize;

use crate::error::AnalysisError;
use crate::failure::UnitFailure;
use crate::summary::{AnnualSummary, RecordSummary};

/// Result of one unit: computed, or an explicit failure marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum Outcome<T> {
    #[serde(rename = "ok")]
    Computed(T),
    #[serde(rename = "not computable")]
    NotComputable(UnitFailure),
}

impl<T> Outcome<T> {
    pub fn computed(&self) -> Option<&T> {
        match self {
            Outcome::Computed(v) => Some(v),
            Outcome::NotComputable(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&UnitFailure> {
        match self {
            Outcome::Computed(_) => None,
            Outcome::NotComputable(f) => Some(f),
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Outcome::Computed(_))
    }
}

/// Return period of one threshold value, or why it has none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InverseLookup {
    pub threshold: f64,
    pub return_period: Option<f64>,
    pub failure: Option<UnitFailure>,
}

/// A successful frequency fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyFit {
    pub distribution: FittedDistribution,
    pub quantiles: Vec<ReturnPeriodQuantile>,
    pub inverse: Vec<InverseLookup>,
    pub curve: Vec<CurvePoint>,
    pub histogram: Vec<HistogramBin>,
}

/// Frequency analysis of one (window, family) unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyUnit {
    pub window: String,
    pub group: WindowGroup,
    pub family: DistributionFamily,
    /// Number of years with a total.
    pub sample_size: usize,
    pub missing_years: Vec<i32>,
    #[serde(flatten)]
    pub outcome: Outcome<FrequencyFit>,
}

/// A successful SPI computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpiResult {
    pub distribution: FittedDistribution,
    pub values: Vec<SpiValue>,
    pub counts: CategoryCounts,
}

/// SPI of one (window, family) unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpiUnit {
    pub window: String,
    pub group: WindowGroup,
    pub family: DistributionFamily,
    pub sample_size: usize,
    #[serde(flatten)]
    pub outcome: Outcome<SpiResult>,
}

/// Settings the report was produced with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsSummary {
    pub return_periods: Vec<f64>,
    pub thresholds: Vec<f64>,
    pub families: Vec<DistributionFamily>,
    pub windows: Vec<String>,
    pub positive_floor: f64,
    pub histogram_bins: usize,
    pub spi_clamp: f64,
    pub saturation_eps: f64,
}

/// Everything computed from one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub record: RecordSummary,
    pub settings: SettingsSummary,
    /// Ordered by window, then family.
    pub frequency: Vec<FrequencyUnit>,
    /// Ordered by window, then family.
    pub spi: Vec<SpiUnit>,
    pub annual: Vec<AnnualSummary>,
}

impl AnalysisReport {
    /// Frequency unit for `(window, family)`.
    pub fn frequency_unit(&self, window: &str, family: DistributionFamily) -> Option<&FrequencyUnit> {
        self.frequency
            .iter()
            .find(|u| u.window == window && u.family == family)
    }

    /// SPI unit for `(window, family)`.
    pub fn spi_unit(&self, window: &str, family: DistributionFamily) -> Option<&SpiUnit> {
        self.spi
            .iter()
            .find(|u| u.window == window && u.family == family)
    }

    /// Number of frequency and SPI units that could not be computed.
    pub fn n_failed(&self) -> usize {
        self.frequency
            .iter()
            .filter(|u| !u.outcome.is_computed())
            .count()
            + self.spi.iter().filter(|u| !u.outcome.is_computed()).count()
    }

    /// Serialize the report to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String, AnalysisError> {
        serde_json::to_string_pretty(self).map_err(|e| AnalysisError::Serialization {
            reason: e.to_string(),
        })
    }
}
