//! Flat rows for tabular export.
//!
//! Failed units produce a single row with `status` set to
//! [`STATUS_NOT_COMPUTABLE`] and the failure kind and message filled in.

use hydrofreq_aggregate::WindowGroup;
use hydrofreq_distribution::{DistributionFamily, FittedDistribution};
use serde::Serialize;

use crate::failure::{FailureKind, UnitFailure};
use crate::report::{AnalysisReport, Outcome};

pub const STATUS_OK: &str = "ok";
pub const STATUS_NOT_COMPUTABLE: &str = "not computable";

/// One fitted quantile, or one failed unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    pub window: String,
    pub group: WindowGroup,
    pub family: DistributionFamily,
    pub status: &'static str,
    pub sample_size: usize,
    /// `name=value` pairs separated by `;`.
    pub parameters: Option<String>,
    pub return_period: Option<f64>,
    pub non_exceedance: Option<f64>,
    pub quantile: Option<f64>,
    pub clamped: Option<bool>,
    pub failure_kind: Option<FailureKind>,
    pub message: Option<String>,
}

/// One threshold lookup, or one failed unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InverseRow {
    pub window: String,
    pub family: DistributionFamily,
    pub threshold: Option<f64>,
    pub status: &'static str,
    pub return_period: Option<f64>,
    pub failure_kind: Option<FailureKind>,
    pub message: Option<String>,
}

/// One point of a probability curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveRow {
    pub window: String,
    pub family: DistributionFamily,
    pub rank: usize,
    pub observed: f64,
    pub plotting_position: f64,
    pub empirical_return_period: f64,
    pub fitted: f64,
    pub fitted_density: f64,
}

/// One bin of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramRow {
    pub window: String,
    pub family: DistributionFamily,
    pub bin: usize,
    pub lower: f64,
    pub upper: f64,
    pub centre: f64,
    pub count: usize,
    pub relative_frequency: f64,
    pub cumulative_frequency: f64,
    pub empirical_density: f64,
    pub fitted_density: f64,
}

/// One SPI score, or one failed unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpiRow {
    pub window: String,
    pub group: WindowGroup,
    pub family: DistributionFamily,
    pub status: &'static str,
    pub year: Option<i32>,
    pub value: Option<f64>,
    pub probability: Option<f64>,
    pub score: Option<f64>,
    pub category: Option<&'static str>,
    pub failure_kind: Option<FailureKind>,
    pub message: Option<String>,
}

/// Count of one category in one SPI unit, or one failed unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub window: String,
    pub family: DistributionFamily,
    pub status: &'static str,
    pub category: Option<&'static str>,
    pub count: Option<usize>,
    pub failure_kind: Option<FailureKind>,
    pub message: Option<String>,
}

fn format_parameters(dist: &FittedDistribution) -> String {
    dist.parameters()
        .iter()
        .map(|(name, v)| format!("{name}={v}"))
        .collect::<Vec<_>>()
        .join(";")
}

fn split(failure: Option<&UnitFailure>) -> (Option<FailureKind>, Option<String>) {
    match failure {
        Some(f) => (Some(f.kind), Some(f.message.clone())),
        None => (None, None),
    }
}

impl AnalysisReport {
    pub fn frequency_rows(&self) -> Vec<FrequencyRow> {
        let mut rows = Vec::new();
        for unit in &self.frequency {
            match &unit.outcome {
                Outcome::Computed(fit) => {
                    let parameters = format_parameters(&fit.distribution);
                    for q in &fit.quantiles {
                        rows.push(FrequencyRow {
                            window: unit.window.clone(),
                            group: unit.group,
                            family: unit.family,
                            status: STATUS_OK,
                            sample_size: unit.sample_size,
                            parameters: Some(parameters.clone()),
                            return_period: Some(q.return_period),
                            non_exceedance: Some(q.non_exceedance),
                            quantile: Some(q.value),
                            clamped: Some(q.clamped),
                            failure_kind: None,
                            message: None,
                        });
                    }
                }
                Outcome::NotComputable(failure) => {
                    let (failure_kind, message) = split(Some(failure));
                    rows.push(FrequencyRow {
                        window: unit.window.clone(),
                        group: unit.group,
                        family: unit.family,
                        status: STATUS_NOT_COMPUTABLE,
                        sample_size: unit.sample_size,
                        parameters: None,
                        return_period: None,
                        non_exceedance: None,
                        quantile: None,
                        clamped: None,
                        failure_kind,
                        message,
                    });
                }
            }
        }
        rows
    }

    pub fn inverse_rows(&self) -> Vec<InverseRow> {
        let mut rows = Vec::new();
        for unit in &self.frequency {
            match &unit.outcome {
                Outcome::Computed(fit) => {
                    for lookup in &fit.inverse {
                        let (failure_kind, message) = split(lookup.failure.as_ref());
                        rows.push(InverseRow {
                            window: unit.window.clone(),
                            family: unit.family,
                            threshold: Some(lookup.threshold),
                            status: if lookup.failure.is_some() {
                                STATUS_NOT_COMPUTABLE
                            } else {
                                STATUS_OK
                            },
                            return_period: lookup.return_period,
                            failure_kind,
                            message,
                        });
                    }
                }
                Outcome::NotComputable(failure) => {
                    let (failure_kind, message) = split(Some(failure));
                    rows.push(InverseRow {
                        window: unit.window.clone(),
                        family: unit.family,
                        threshold: None,
                        status: STATUS_NOT_COMPUTABLE,
                        return_period: None,
                        failure_kind,
                        message,
                    });
                }
            }
        }
        rows
    }

    /// Curve points of computed units only.
    pub fn curve_rows(&self) -> Vec<CurveRow> {
        self.frequency
            .iter()
            .filter_map(|unit| unit.outcome.computed().map(|fit| (unit, fit)))
            .flat_map(|(unit, fit)| {
                fit.curve.iter().map(move |p| CurveRow {
                    window: unit.window.clone(),
                    family: unit.family,
                    rank: p.rank,
                    observed: p.observed,
                    plotting_position: p.plotting_position,
                    empirical_return_period: p.empirical_return_period,
                    fitted: p.fitted,
                    fitted_density: p.fitted_density,
                })
            })
            .collect()
    }

    /// Frequency-table bins of computed units only.
    pub fn histogram_rows(&self) -> Vec<HistogramRow> {
        self.frequency
            .iter()
            .filter_map(|unit| unit.outcome.computed().map(|fit| (unit, fit)))
            .flat_map(|(unit, fit)| {
                fit.histogram.iter().map(move |b| HistogramRow {
                    window: unit.window.clone(),
                    family: unit.family,
                    bin: b.bin,
                    lower: b.lower,
                    upper: b.upper,
                    centre: b.centre,
                    count: b.count,
                    relative_frequency: b.relative_frequency,
                    cumulative_frequency: b.cumulative_frequency,
                    empirical_density: b.empirical_density,
                    fitted_density: b.fitted_density,
                })
            })
            .collect()
    }

    pub fn spi_rows(&self) -> Vec<SpiRow> {
        let mut rows = Vec::new();
        for unit in &self.spi {
            match &unit.outcome {
                Outcome::Computed(result) => {
                    for v in &result.values {
                        rows.push(SpiRow {
                            window: unit.window.clone(),
                            group: unit.group,
                            family: unit.family,
                            status: STATUS_OK,
                            year: Some(v.year),
                            value: Some(v.value),
                            probability: Some(v.probability),
                            score: Some(v.score),
                            category: Some(v.category.label()),
                            failure_kind: None,
                            message: None,
                        });
                    }
                }
                Outcome::NotComputable(failure) => {
                    let (failure_kind, message) = split(Some(failure));
                    rows.push(SpiRow {
                        window: unit.window.clone(),
                        group: unit.group,
                        family: unit.family,
                        status: STATUS_NOT_COMPUTABLE,
                        year: None,
                        value: None,
                        probability: None,
                        score: None,
                        category: None,
                        failure_kind,
                        message,
                    });
                }
            }
        }
        rows
    }

    /// All six categories for every computed unit, driest first.
    pub fn category_rows(&self) -> Vec<CategoryRow> {
        let mut rows = Vec::new();
        for unit in &self.spi {
            match &unit.outcome {
                Outcome::Computed(result) => {
                    for (category, count) in result.counts.iter() {
                        rows.push(CategoryRow {
                            window: unit.window.clone(),
                            family: unit.family,
                            status: STATUS_OK,
                            category: Some(category.label()),
                            count: Some(count),
                            failure_kind: None,
                            message: None,
                        });
                    }
                }
                Outcome::NotComputable(failure) => {
                    let (failure_kind, message) = split(Some(failure));
                    rows.push(CategoryRow {
                        window: unit.window.clone(),
                        family: unit.family,
                        status: STATUS_NOT_COMPUTABLE,
                        category: None,
                        count: None,
                        failure_kind,
                        message,
                    });
                }
            }
        }
        rows
    }
}
