//! Probability-integral-transform standardization.

use hydrofreq_aggregate::AggregatedSeries;
use hydrofreq_distribution::{
    DistributionFamily, FitConfig, FittedDistribution, fit, standard_normal_quantile,
};
use serde::Serialize;
use tracing::debug;

use crate::category::DroughtCategory;
use crate::config::SpiConfig;
use crate::error::SpiError;

/// One standardized score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpiValue {
    pub year: i32,
    pub window: String,
    pub family: DistributionFamily,
    /// Input total.
    pub value: f64,
    /// Clamped CDF of `value` under the fitted distribution.
    pub probability: f64,
    pub score: f64,
    pub category: DroughtCategory,
}

/// Fits `family` to `series` and returns the fitted distribution with one
/// [`SpiValue`] per year, in the series' year order.
///
/// # Errors
///
/// - [`SpiError::InvalidConfig`] if `spi_config` does not validate.
/// - [`SpiError::Fit`] if the series cannot be fitted; no score is produced.
pub fn standardize(
    series: &AggregatedSeries,
    family: DistributionFamily,
    fit_config: &FitConfig,
    spi_config: &SpiConfig,
) -> Result<(FittedDistribution, Vec<SpiValue>), SpiError> {
    spi_config.validate()?;
    let dist = fit(series.values(), family, fit_config)?;

    let eps = spi_config.probability_clamp();
    let window = series.window().name().to_string();
    let values: Vec<SpiValue> = series
        .iter()
        .map(|(year, value)| {
            let probability = dist.cdf(value).clamp(eps, 1.0 - eps);
            let score = standard_normal_quantile(probability);
            SpiValue {
                year,
                window: window.clone(),
                family,
                value,
                probability,
                score,
                category: DroughtCategory::classify(score),
            }
        })
        .collect();

    debug!(window = %window, %family, n = values.len(), "standardized series");
    Ok((dist, values))
}
