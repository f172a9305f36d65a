//! Conversions between return period, probability and value.

use hydrofreq_distribution::FittedDistribution;
use serde::Serialize;

use crate::error::ReturnPeriodError;

/// Default tolerance below one at which a CDF value counts as saturated.
pub const DEFAULT_SATURATION_EPS: f64 = 1e-9;

/// A quantile evaluated for one return period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReturnPeriodQuantile {
    /// Return period in years.
    pub return_period: f64,
    /// Non-exceedance probability `1 − 1/T`.
    pub non_exceedance: f64,
    /// Quantile after clamping at zero.
    pub value: f64,
    /// Quantile as produced by the inverse CDF.
    pub raw_value: f64,
    /// Whether the zero clamp changed the value.
    pub clamped: bool,
}

/// `1 − 1/T`.
///
/// # Errors
///
/// [`ReturnPeriodError::InvalidReturnPeriod`] unless `T` is finite and > 1.
pub fn probability_of_non_exceedance(return_period: f64) -> Result<f64, ReturnPeriodError> {
    if !return_period.is_finite() || return_period <= 1.0 {
        return Err(ReturnPeriodError::InvalidReturnPeriod {
            years: return_period,
        });
    }
    Ok(1.0 - 1.0 / return_period)
}

/// Quantile of `dist` at the non-exceedance probability of `return_period`,
/// clamped at zero.
pub fn quantile_for_return_period(
    dist: &FittedDistribution,
    return_period: f64,
) -> Result<ReturnPeriodQuantile, ReturnPeriodError> {
    let p = probability_of_non_exceedance(return_period)?;
    let raw_value = dist.inverse_cdf(p);
    let clamped = raw_value < 0.0;
    Ok(ReturnPeriodQuantile {
        return_period,
        non_exceedance: p,
        value: raw_value.max(0.0),
        raw_value,
        clamped,
    })
}

/// Return period `1 / (1 − CDF(v))` of `value` under `dist`.
///
/// # Errors
///
/// - [`ReturnPeriodError::SaturatedProbability`] when `CDF(v) >= 1 − eps`.
/// - [`ReturnPeriodError::NonFiniteValue`] for NaN or infinite `value`.
/// - [`ReturnPeriodError::InvalidTolerance`] unless `0 < eps < 1`.
pub fn return_period_for_value(
    dist: &FittedDistribution,
    value: f64,
    eps: f64,
) -> Result<f64, ReturnPeriodError> {
    if !(eps > 0.0 && eps < 1.0) {
        return Err(ReturnPeriodError::InvalidTolerance { eps });
    }
    if !value.is_finite() {
        return Err(ReturnPeriodError::NonFiniteValue { value });
    }
    let cdf = dist.cdf(value);
    if cdf >= 1.0 - eps {
        return Err(ReturnPeriodError::SaturatedProbability { value, cdf, eps });
    }
    Ok(1.0 / (1.0 - cdf))
}
