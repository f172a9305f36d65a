//! Return-period arithmetic over fitted distributions.
//!
//! A return period `T` (years) corresponds to the annual non-exceedance
//! probability `1 − 1/T`. This crate converts in both directions and builds
//! empirical-versus-fitted probability curves and frequency tables.
//!
//! | Operation | Function |
//! |-----------|----------|
//! | `T → p` | [`probability_of_non_exceedance`] |
//! | `T → quantile` | [`quantile_for_return_period`] |
//! | `value → T` | [`return_period_for_value`] |
//! | sample → curve | [`probability_curve`] |
//! | sample → frequency table | [`frequency_histogram`] |
//!
//! Quantiles of precipitation are physically non-negative, so a negative
//! fitted quantile is clamped to zero and flagged.

mod curve;
mod error;
mod histogram;
mod period;

pub use curve::{CurvePoint, probability_curve};
pub use error::ReturnPeriodError;
pub use histogram::{HistogramBin, frequency_histogram};
pub use period::{
    DEFAULT_SATURATION_EPS, ReturnPeriodQuantile, probability_of_non_exceedance,
    quantile_for_return_period, return_period_for_value,
};
