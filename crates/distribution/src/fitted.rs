//! Fitted distribution variant with closed-form CDF, inverse CDF and PDF.

use serde::Serialize;

use crate::error::FitError;
use crate::family::DistributionFamily;
use crate::normal::{standard_normal_cdf, standard_normal_quantile};

const SQRT_2PI: f64 = 2.506_628_274_631_000_7;

/// A fitted distribution.
///
/// Spread parameters (`std_dev`, `shape`, `scale`) are always finite and
/// strictly positive. Use the validating constructors when building one by
/// hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "family", rename_all = "kebab-case")]
pub enum FittedDistribution {
    /// Normal with mean and standard deviation.
    Normal { mean: f64, std_dev: f64 },
    /// Log-Normal with shape σ (sd of ln x) and scale e^μ (μ the mean of
    /// ln x). Location is fixed at zero.
    LogNormal { shape: f64, scale: f64 },
    /// Gumbel (maxima) with location μ and scale β.
    Gumbel { location: f64, scale: f64 },
}

fn check_spread(family: DistributionFamily, name: &str, v: f64) -> Result<(), FitError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(FitError::InvalidParameters {
            family,
            reason: format!("{name} must be finite and > 0, got {v}"),
        })
    }
}

fn check_finite(family: DistributionFamily, name: &str, v: f64) -> Result<(), FitError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(FitError::InvalidParameters {
            family,
            reason: format!("{name} must be finite, got {v}"),
        })
    }
}

impl FittedDistribution {
    /// Builds a Normal distribution.
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self, FitError> {
        check_finite(DistributionFamily::Normal, "mean", mean)?;
        check_spread(DistributionFamily::Normal, "std_dev", std_dev)?;
        Ok(Self::Normal { mean, std_dev })
    }

    /// Builds a Log-Normal distribution with location zero.
    pub fn log_normal(shape: f64, scale: f64) -> Result<Self, FitError> {
        check_spread(DistributionFamily::LogNormal, "shape", shape)?;
        check_spread(DistributionFamily::LogNormal, "scale", scale)?;
        Ok(Self::LogNormal { shape, scale })
    }

    /// Builds a Gumbel (maxima) distribution.
    pub fn gumbel(location: f64, scale: f64) -> Result<Self, FitError> {
        check_finite(DistributionFamily::Gumbel, "location", location)?;
        check_spread(DistributionFamily::Gumbel, "scale", scale)?;
        Ok(Self::Gumbel { location, scale })
    }

    /// The family tag.
    pub fn family(&self) -> DistributionFamily {
        match self {
            Self::Normal { .. } => DistributionFamily::Normal,
            Self::LogNormal { .. } => DistributionFamily::LogNormal,
            Self::Gumbel { .. } => DistributionFamily::Gumbel,
        }
    }

    /// Named parameters, for tabular export.
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::Normal { mean, std_dev } => vec![("mean", mean), ("std_dev", std_dev)],
            Self::LogNormal { shape, scale } => {
                vec![("shape", shape), ("scale", scale), ("location", 0.0)]
            }
            Self::Gumbel { location, scale } => vec![("location", location), ("scale", scale)],
        }
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, x: f64) -> f64 {
        match *self {
            Self::Normal { mean, std_dev } => standard_normal_cdf((x - mean) / std_dev),
            Self::LogNormal { shape, scale } => {
                if x <= 0.0 {
                    0.0
                } else {
                    standard_normal_cdf((x / scale).ln() / shape)
                }
            }
            Self::Gumbel { location, scale } => (-(-(x - location) / scale).exp()).exp(),
        }
    }

    /// Inverse CDF (quantile function).
    ///
    /// `p <= 0` maps to the lower end of the support and `p >= 1` to `+inf`.
    pub fn inverse_cdf(&self, p: f64) -> f64 {
        match *self {
            Self::Normal { mean, std_dev } => mean + std_dev * standard_normal_quantile(p),
            Self::LogNormal { shape, scale } => {
                if p <= 0.0 {
                    0.0
                } else {
                    scale * (shape * standard_normal_quantile(p)).exp()
                }
            }
            Self::Gumbel { location, scale } => {
                if p <= 0.0 {
                    f64::NEG_INFINITY
                } else if p >= 1.0 {
                    f64::INFINITY
                } else {
                    location - scale * (-p.ln()).ln()
                }
            }
        }
    }

    /// Probability density function.
    pub fn pdf(&self, x: f64) -> f64 {
        match *self {
            Self::Normal { mean, std_dev } => {
                let z = (x - mean) / std_dev;
                (-0.5 * z * z).exp() / (std_dev * SQRT_2PI)
            }
            Self::LogNormal { shape, scale } => {
                if x <= 0.0 {
                    return 0.0;
                }
                let z = (x / scale).ln() / shape;
                (-0.5 * z * z).exp() / (x * shape * SQRT_2PI)
            }
            Self::Gumbel { location, scale } => {
                let z = (x - location) / scale;
                (-(z + (-z).exp())).exp() / scale
            }
        }
    }

    /// Median of the distribution.
    pub fn median(&self) -> f64 {
        self.inverse_cdf(0.5)
    }
}
