//! The single fitting entry point.

use hydrofreq_stats::{is_constant, mean, population_sd};
use tracing::{debug, warn};

use crate::config::{FitConfig, GumbelEstimator};
use crate::error::FitError;
use crate::family::DistributionFamily;
use crate::fitted::FittedDistribution;
use crate::gumbel;

/// Fit `family` to `sample`.
///
/// - **Normal**: sample mean and population standard deviation.
/// - **Log-Normal**: location 0; shape is the maximum-likelihood (divide by
///   n) sd of ln(x) and scale is exp(mean of ln(x)), both over the strictly
///   positive values. Non-positive values are skipped here; callers that
///   need year alignment floor them before aggregation instead.
/// - **Gumbel**: per [`FitConfig::gumbel_estimator`].
///
/// A positive spread below [`FitConfig::spread_floor`] is raised to the
/// floor.
///
/// # Errors
///
/// - [`FitError::InvalidConfig`] if `config` does not validate.
/// - [`FitError::NonFiniteSample`] if any value is NaN or infinite.
/// - [`FitError::InsufficientData`] if the sample has fewer than 2 values,
///   or (Log-Normal) no strictly positive value.
/// - [`FitError::DegenerateSample`] if every usable value is identical.
pub fn fit(
    sample: &[f64],
    family: DistributionFamily,
    config: &FitConfig,
) -> Result<FittedDistribution, FitError> {
    config.validate()?;

    if let Some(index) = sample.iter().position(|x| !x.is_finite()) {
        return Err(FitError::NonFiniteSample { index });
    }
    if sample.len() < 2 {
        return Err(FitError::InsufficientData {
            family,
            needed: 2,
            got: sample.len(),
        });
    }

    let fitted = match family {
        DistributionFamily::Normal => fit_normal(sample, config),
        DistributionFamily::LogNormal => fit_log_normal(sample, config),
        DistributionFamily::Gumbel => fit_gumbel(sample, config),
    }?;

    debug!(%family, n = sample.len(), params = ?fitted.parameters(), "fitted distribution");
    Ok(fitted)
}

fn fit_normal(sample: &[f64], config: &FitConfig) -> Result<FittedDistribution, FitError> {
    if is_constant(sample, 0.0) {
        return Err(FitError::DegenerateSample {
            family: DistributionFamily::Normal,
        });
    }
    let std_dev = population_sd(sample).max(config.spread_floor());
    FittedDistribution::normal(mean(sample), std_dev)
}

fn fit_log_normal(sample: &[f64], config: &FitConfig) -> Result<FittedDistribution, FitError> {
    let positive: Vec<f64> = sample.iter().copied().filter(|&x| x > 0.0).collect();
    if positive.is_empty() {
        return Err(FitError::InsufficientData {
            family: DistributionFamily::LogNormal,
            needed: 1,
            got: 0,
        });
    }
    if positive.len() < sample.len() {
        debug!(
            skipped = sample.len() - positive.len(),
            "log-normal fit skipped non-positive values"
        );
    }
    if is_constant(&positive, 0.0) {
        return Err(FitError::DegenerateSample {
            family: DistributionFamily::LogNormal,
        });
    }

    let logs: Vec<f64> = positive.iter().map(|x| x.ln()).collect();
    let shape = population_sd(&logs).max(config.spread_floor());
    let scale = mean(&logs).exp();
    FittedDistribution::log_normal(shape, scale)
}

fn fit_gumbel(sample: &[f64], config: &FitConfig) -> Result<FittedDistribution, FitError> {
    if is_constant(sample, 0.0) {
        return Err(FitError::DegenerateSample {
            family: DistributionFamily::Gumbel,
        });
    }

    let (mom_location, mom_scale) = gumbel::fit_moments(sample);
    let (location, scale) = match config.gumbel_estimator() {
        GumbelEstimator::Moments => (mom_location, mom_scale),
        GumbelEstimator::MaximumLikelihood => {
            let start = mom_scale.max(config.spread_floor());
            match gumbel::fit_mle(sample, start) {
                Some(est) => est,
                None => {
                    warn!(
                        n = sample.len(),
                        "gumbel maximum likelihood did not converge, using moments"
                    );
                    (mom_location, mom_scale)
                }
            }
        }
    };
    FittedDistribution::gumbel(location, scale.max(config.spread_floor()))
}
