//! Orchestration of all (window, family) units.

use hydrofreq_aggregate::{
    AggregateOptions, AggregatedSeries, AggregationWindow, WindowGroup, aggregate,
};
use hydrofreq_distribution::{DistributionFamily, fit};
use hydrofreq_return_period::{
    frequency_histogram, probability_curve, quantile_for_return_period, return_period_for_value,
};
use hydrofreq_series::PrecipitationRecord;
use hydrofreq_spi::{CategoryCounts, standardize};
use rayon::prelude::*;
use tracing::{debug, debug_span, info, info_span, warn};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::failure::UnitFailure;
use crate::report::{
    AnalysisReport, FrequencyFit, FrequencyUnit, InverseLookup, Outcome, SettingsSummary,
    SpiResult, SpiUnit,
};
use crate::summary::{RecordSummary, annual_summary};

/// Aggregated samples of one window.
struct WindowSamples {
    group: WindowGroup,
    window: AggregationWindow,
    /// Recorded values.
    raw: AggregatedSeries,
    /// Non-positive months replaced by the positive floor.
    floored: AggregatedSeries,
}

impl WindowSamples {
    /// Frequency sample for `family`: floored for families that need
    /// positive values, recorded values otherwise.
    fn frequency_sample(&self, family: DistributionFamily) -> &AggregatedSeries {
        if family.requires_positive() {
            &self.floored
        } else {
            &self.raw
        }
    }
}

/// Runs frequency analysis and SPI for every configured (window, family)
/// unit of `record`.
///
/// Unit failures are recorded in the report; only configuration problems
/// abort the run.
///
/// # Errors
///
/// [`AnalysisError::InvalidConfig`] if `config` does not validate.
pub fn run_analysis(
    record: &PrecipitationRecord,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, AnalysisError> {
    config.validate()?;
    let _span = info_span!("analysis", years = record.n_years()).entered();

    let raw_opts = AggregateOptions::new().with_trim_partial_windows(config.trim_partial_windows());
    let floored_opts = raw_opts.clone().with_positive_floor(config.positive_floor());

    let windows = config.windows();
    let samples = windows
        .iter()
        .map(|(group, window)| {
            Ok(WindowSamples {
                group: *group,
                window: window.clone(),
                raw: aggregate(record, window, &raw_opts)?,
                floored: aggregate(record, window, &floored_opts)?,
            })
        })
        .collect::<Result<Vec<_>, AnalysisError>>()?;

    let families = config.families();
    let keys: Vec<(usize, usize)> = (0..samples.len())
        .flat_map(|w| (0..families.len()).map(move |f| (w, f)))
        .collect();
    info!(
        windows = samples.len(),
        families = families.len(),
        units = keys.len(),
        "running analysis"
    );

    let mut results: Vec<((usize, usize), FrequencyUnit, SpiUnit)> = keys
        .par_iter()
        .map(|&(w, f)| {
            let ws = &samples[w];
            let family = families[f];
            let _span = debug_span!("unit", window = %ws.window, %family).entered();
            (
                (w, f),
                frequency_unit(ws, family, config),
                spi_unit(ws, family, config),
            )
        })
        .collect();
    // Re-associate with the (window, family) key; never rely on completion order.
    results.sort_by_key(|(key, _, _)| *key);

    let (frequency, spi): (Vec<_>, Vec<_>) = results.into_iter().map(|(_, f, s)| (f, s)).unzip();

    let report = AnalysisReport {
        record: RecordSummary::of(record),
        settings: SettingsSummary {
            return_periods: config.return_periods().to_vec(),
            thresholds: config.thresholds().to_vec(),
            families: config.families().to_vec(),
            windows: windows.iter().map(|(_, w)| w.name().to_string()).collect(),
            positive_floor: config.positive_floor(),
            histogram_bins: config.histogram_bins(),
            spi_clamp: config.spi().probability_clamp(),
            saturation_eps: config.saturation_eps(),
        },
        frequency,
        spi,
        annual: annual_summary(record),
    };
    info!(failed = report.n_failed(), "analysis complete");
    Ok(report)
}

fn frequency_unit(
    ws: &WindowSamples,
    family: DistributionFamily,
    config: &AnalysisConfig,
) -> FrequencyUnit {
    let sample = ws.frequency_sample(family);
    let outcome = match frequency_fit(sample, family, config) {
        Ok(fit) => Outcome::Computed(fit),
        Err(failure) => {
            warn!(window = %ws.window, %family, %failure, "frequency unit not computable");
            Outcome::NotComputable(failure)
        }
    };
    FrequencyUnit {
        window: ws.window.name().to_string(),
        group: ws.group,
        family,
        sample_size: sample.len(),
        missing_years: sample.missing_years().to_vec(),
        outcome,
    }
}

fn frequency_fit(
    sample: &AggregatedSeries,
    family: DistributionFamily,
    config: &AnalysisConfig,
) -> Result<FrequencyFit, UnitFailure> {
    let distribution = fit(sample.values(), family, config.fit()).map_err(|e| UnitFailure::from(&e))?;

    let quantiles = config
        .return_periods()
        .iter()
        .map(|&t| quantile_for_return_period(&distribution, t))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| UnitFailure::from(&e))?;

    let inverse = config
        .thresholds()
        .iter()
        .map(|&threshold| {
            match return_period_for_value(&distribution, threshold, config.saturation_eps()) {
                Ok(t) => InverseLookup {
                    threshold,
                    return_period: Some(t),
                    failure: None,
                },
                Err(e) => {
                    debug!(threshold, error = %e, "inverse lookup not computable");
                    InverseLookup {
                        threshold,
                        return_period: None,
                        failure: Some(UnitFailure::from(&e)),
                    }
                }
            }
        })
        .collect();

    let curve = probability_curve(&distribution, sample.values());
    let histogram = frequency_histogram(&distribution, sample.values(), config.histogram_bins());
    Ok(FrequencyFit {
        distribution,
        quantiles,
        inverse,
        curve,
        histogram,
    })
}

fn spi_unit(ws: &WindowSamples, family: DistributionFamily, config: &AnalysisConfig) -> SpiUnit {
    let outcome = match standardize(&ws.floored, family, config.fit(), config.spi()) {
        Ok((distribution, values)) => {
            let counts: CategoryCounts = values.iter().map(|v| v.category).collect();
            Outcome::Computed(SpiResult {
                distribution,
                values,
                counts,
            })
        }
        Err(e) => {
            let failure = UnitFailure::from(&e);
            warn!(window = %ws.window, %family, %failure, "spi unit not computable");
            Outcome::NotComputable(failure)
        }
    };
    SpiUnit {
        window: ws.window.name().to_string(),
        group: ws.group,
        family,
        sample_size: ws.floored.len(),
        outcome,
    }
}
