//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::cli::CommonArgs;
use crate::config::*;

use hydrofreq_aggregate::WindowGroup;
use hydrofreq_analysis::AnalysisConfig;
use hydrofreq_calendar::Month;
use hydrofreq_distribution::{DistributionFamily, FitConfig, GumbelEstimator};
use hydrofreq_io::ReaderConfig;
use hydrofreq_spi::SpiConfig;

/// Parses a Gumbel estimator name string into the corresponding enum variant.
pub fn parse_gumbel_estimator(s: &str) -> Result<GumbelEstimator> {
    match s.to_lowercase().as_str() {
        "mle" | "maximum-likelihood" => Ok(GumbelEstimator::MaximumLikelihood),
        "moments" | "mom" => Ok(GumbelEstimator::Moments),
        other => bail!("unknown gumbel estimator: {other:?}"),
    }
}

/// Parses a one-character field delimiter.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s.as_bytes() {
        [b] => Ok(*b),
        _ if s == "\\t" || s.eq_ignore_ascii_case("tab") => Ok(b'\t'),
        _ => bail!("delimiter must be a single ASCII character, got {s:?}"),
    }
}

pub fn parse_families(names: &[String]) -> Result<Vec<DistributionFamily>> {
    names
        .iter()
        .map(|n| {
            n.parse::<DistributionFamily>()
                .with_context(|| format!("invalid family {n:?}"))
        })
        .collect()
}

pub fn parse_window_groups(names: &[String]) -> Result<Vec<WindowGroup>> {
    names
        .iter()
        .map(|n| {
            n.parse::<WindowGroup>()
                .with_context(|| format!("invalid window group {n:?}"))
        })
        .collect()
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoConfig) -> Result<ReaderConfig> {
    let mut cfg = ReaderConfig::default().with_delimiter(parse_delimiter(&io.delimiter)?);
    for marker in &io.missing_markers {
        cfg = cfg.with_missing_marker(marker);
    }
    Ok(cfg)
}

/// Builds an [`AnalysisConfig`] from the TOML analysis section.
pub fn build_analysis_config(a: &AnalysisToml) -> Result<AnalysisConfig> {
    let water_year_start = a.water_year_start.parse::<Month>()
        .with_context(|| format!("invalid water_year_start {:?}", a.water_year_start))?;
    let fit = FitConfig::new()
        .with_spread_floor(a.spread_floor)
        .with_gumbel_estimator(parse_gumbel_estimator(&a.gumbel_estimator)?);
    let config = AnalysisConfig::new()
        .with_return_periods(a.return_periods.clone())
        .with_thresholds(a.thresholds.clone())
        .with_families(parse_families(&a.families)?)
        .with_window_groups(parse_window_groups(&a.windows)?)
        .with_rolling_widths(a.rolling_widths.clone())
        .with_histogram_bins(a.histogram_bins)
        .with_water_year_start(water_year_start)
        .with_positive_floor(a.positive_floor)
        .with_saturation_eps(a.saturation_eps)
        .with_trim_partial_windows(a.trim_partial_windows)
        .with_fit(fit)
        .with_spi(SpiConfig::new().with_probability_clamp(a.spi_clamp));
    config.validate().context("invalid [analysis] configuration")?;
    Ok(config)
}

/// Applies command-line overrides on top of the file configuration.
pub fn apply_overrides(config: &mut HydrofreqConfig, args: &CommonArgs) {
    if let Some(input) = &args.input {
        config.io.input = Some(input.clone());
    }
    if !args.families.is_empty() {
        config.analysis.families = args.families.clone();
    }
    if !args.windows.is_empty() {
        config.analysis.windows = args.windows.clone();
    }
    if !args.return_periods.is_empty() {
        config.analysis.return_periods = args.return_periods.clone();
    }
    if !args.thresholds.is_empty() {
        config.analysis.thresholds = args.thresholds.clone();
    }
    if !args.rolling_widths.is_empty() {
        config.analysis.rolling_widths = args.rolling_widths.clone();
    }
}
