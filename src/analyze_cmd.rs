//! Analyze command: run every unit and write the result tables.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use hydrofreq_analysis::{AnalysisReport, run_analysis};
use hydrofreq_io::{read_precipitation_csv, write_csv, write_json};

use crate::cli::{AnalyzeArgs, CommonArgs};
use crate::config::{self, HydrofreqConfig};
use crate::convert;

pub const FREQUENCY_FILE: &str = "frequency.csv";
pub const INVERSE_FILE: &str = "inverse_return_periods.csv";
pub const CURVES_FILE: &str = "probability_curves.csv";
pub const HISTOGRAM_FILE: &str = "frequency_histogram.csv";
pub const SPI_FILE: &str = "spi.csv";
pub const CATEGORIES_FILE: &str = "spi_categories.csv";
pub const ANNUAL_FILE: &str = "annual_summary.csv";
pub const REPORT_FILE: &str = "report.json";

/// Run the analysis pipeline and export all tables.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    let mut config = config::load(args.common.config.as_deref())?;
    if let Some(dir) = &args.output_dir {
        config.io.output_dir = dir.clone();
    }
    let report = load_and_analyze(&mut config, &args.common)?;

    write_report(&report, &config.io.output_dir)?;
    if report.n_failed() > 0 {
        warn!(
            failed = report.n_failed(),
            "some units were not computable; see status columns"
        );
    }
    Ok(())
}

/// Shared by `analyze` and `summary`: applies overrides, reads the input and
/// runs the analysis.
pub fn load_and_analyze(config: &mut HydrofreqConfig, args: &CommonArgs) -> Result<AnalysisReport> {
    convert::apply_overrides(config, args);

    let input = config.io.input.as_ref().ok_or_else(|| {
        anyhow::anyhow!("no input path: set [io].input in config or use --input")
    })?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let analysis_cfg = convert::build_analysis_config(&config.analysis)?;

    info!(path = %input.display(), "reading precipitation table");
    let record = read_precipitation_csv(input, &reader_cfg)
        .with_context(|| format!("failed to read input: {}", input.display()))?;

    run_analysis(&record, &analysis_cfg).context("analysis failed")
}

/// Writes every table of `report` into `dir`.
pub fn write_report(report: &AnalysisReport, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

    let write = |name: &str, result: Result<(), hydrofreq_io::IoError>| -> Result<()> {
        result.with_context(|| format!("failed to write {}", dir.join(name).display()))
    };

    write(FREQUENCY_FILE, write_csv(&dir.join(FREQUENCY_FILE), &report.frequency_rows()))?;
    write(INVERSE_FILE, write_csv(&dir.join(INVERSE_FILE), &report.inverse_rows()))?;
    write(CURVES_FILE, write_csv(&dir.join(CURVES_FILE), &report.curve_rows()))?;
    write(HISTOGRAM_FILE, write_csv(&dir.join(HISTOGRAM_FILE), &report.histogram_rows()))?;
    write(SPI_FILE, write_csv(&dir.join(SPI_FILE), &report.spi_rows()))?;
    write(CATEGORIES_FILE, write_csv(&dir.join(CATEGORIES_FILE), &report.category_rows()))?;
    write(ANNUAL_FILE, write_csv(&dir.join(ANNUAL_FILE), &report.annual))?;
    write(REPORT_FILE, write_json(&dir.join(REPORT_FILE), report))?;

    info!(dir = %dir.display(), "results written");
    Ok(())
}
