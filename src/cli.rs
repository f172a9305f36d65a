use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hydrological frequency analysis and SPI for monthly precipitation.
#[derive(Parser)]
#[command(
    name = "hydrofreq",
    version,
    about = "Frequency analysis and drought index for monthly precipitation records"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full analysis and write result tables.
    Analyze(AnalyzeArgs),
    /// Run the analysis and log a per-unit overview without writing files.
    Summary(SummaryArgs),
}

impl Command {
    /// Lowest verbosity at which the command's output is visible.
    pub fn min_verbosity(&self) -> u8 {
        match self {
            Command::Analyze(_) => 0,
            Command::Summary(_) => 1,
        }
    }
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file. Defaults to `hydrofreq.toml` when
    /// present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override distribution families (repeatable): normal, log-normal, gumbel.
    #[arg(short, long = "family")]
    pub families: Vec<String>,

    /// Override window groups (repeatable): 1-month, 3-month, 6-month,
    /// 10-month, 12-month, water-year, N-month-blocks.
    #[arg(short, long = "window")]
    pub windows: Vec<String>,

    /// Override return periods in years (repeatable).
    #[arg(short = 'T', long = "return-period")]
    pub return_periods: Vec<f64>,

    /// Override inverse-lookup thresholds (repeatable).
    #[arg(long = "threshold")]
    pub thresholds: Vec<f64>,

    /// Override within-year block widths in months (repeatable, 1-12).
    #[arg(long = "rolling-width")]
    pub rolling_widths: Vec<u8>,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `summary` subcommand.
#[derive(clap::Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
