use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "hydrofreq.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HydrofreqConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Analysis settings.
    #[serde(default)]
    pub analysis: AnalysisToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Extra cell values read as missing, on top of the built-in markers.
    #[serde(default)]
    pub missing_markers: Vec<String>,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: default_output_dir(),
            delimiter: default_delimiter(),
            missing_markers: Vec::new(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}
fn default_delimiter() -> String {
    ",".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    #[serde(default = "default_return_periods")]
    pub return_periods: Vec<f64>,
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<f64>,
    #[serde(default = "default_families")]
    pub families: Vec<String>,
    #[serde(default = "default_windows")]
    pub windows: Vec<String>,
    /// Widths of within-year month blocks analysed in addition to `windows`.
    #[serde(default)]
    pub rolling_widths: Vec<u8>,
    #[serde(default = "default_positive_floor")]
    pub positive_floor: f64,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    #[serde(default = "default_spi_clamp")]
    pub spi_clamp: f64,
    #[serde(default = "default_saturation_eps")]
    pub saturation_eps: f64,
    #[serde(default = "default_spread_floor")]
    pub spread_floor: f64,
    #[serde(default = "default_gumbel_estimator")]
    pub gumbel_estimator: String,
    #[serde(default = "default_water_year_start")]
    pub water_year_start: String,
    #[serde(default = "default_true")]
    pub trim_partial_windows: bool,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            return_periods: default_return_periods(),
            thresholds: default_thresholds(),
            families: default_families(),
            windows: default_windows(),
            rolling_widths: Vec::new(),
            positive_floor: default_positive_floor(),
            histogram_bins: default_histogram_bins(),
            spi_clamp: default_spi_clamp(),
            saturation_eps: default_saturation_eps(),
            spread_floor: default_spread_floor(),
            gumbel_estimator: default_gumbel_estimator(),
            water_year_start: default_water_year_start(),
            trim_partial_windows: true,
        }
    }
}

fn default_return_periods() -> Vec<f64> {
    vec![50.0, 100.0, 120.0]
}
fn default_thresholds() -> Vec<f64> {
    vec![250.0]
}
fn default_families() -> Vec<String> {
    ["normal", "log-normal", "gumbel"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_windows() -> Vec<String> {
    ["1-month", "3-month", "6-month", "10-month", "12-month"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_positive_floor() -> f64 {
    0.01
}
fn default_histogram_bins() -> usize {
    10
}
fn default_spi_clamp() -> f64 {
    1e-6
}
fn default_saturation_eps() -> f64 {
    1e-9
}
fn default_spread_floor() -> f64 {
    1e-8
}
fn default_gumbel_estimator() -> String {
    "mle".to_string()
}
fn default_water_year_start() -> String {
    "October".to_string()
}
fn default_true() -> bool {
    true
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is read
/// if present and built-in defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<HydrofreqConfig> {
    let path = match path {
        Some(p) => p,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                debug!("no config file, using defaults");
                return Ok(HydrofreqConfig::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: HydrofreqConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: HydrofreqConfig = toml::from_str("").unwrap();
        assert_eq!(config.analysis.return_periods, vec![50.0, 100.0, 120.0]);
        assert_eq!(config.analysis.thresholds, vec![250.0]);
        assert_eq!(config.analysis.families.len(), 3);
        assert_eq!(config.analysis.windows.len(), 5);
        assert_eq!(config.io.output_dir, PathBuf::from("results"));
        assert!(config.io.input.is_none());
    }

    #[test]
    fn partial_sections() {
        let config: HydrofreqConfig = toml::from_str(
            r#"
            [io]
            input = "data/precip.csv"

            [analysis]
            families = ["gumbel"]
            return_periods = [10, 25]
            "#,
        )
        .unwrap();
        assert_eq!(config.io.input, Some(PathBuf::from("data/precip.csv")));
        assert_eq!(config.analysis.families, vec!["gumbel".to_string()]);
        assert_eq!(config.analysis.return_periods, vec![10.0, 25.0]);
        assert_eq!(config.analysis.spi_clamp, 1e-6);
        assert!(config.analysis.rolling_widths.is_empty());
        assert_eq!(config.analysis.histogram_bins, 10);
    }

    #[test]
    fn rolling_widths_from_toml() {
        let config: HydrofreqConfig =
            toml::from_str("[analysis]\nrolling_widths = [1, 3, 6, 12]\nhistogram_bins = 15\n")
                .unwrap();
        assert_eq!(config.analysis.rolling_widths, vec![1, 3, 6, 12]);
        assert_eq!(config.analysis.histogram_bins, 15);
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<HydrofreqConfig, _> = toml::from_str("[analysis]\nseed = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load(Some(Path::new("/tmp/hydrofreq_no_such_config.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hydrofreq.toml");
        std::fs::write(&path, "[analysis]\nthresholds = [100.0, 300.0]\n").unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.analysis.thresholds, vec![100.0, 300.0]);
    }
}
