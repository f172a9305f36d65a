//! Analysis configuration.

use hydrofreq_aggregate::{AggregationWindow, WindowGroup};
use hydrofreq_calendar::Month;
use hydrofreq_distribution::{DistributionFamily, FitConfig};
use hydrofreq_return_period::DEFAULT_SATURATION_EPS;
use hydrofreq_spi::SpiConfig;

use crate::error::AnalysisError;

/// Configuration for [`run_analysis`](crate::run_analysis).
///
/// # Defaults
///
/// | Field | Default |
/// |-------|---------|
/// | `return_periods` | `[50, 100, 120]` |
/// | `thresholds` | `[250.0]` |
/// | `families` | Normal, Log-Normal, Gumbel |
/// | `window_groups` | 1-, 3-, 6-, 10- and 12-month |
/// | `rolling_widths` | none |
/// | `water_year_start` | October |
/// | `positive_floor` | `0.01` |
/// | `histogram_bins` | `10` |
/// | `saturation_eps` | `1e-9` |
/// | `trim_partial_windows` | `true` |
/// | `fit` | [`FitConfig::new`] |
/// | `spi` | [`SpiConfig::new`] |
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    return_periods: Vec<f64>,
    thresholds: Vec<f64>,
    families: Vec<DistributionFamily>,
    window_groups: Vec<WindowGroup>,
    rolling_widths: Vec<u8>,
    water_year_start: Month,
    positive_floor: f64,
    histogram_bins: usize,
    saturation_eps: f64,
    trim_partial_windows: bool,
    fit: FitConfig,
    spi: SpiConfig,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self {
            return_periods: vec![50.0, 100.0, 120.0],
            thresholds: vec![250.0],
            families: DistributionFamily::ALL.to_vec(),
            window_groups: WindowGroup::CALENDAR.to_vec(),
            rolling_widths: Vec::new(),
            water_year_start: Month::Oct,
            positive_floor: 0.01,
            histogram_bins: 10,
            saturation_eps: DEFAULT_SATURATION_EPS,
            trim_partial_windows: true,
            fit: FitConfig::new(),
            spi: SpiConfig::new(),
        }
    }

    pub fn with_return_periods(mut self, periods: Vec<f64>) -> Self {
        self.return_periods = periods;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Vec<f64>) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_families(mut self, families: Vec<DistributionFamily>) -> Self {
        self.families = families;
        self
    }

    pub fn with_window_groups(mut self, groups: Vec<WindowGroup>) -> Self {
        self.window_groups = groups;
        self
    }

    /// Widths of within-year month blocks analysed after the window groups,
    /// each as a [`WindowGroup::Blocks`] group.
    pub fn with_rolling_widths(mut self, widths: Vec<u8>) -> Self {
        self.rolling_widths = widths;
        self
    }

    /// First month of the [`WindowGroup::WaterYear`] window.
    pub fn with_water_year_start(mut self, month: Month) -> Self {
        self.water_year_start = month;
        self
    }

    /// Value substituted for non-positive months in Log-Normal and SPI
    /// samples.
    pub fn with_positive_floor(mut self, floor: f64) -> Self {
        self.positive_floor = floor;
        self
    }

    /// Number of equal-width bins in each frequency table.
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    pub fn with_saturation_eps(mut self, eps: f64) -> Self {
        self.saturation_eps = eps;
        self
    }

    pub fn with_trim_partial_windows(mut self, trim: bool) -> Self {
        self.trim_partial_windows = trim;
        self
    }

    pub fn with_fit(mut self, fit: FitConfig) -> Self {
        self.fit = fit;
        self
    }

    pub fn with_spi(mut self, spi: SpiConfig) -> Self {
        self.spi = spi;
        self
    }

    pub fn return_periods(&self) -> &[f64] {
        &self.return_periods
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn families(&self) -> &[DistributionFamily] {
        &self.families
    }

    pub fn window_groups(&self) -> &[WindowGroup] {
        &self.window_groups
    }

    pub fn rolling_widths(&self) -> &[u8] {
        &self.rolling_widths
    }

    pub fn water_year_start(&self) -> Month {
        self.water_year_start
    }

    pub fn positive_floor(&self) -> f64 {
        self.positive_floor
    }

    pub fn histogram_bins(&self) -> usize {
        self.histogram_bins
    }

    pub fn saturation_eps(&self) -> f64 {
        self.saturation_eps
    }

    pub fn trim_partial_windows(&self) -> bool {
        self.trim_partial_windows
    }

    pub fn fit(&self) -> &FitConfig {
        &self.fit
    }

    pub fn spi(&self) -> &SpiConfig {
        &self.spi
    }

    /// Every window of the configured groups in group order, then the
    /// block windows of each rolling width.
    pub fn windows(&self) -> Vec<(WindowGroup, AggregationWindow)> {
        self.groups()
            .into_iter()
            .flat_map(|g| {
                g.windows(self.water_year_start)
                    .into_iter()
                    .map(move |w| (g, w))
            })
            .collect()
    }

    fn groups(&self) -> Vec<WindowGroup> {
        self.window_groups
            .iter()
            .copied()
            .chain(self.rolling_widths.iter().map(|&w| WindowGroup::Blocks(w)))
            .collect()
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] if:
    /// - a return period is not finite and > 1
    /// - a threshold is not finite
    /// - `families` is empty or repeats an entry
    /// - no window is configured, or a window group or rolling width repeats
    /// - a rolling width is outside `1..=12`
    /// - `positive_floor` is not finite and > 0
    /// - `histogram_bins` is zero
    /// - `saturation_eps` is not in (0, 1)
    /// - the nested fit or SPI configuration is invalid
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let invalid = |reason: String| Err(AnalysisError::InvalidConfig { reason });

        if let Some(t) = self
            .return_periods
            .iter()
            .find(|t| !t.is_finite() || **t <= 1.0)
        {
            return invalid(format!("return period {t} must be finite and > 1"));
        }
        if let Some(v) = self.thresholds.iter().find(|v| !v.is_finite()) {
            return invalid(format!("threshold {v} must be finite"));
        }
        if self.families.is_empty() {
            return invalid("at least one distribution family is required".to_string());
        }
        if has_duplicates(&self.families) {
            return invalid("distribution families must not repeat".to_string());
        }
        if self.window_groups.is_empty() && self.rolling_widths.is_empty() {
            return invalid("at least one window group or rolling width is required".to_string());
        }
        let groups = self.groups();
        if let Some(w) = groups.iter().find_map(|g| match g {
            WindowGroup::Blocks(w) if !(1..=12).contains(w) => Some(w),
            _ => None,
        }) {
            return invalid(format!("rolling width {w} must be in 1..=12 months"));
        }
        if has_duplicates(&groups) {
            return invalid("window groups and rolling widths must not repeat".to_string());
        }
        if !self.positive_floor.is_finite() || self.positive_floor <= 0.0 {
            return invalid(format!(
                "positive_floor must be finite and > 0, got {}",
                self.positive_floor
            ));
        }
        if self.histogram_bins == 0 {
            return invalid("histogram_bins must be at least 1".to_string());
        }
        if !(self.saturation_eps > 0.0 && self.saturation_eps < 1.0) {
            return invalid(format!(
                "saturation_eps must be in (0, 1), got {}",
                self.saturation_eps
            ));
        }
        self.fit.validate().map_err(|e| AnalysisError::InvalidConfig {
            reason: e.to_string(),
        })?;
        self.spi.validate().map_err(|e| AnalysisError::InvalidConfig {
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, a)| items[i + 1..].contains(a))
}
