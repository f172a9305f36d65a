//! Equal-width frequency table of a sample with the fitted density overlaid.

use hydrofreq_distribution::FittedDistribution;
use serde::Serialize;

/// One bin of a frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// 1-based bin number, lowest values first.
    pub bin: usize,
    pub lower: f64,
    pub upper: f64,
    pub centre: f64,
    /// Sample values in the bin.
    pub count: usize,
    /// `count / n`.
    pub relative_frequency: f64,
    /// Share of the sample at or below `upper`; the last bin is exactly 1.
    pub cumulative_frequency: f64,
    /// `relative_frequency / width`, comparable with `fitted_density`.
    pub empirical_density: f64,
    /// Fitted PDF at `centre`.
    pub fitted_density: f64,
}

/// Splits the range `[min, max]` of `sample` into `bins` bins of equal
/// width and counts the values in each. Bins are half-open except the last,
/// which also holds the maximum.
///
/// Returns an empty table if `sample` is empty, `bins` is zero, or every
/// value is the same.
pub fn frequency_histogram(
    dist: &FittedDistribution,
    sample: &[f64],
    bins: usize,
) -> Vec<HistogramBin> {
    if sample.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bins as f64;
    if !(width > 0.0 && width.is_finite()) {
        return Vec::new();
    }

    let mut counts = vec![0usize; bins];
    for &x in sample {
        let i = ((x - min) / width).floor();
        // `max` lands on index `bins`; rounding can push values near an edge
        // either way, so clamp.
        let i = if i.is_finite() && i > 0.0 { (i as usize).min(bins - 1) } else { 0 };
        counts[i] += 1;
    }

    let n = sample.len() as f64;
    let mut below = 0usize;
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            below += count;
            let lower = min + i as f64 * width;
            let upper = if i + 1 == bins { max } else { min + (i + 1) as f64 * width };
            let centre = 0.5 * (lower + upper);
            let relative_frequency = count as f64 / n;
            HistogramBin {
                bin: i + 1,
                lower,
                upper,
                centre,
                count,
                relative_frequency,
                cumulative_frequency: below as f64 / n,
                empirical_density: relative_frequency / width,
                fitted_density: dist.pdf(centre),
            }
        })
        .collect()
}
