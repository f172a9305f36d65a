//! Empirical versus fitted probability curves.

use hydrofreq_distribution::FittedDistribution;
use hydrofreq_stats::{plotting_positions, sorted};
use serde::Serialize;

/// One point of a probability curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// 1-based rank in ascending order.
    pub rank: usize,
    /// Observed value at this rank.
    pub observed: f64,
    /// Weibull plotting position `m / (n + 1)`.
    pub plotting_position: f64,
    /// Empirical return period `1 / (1 − p)`.
    pub empirical_return_period: f64,
    /// Fitted quantile at the plotting position, clamped at zero.
    pub fitted: f64,
    /// Fitted PDF at the observed value.
    pub fitted_density: f64,
}

/// Probability curve of `sample` against `dist`, in ascending order of the
/// observed values. An empty sample yields an empty curve.
pub fn probability_curve(dist: &FittedDistribution, sample: &[f64]) -> Vec<CurvePoint> {
    let observed = sorted(sample);
    let positions = plotting_positions(observed.len());
    observed
        .into_iter()
        .zip(positions)
        .enumerate()
        .map(|(i, (x, p))| CurvePoint {
            rank: i + 1,
            observed: x,
            plotting_position: p,
            empirical_return_period: 1.0 / (1.0 - p),
            fitted: dist.inverse_cdf(p).max(0.0),
            fitted_density: dist.pdf(x),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn four_point_curve() {
        let d = FittedDistribution::normal(10.0, 2.0).unwrap();
        let curve = probability_curve(&d, &[12.0, 8.0, 10.0, 11.0]);
        let observed: Vec<f64> = curve.iter().map(|c| c.observed).collect();
        assert_eq!(observed, vec![8.0, 10.0, 11.0, 12.0]);
        assert_relative_eq!(curve[0].plotting_position, 0.2);
        assert_relative_eq!(curve[3].plotting_position, 0.8);
        assert_relative_eq!(curve[3].empirical_return_period, 5.0, epsilon = 1e-12);
        assert_relative_eq!(curve[1].empirical_return_period, 1.0 / 0.6, epsilon = 1e-12);
        // The middle positions straddle the median.
        assert!(curve[1].fitted < 10.0 && curve[2].fitted > 10.0);
        assert_eq!(curve.iter().map(|c| c.rank).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_relative_eq!(curve[1].fitted_density, d.pdf(10.0));
        assert!(curve[1].fitted_density > curve[0].fitted_density);
    }

    #[test]
    fn fitted_values_clamped() {
        let d = FittedDistribution::normal(0.0, 5.0).unwrap();
        let curve = probability_curve(&d, &[1.0, 2.0, 3.0]);
        assert_eq!(curve[0].fitted, 0.0);
        assert!(curve.iter().all(|c| c.fitted >= 0.0));
    }

    #[test]
    fn empty_sample() {
        let d = FittedDistribution::normal(0.0, 1.0).unwrap();
        assert!(probability_curve(&d, &[]).is_empty());
    }
}
