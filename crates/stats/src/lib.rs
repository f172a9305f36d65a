//! Descriptive statistics shared by the fitting and reporting crates.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Population variance with N denominator (the maximum-likelihood estimate
/// under a Normal model). Returns 0.0 if empty.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

/// Population standard deviation with N denominator. Returns 0.0 if empty.
pub fn population_sd(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

/// Median of pre-sorted data. For even length, averages the middle two values.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "median: input must not be empty");
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Returns a sorted copy of `data`. NaN values compare as equal.
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut out = data.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    out
}

/// Weibull plotting positions `m / (n + 1)` for ranks `m = 1..=n`.
pub fn plotting_positions(n: usize) -> Vec<f64> {
    let denom = (n + 1) as f64;
    (1..=n).map(|m| m as f64 / denom).collect()
}

/// Returns `true` when every value lies within `tol` of the first one.
/// An empty slice is considered constant.
pub fn is_constant(data: &[f64], tol: f64) -> bool {
    match data.first() {
        Some(&first) => data.iter().all(|&x| (x - first).abs() <= tol),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_variance_two() {
        // [3.0, 7.0]: mean=5, sum_sq=8, var=8/1=8
        assert_relative_eq!(variance(&[3.0, 7.0]), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_variance_empty() {
        assert_eq!(variance(&[]), 0.0);
    }

    #[test]
    fn test_population_sd() {
        // Classic textbook set: population sd is exactly 2.
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_sd(&data), 2.0, epsilon = 1e-12);
        assert_relative_eq!(population_variance(&data), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_population_variance_empty() {
        assert_eq!(population_variance(&[]), 0.0);
    }

    #[test]
    fn test_population_below_sample() {
        let data = [10.0, 20.0, 15.0, 5.0, 25.0, 30.0, 12.0, 18.0, 22.0, 14.0];
        assert_relative_eq!(population_variance(&data), 49.89, epsilon = 1e-10);
        assert_relative_eq!(variance(&data), 498.9 / 9.0, epsilon = 1e-10);
        assert!(population_sd(&data) < sd(&data));
    }

    #[test]
    fn test_median_odd() {
        assert_relative_eq!(median(&[1.0, 2.0, 3.0]), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_median_even() {
        assert_relative_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5, epsilon = 1e-6);
    }

    #[test]
    #[should_panic(expected = "median: input must not be empty")]
    fn test_median_empty_panics() {
        median(&[]);
    }

    #[test]
    fn test_sorted() {
        assert_eq!(sorted(&[3.0, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_plotting_positions() {
        let p = plotting_positions(4);
        assert_eq!(p.len(), 4);
        assert_relative_eq!(p[0], 0.2, epsilon = 1e-12);
        assert_relative_eq!(p[3], 0.8, epsilon = 1e-12);
        assert!(plotting_positions(0).is_empty());
    }

    #[test]
    fn test_is_constant() {
        assert!(is_constant(&[5.0, 5.0, 5.0], 0.0));
        assert!(is_constant(&[], 0.0));
        assert!(!is_constant(&[5.0, 5.0, 5.1], 1e-12));
        assert!(is_constant(&[5.0, 5.0 + 1e-15], 1e-12));
    }
}
