//! Standard normal CDF and quantile, erf-based.

use statrs::function::erf::{erfc, erfc_inv};

/// Standard normal CDF, Φ(z) = ½·erfc(−z/√2).
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / std::f64::consts::SQRT_2)
}

/// Standard normal quantile, Φ⁻¹(p) = −√2·erfc⁻¹(2p).
///
/// Returns `-inf` for `p <= 0` and `+inf` for `p >= 1`.
pub fn standard_normal_quantile(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    -std::f64::consts::SQRT_2 * erfc_inv(2.0 * p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Reference values are exact to 15 digits; statrs' erfc is good to
    // about 1e-11 here.
    #[test]
    fn cdf_reference_values() {
        assert_relative_eq!(standard_normal_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(standard_normal_cdf(1.0), 0.841_344_746_068_543, epsilon = 1e-10);
        assert_relative_eq!(standard_normal_cdf(-1.96), 0.024_997_895_148_220, epsilon = 1e-10);
    }

    #[test]
    fn cdf_tails_stay_ordered() {
        let zs = [-8.0, -6.0, -4.0, -2.0, 0.0, 2.0, 4.0, 6.0, 8.0];
        for w in zs.windows(2) {
            assert!(standard_normal_cdf(w[0]) <= standard_normal_cdf(w[1]));
        }
        assert!(standard_normal_cdf(-8.0) > 0.0);
        assert!(standard_normal_cdf(8.0) <= 1.0);
    }

    #[test]
    fn quantile_reference_values() {
        assert_relative_eq!(standard_normal_quantile(0.5), 0.0, epsilon = 1e-15);
        assert_relative_eq!(standard_normal_quantile(0.98), 2.053_748_910_631_823, epsilon = 1e-9);
        assert_relative_eq!(standard_normal_quantile(0.975), 1.959_963_984_540_054, epsilon = 1e-9);
    }

    #[test]
    fn quantile_bounds() {
        assert_eq!(standard_normal_quantile(0.0), f64::NEG_INFINITY);
        assert_eq!(standard_normal_quantile(1.0), f64::INFINITY);
    }

    #[test]
    fn quantile_inverts_cdf() {
        for &z in &[-4.0, -2.5, -1.0, -0.1, 0.0, 0.3, 1.5, 3.0, 4.5] {
            assert_relative_eq!(
                standard_normal_quantile(standard_normal_cdf(z)),
                z,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn quantile_is_antisymmetric() {
        for &p in &[1e-6, 0.01, 0.2, 0.4] {
            assert_relative_eq!(
                standard_normal_quantile(p),
                -standard_normal_quantile(1.0 - p),
                epsilon = 1e-9
            );
        }
    }
}
