use approx::assert_relative_eq;
use hydrofreq_distribution::{
    DistributionFamily, FitConfig, standard_normal_quantile, fit,
};
use hydrofreq_return_period::{
    DEFAULT_SATURATION_EPS, ReturnPeriodError, quantile_for_return_period,
    return_period_for_value,
};

const JUNE: [f64; 10] = [10.0, 20.0, 15.0, 5.0, 25.0, 30.0, 12.0, 18.0, 22.0, 14.0];

#[test]
fn quantile_then_inverse_recovers_period() {
    for family in DistributionFamily::ALL {
        let d = fit(&JUNE, family, &FitConfig::new()).unwrap();
        for t in [1.05, 2.0, 5.0, 10.0, 50.0, 100.0, 120.0, 500.0] {
            let q = quantile_for_return_period(&d, t).unwrap();
            assert!(!q.clamped, "{family} T={t} clamped");
            let back = return_period_for_value(&d, q.value, DEFAULT_SATURATION_EPS).unwrap();
            assert_relative_eq!(back, t, max_relative = 1e-6);
        }
    }
}

#[test]
fn june_normal_fifty_year_quantile() {
    let d = fit(&JUNE, DistributionFamily::Normal, &FitConfig::new()).unwrap();
    let q = quantile_for_return_period(&d, 50.0).unwrap();
    let expected = 17.1 + 49.89f64.sqrt() * standard_normal_quantile(0.98);
    assert_relative_eq!(q.value, expected, epsilon = 1e-9);
    assert_relative_eq!(q.value, 31.606, epsilon = 1e-3);
    assert_relative_eq!(q.non_exceedance, 0.98);
}

#[test]
fn june_normal_threshold_250_saturates() {
    let d = fit(&JUNE, DistributionFamily::Normal, &FitConfig::new()).unwrap();
    let err = return_period_for_value(&d, 250.0, DEFAULT_SATURATION_EPS).unwrap_err();
    assert!(matches!(
        err,
        ReturnPeriodError::SaturatedProbability { value, .. } if value == 250.0
    ));
}

#[test]
fn longer_periods_give_larger_quantiles() {
    for family in DistributionFamily::ALL {
        let d = fit(&JUNE, family, &FitConfig::new()).unwrap();
        let q50 = quantile_for_return_period(&d, 50.0).unwrap().value;
        let q100 = quantile_for_return_period(&d, 100.0).unwrap().value;
        let q120 = quantile_for_return_period(&d, 120.0).unwrap().value;
        assert!(q50 < q100 && q100 < q120, "{family}: {q50} {q100} {q120}");
    }
}
