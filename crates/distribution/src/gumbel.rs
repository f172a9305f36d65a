//! Gumbel (maxima) estimators.

use hydrofreq_stats::{mean, sd};

use crate::EULER_MASCHERONI;

const MAX_ITER: usize = 200;
const REL_TOL: f64 = 1e-12;

/// Method-of-moments estimate `(location, scale)`.
///
/// scale = s·√6/π with `s` the sample (N-1) standard deviation,
/// location = mean − γ·scale.
pub(crate) fn fit_moments(values: &[f64]) -> (f64, f64) {
    let scale = sd(values) * 6.0f64.sqrt() / std::f64::consts::PI;
    let location = mean(values) - EULER_MASCHERONI * scale;
    (location, scale)
}

/// Maximum-likelihood estimate `(location, scale)`.
///
/// Solves the profile equation for the scale
///
/// ```text
/// f(β) = β − x̄ + Σ xᵢ wᵢ / Σ wᵢ = 0,   wᵢ = exp(−(xᵢ − c)/β)
/// ```
///
/// by Newton iteration, where `c = min(x)` keeps the weights in (0, 1].
/// `f′(β) = 1 + Var_w(x)/β²` is at least one, so the root is unique.
/// The location follows as `c − β·ln(mean(w))`.
///
/// Returns `None` if the iteration does not converge to a finite, positive
/// scale. `initial_scale` must be positive.
pub(crate) fn fit_mle(values: &[f64], initial_scale: f64) -> Option<(f64, f64)> {
    let n = values.len() as f64;
    let x_bar = mean(values);
    let c = values.iter().copied().fold(f64::INFINITY, f64::min);

    let mut beta = initial_scale;
    let mut converged = false;
    for _ in 0..MAX_ITER {
        let (sw, swx, swx2) = weighted_sums(values, c, beta);
        let r = swx / sw;
        let var_w = (swx2 / sw - r * r).max(0.0);
        let f = beta - x_bar + r;
        let fp = 1.0 + var_w / (beta * beta);

        let mut next = beta - f / fp;
        if !next.is_finite() {
            return None;
        }
        if next <= 0.0 {
            next = beta / 2.0;
        }
        let done = (next - beta).abs() <= REL_TOL * beta;
        beta = next;
        if done {
            converged = true;
            break;
        }
    }

    if !converged || !beta.is_finite() || beta <= 0.0 {
        return None;
    }

    let (sw, _, _) = weighted_sums(values, c, beta);
    let location = c - beta * (sw / n).ln();
    location.is_finite().then_some((location, beta))
}

/// Σw, Σwx, Σwx² with `w = exp(−(x − c)/β)`.
fn weighted_sums(values: &[f64], c: f64, beta: f64) -> (f64, f64, f64) {
    values.iter().fold((0.0, 0.0, 0.0), |(sw, swx, swx2), &x| {
        let w = (-(x - c) / beta).exp();
        (sw + w, swx + w * x, swx2 + w * x * x)
    })
}
