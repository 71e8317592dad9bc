//! Probit link helpers.
//!
//! Fitted probit models hand back one linear predictor per posterior draw and
//! observation. The probability for an observation is the average of the
//! per-draw probabilities `Phi(eta)`, which is not the same as `Phi` of the
//! averaged predictor when the draws disagree.

use statrs::function::erf::erfc;

/// Standard normal cumulative distribution function, `0.5 * erfc(-x / sqrt(2))`.
///
/// Accurate to roughly `1e-10` absolute, which is the precision of the
/// underlying `erfc`.
pub fn standard_normal_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Average per-draw probit probabilities column-wise.
///
/// `draws` is row-major with one row per draw and one column per observation.
/// Rows are assumed to share a length; callers validate the shape. Returns an
/// empty vector when there are no draws.
pub fn mean_probit_probabilities(draws: &[Vec<f64>]) -> Vec<f64> {
    let Some(first) = draws.first() else {
        return Vec::new();
    };
    let mut sums = vec![0.0; first.len()];
    for row in draws {
        for (sum, &eta) in sums.iter_mut().zip(row) {
            *sum += standard_normal_cdf(eta);
        }
    }
    let n = draws.len() as f64;
    sums.into_iter().map(|s| s / n).collect()
}
