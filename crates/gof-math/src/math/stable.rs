//! Numerically guarded helpers for confusion-matrix rates.
//!
//! The extremal dependence indices take logarithms of all four confusion
//! rates. At the ends of a threshold sweep one or more of those rates is
//! exactly zero, so every rate goes through [`clamp_zero_rate`] before the
//! logarithm is taken.

/// Substitute used for a rate that is exactly zero.
pub const DEFAULT_RATE_EPSILON: f64 = 1e-9;

/// Replace an exact-zero rate by `epsilon`.
///
/// Returns the (possibly substituted) value and whether substitution happened.
/// Only an exact `0.0` is replaced; small positive rates pass through unchanged.
pub fn clamp_zero_rate(rate: f64, epsilon: f64) -> (f64, bool) {
    if rate == 0.0 {
        (epsilon, true)
    } else {
        (rate, false)
    }
}

/// Symmetric Extremal Dependence Index from already-clamped rates.
///
/// `(ln F - ln H - ln(1-F) + ln(1-H)) / (ln F + ln H + ln(1-F) + ln(1-H))`
/// with `H = tpr`, `F = fpr`, `1-F = tnr`, `1-H = fnr`. All four rates must be
/// strictly positive; pass them through [`clamp_zero_rate`] first.
pub fn sedi_from_rates(tpr: f64, fpr: f64, tnr: f64, fnr: f64) -> f64 {
    // Errors pair with errors and hits with correct rejections, so a point and
    // its class-swapped mirror sum the same terms and give bit-identical values.
    let errors = fpr.ln() + fnr.ln();
    let correct = tpr.ln() + tnr.ln();
    let denom = errors + correct;
    if denom == 0.0 {
        // Every rate is exactly one, which cannot happen for complementary pairs.
        return f64::NAN;
    }
    (errors - correct) / denom
}

/// Trapezoidal integral of `y` over `x`.
///
/// Points must already be ordered by non-decreasing `x`. Extra entries in the
/// longer slice are ignored.
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum()
}
