//! Area under the ROC curve.

use gof_math::trapezoid;

use crate::roc::RocCurve;

/// Trapezoidal area under the curve, integrating tpr over increasing fpr.
///
/// Curve order (decreasing threshold) already has non-decreasing fpr, so the
/// points are integrated as stored.
pub fn area_under_curve(curve: &RocCurve) -> f64 {
    let (fpr, tpr): (Vec<f64>, Vec<f64>) = curve.points().iter().map(|p| (p.fpr, p.tpr)).unzip();
    trapezoid(&fpr, &tpr)
}
