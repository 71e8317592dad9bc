//! True Skill Statistic optimization.

use serde::Serialize;

use super::{select_max, OptimalThreshold, ThresholdMetric};
use crate::roc::{RocCurve, RocPoint};

/// TSS at every threshold and the selected optimum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TssOptimum {
    /// TSS per threshold, in curve order.
    pub series: Vec<ThresholdMetric>,
    pub optimal: OptimalThreshold,
}

/// `tpr + tnr - 1`, evaluated from the confusion counts.
///
/// Equal to `(TP * N - FP * P) / (P * N)`. The integer numerator keeps equal
/// skill values bit-identical across thresholds so ties break exactly.
fn tss_at(point: &RocPoint, positives: usize, negatives: usize) -> f64 {
    let numerator = point.true_positives as i128 * negatives as i128
        - point.false_positives as i128 * positives as i128;
    numerator as f64 / (positives as f64 * negatives as f64)
}

/// Score every threshold by TSS and select the maximizing one.
pub fn optimize_tss(curve: &RocCurve) -> TssOptimum {
    let (p, n) = (curve.positives(), curve.negatives());
    let series: Vec<ThresholdMetric> = curve
        .points()
        .iter()
        .map(|point| ThresholdMetric {
            threshold: point.threshold,
            score: tss_at(point, p, n),
        })
        .collect();

    let best = select_max(&series);
    let optimal = OptimalThreshold::at(&curve.points()[best], series[best].score);
    TssOptimum { series, optimal }
}
