//! Threshold selection by skill score.
//!
//! Both optimizers score every ROC point, then keep the threshold with the
//! highest score. When several thresholds tie at the maximum, the smallest
//! threshold wins (the most inclusive rule among the best ones).

pub mod sedi;
pub mod tss;

use serde::Serialize;

use crate::roc::RocPoint;

/// A skill score evaluated at one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdMetric {
    pub threshold: f64,
    pub score: f64,
}

/// The selected operating threshold for one skill score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimalThreshold {
    pub threshold: f64,
    /// Skill score attained at `threshold`.
    pub metric_value: f64,
    /// False positive rate at `threshold`.
    pub type_i_error_rate: f64,
    /// False negative rate at `threshold`.
    pub type_ii_error_rate: f64,
}

impl OptimalThreshold {
    fn at(point: &RocPoint, metric_value: f64) -> Self {
        Self {
            threshold: point.threshold,
            metric_value,
            type_i_error_rate: 1.0 - point.tnr,
            type_ii_error_rate: 1.0 - point.tpr,
        }
    }
}

/// Index of the maximizing entry, smallest threshold on ties.
///
/// NaN scores never win; a series of only NaN scores yields index 0. The
/// series must not be empty, which every `RocCurve` guarantees.
pub(crate) fn select_max(series: &[ThresholdMetric]) -> usize {
    select_max_within(series, 0.0)
}

/// Like [`select_max`], but scores within `rel_tol` of the maximum (relative
/// to its magnitude) count as tied with it.
pub(crate) fn select_max_within(series: &[ThresholdMetric], rel_tol: f64) -> usize {
    let max = series
        .iter()
        .map(|m| m.score)
        .filter(|s| !s.is_nan())
        .fold(f64::NEG_INFINITY, f64::max);
    let slack = if max.is_finite() {
        rel_tol * max.abs()
    } else {
        0.0
    };
    series
        .iter()
        .enumerate()
        .filter(|(_, m)| m.score == max || max - m.score <= slack)
        .min_by(|(_, a), (_, b)| a.threshold.total_cmp(&b.threshold))
        .map_or(0, |(idx, _)| idx)
}
