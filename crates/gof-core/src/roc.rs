//! Receiver-operator curve construction.
//!
//! Every distinct fitted score is a candidate threshold. An observation is
//! predicted positive when `score >= threshold`, so a score sitting exactly on
//! the threshold counts as a predicted positive. The curve runs from the most
//! conservative rule to the most permissive one:
//!
//! - a boundary point at `+inf` where nothing is predicted positive (tpr = fpr = 0),
//! - one point per distinct score, in decreasing order,
//! - ending at the lowest score, where everything is predicted positive (tpr = fpr = 1).

use gof_common::{Error, Result};
use serde::Serialize;

use crate::observation::ObservationSet;

/// Confusion-matrix rates at one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    /// Decision threshold. `+inf` for the leading boundary point (serialized as `null`).
    pub threshold: f64,
    /// True positive rate (sensitivity).
    pub tpr: f64,
    /// False positive rate.
    pub fpr: f64,
    /// True negative rate (specificity), `1 - fpr`.
    pub tnr: f64,
    /// False negative rate, `1 - tpr`.
    pub fnr: f64,
    /// Positives at or above the threshold.
    pub true_positives: usize,
    /// Negatives at or above the threshold.
    pub false_positives: usize,
}

impl RocPoint {
    fn from_counts(threshold: f64, tp: usize, fp: usize, positives: usize, negatives: usize) -> Self {
        let tpr = tp as f64 / positives as f64;
        let fpr = fp as f64 / negatives as f64;
        Self {
            threshold,
            tpr,
            fpr,
            tnr: 1.0 - fpr,
            fnr: 1.0 - tpr,
            true_positives: tp,
            false_positives: fp,
        }
    }
}

/// ROC curve ordered by strictly decreasing threshold.
///
/// Always holds at least two points: the `+inf` boundary and the lowest score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocCurve {
    points: Vec<RocPoint>,
    positives: usize,
    negatives: usize,
}

impl RocCurve {
    pub fn points(&self) -> &[RocPoint] {
        &self.points
    }

    /// Number of actual positives (`P`).
    pub fn positives(&self) -> usize {
        self.positives
    }

    /// Number of actual negatives (`N`).
    pub fn negatives(&self) -> usize {
        self.negatives
    }
}

/// Sweep all distinct scores and compute rates at each.
///
/// Fails with `InsufficientClasses` unless both outcomes are present.
pub fn build_roc_curve(set: &ObservationSet) -> Result<RocCurve> {
    let positives = set.positives();
    let negatives = set.negatives();
    if positives == 0 || negatives == 0 {
        return Err(Error::InsufficientClasses {
            positives,
            negatives,
        });
    }

    let mut sorted: Vec<_> = set.observations().to_vec();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut points = Vec::with_capacity(sorted.len() + 1);
    points.push(RocPoint::from_counts(
        f64::INFINITY,
        0,
        0,
        positives,
        negatives,
    ));

    let (mut tp, mut fp) = (0usize, 0usize);
    let mut i = 0;
    while i < sorted.len() {
        // Absorb every observation tied at this score before emitting a point.
        let threshold = sorted[i].score;
        while i < sorted.len() && sorted[i].score == threshold {
            if sorted[i].label {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        points.push(RocPoint::from_counts(threshold, tp, fp, positives, negatives));
    }

    Ok(RocCurve {
        points,
        positives,
        negatives,
    })
}
