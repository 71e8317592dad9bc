//! Symmetric Extremal Dependence Index optimization.
//!
//! SEDI takes the logarithm of all four confusion rates, and at least the two
//! ends of every curve have a zero rate. Each rate passes through
//! [`clamp_zero_rate`] before the logarithm, and every substitution is
//! recorded as a [`DegenerateRateWarning`].

use gof_math::{clamp_zero_rate, sedi_from_rates};
use serde::Serialize;
use tracing::{debug, warn};

use super::{select_max_within, OptimalThreshold, ThresholdMetric};
use crate::roc::{RocCurve, RocPoint};

/// Relative gap under which two SEDI values count as the same maximum.
///
/// Distinct rate pairs can produce mathematically equal SEDI values whose
/// floating-point evaluations differ in the last bits.
pub const SEDI_TIE_TOLERANCE: f64 = 1e-12;

/// Which confusion rate was substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateKind {
    Tpr,
    Fpr,
    Tnr,
    Fnr,
}

/// Non-fatal notice that zero rates were replaced by epsilon at a threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegenerateRateWarning {
    pub threshold: f64,
    pub substituted: Vec<RateKind>,
    pub epsilon: f64,
}

/// SEDI at every threshold, the selected optimum, and substitution notices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SediOptimum {
    pub series: Vec<ThresholdMetric>,
    pub optimal: OptimalThreshold,
    pub warnings: Vec<DegenerateRateWarning>,
}

fn sedi_at(point: &RocPoint, epsilon: f64) -> (f64, Vec<RateKind>) {
    let mut substituted = Vec::new();
    let mut clamp = |rate: f64, kind: RateKind| {
        let (value, hit) = clamp_zero_rate(rate, epsilon);
        if hit {
            substituted.push(kind);
        }
        value
    };
    let tpr = clamp(point.tpr, RateKind::Tpr);
    let fpr = clamp(point.fpr, RateKind::Fpr);
    let tnr = clamp(point.tnr, RateKind::Tnr);
    let fnr = clamp(point.fnr, RateKind::Fnr);
    (sedi_from_rates(tpr, fpr, tnr, fnr), substituted)
}

/// Score every threshold by SEDI and select the maximizing one.
///
/// `epsilon` replaces rates that are exactly zero.
pub fn optimize_sedi(curve: &RocCurve, epsilon: f64) -> SediOptimum {
    let mut series = Vec::with_capacity(curve.points().len());
    let mut warnings = Vec::new();

    for point in curve.points() {
        let (score, substituted) = sedi_at(point, epsilon);
        if !substituted.is_empty() {
            debug!(
                threshold = point.threshold,
                rates = ?substituted,
                epsilon,
                "zero rate substituted before SEDI logarithm"
            );
            warnings.push(DegenerateRateWarning {
                threshold: point.threshold,
                substituted,
                epsilon,
            });
        }
        series.push(ThresholdMetric {
            threshold: point.threshold,
            score,
        });
    }

    let best = select_max_within(&series, SEDI_TIE_TOLERANCE);
    let optimal = OptimalThreshold::at(&curve.points()[best], series[best].score);
    if let Some(w) = warnings.iter().find(|w| w.threshold == optimal.threshold) {
        warn!(
            threshold = optimal.threshold,
            sedi = optimal.metric_value,
            rates = ?w.substituted,
            epsilon,
            "SEDI optimum depends on epsilon-substituted rates"
        );
    }

    SediOptimum {
        series,
        optimal,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::ObservationSet;
    use crate::roc::build_roc_curve;
    use gof_math::DEFAULT_RATE_EPSILON;

    fn optimum(scores: &[f64], labels: &[bool]) -> SediOptimum {
        let set = ObservationSet::new(scores, labels).unwrap();
        optimize_sedi(&build_roc_curve(&set).unwrap(), DEFAULT_RATE_EPSILON)
    }

    #[test]
    fn curve_ends_are_flagged() {
        let result = optimum(&[0.9, 0.6, 0.4, 0.2], &[true, false, true, false]);
        let first = &result.warnings[0];
        assert_eq!(first.threshold, f64::INFINITY);
        assert_eq!(first.substituted, vec![RateKind::Tpr, RateKind::Fpr]);
        let last = result.warnings.last().unwrap();
        assert_eq!(last.threshold, 0.2);
        assert_eq!(last.substituted, vec![RateKind::Tnr, RateKind::Fnr]);
    }

    #[test]
    fn corners_score_zero() {
        let result = optimum(&[0.9, 0.6, 0.4, 0.2], &[true, false, true, false]);
        assert!(result.series.first().unwrap().score.abs() < 1e-12);
        assert!(result.series.last().unwrap().score.abs() < 1e-12);
    }

    #[test]
    fn interior_points_without_zero_rates_are_not_flagged() {
        // At 0.6: tpr = 1/2, fpr = 1/2, no zero rate.
        let result = optimum(&[0.9, 0.6, 0.4, 0.2], &[true, false, true, false]);
        assert!(result.warnings.iter().all(|w| w.threshold != 0.6));
        assert!(result.warnings.iter().any(|w| w.threshold == 0.9));
    }

    #[test]
    fn selects_maximum_sedi() {
        let result = optimum(
            &[0.9, 0.8, 0.3, 0.7, 0.2, 0.1],
            &[true, true, true, false, false, false],
        );
        let max = result
            .series
            .iter()
            .map(|m| m.score)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(max - result.optimal.metric_value <= SEDI_TIE_TOLERANCE);
        // 0.8 at (2/3, 0) and 0.3 at (1, 1/3) mirror each other; the lower threshold wins.
        assert_eq!(result.optimal.threshold, 0.3);
        assert!(result.optimal.metric_value > 0.0);
        assert!(result.optimal.metric_value <= 1.0);
    }

    #[test]
    fn mirrored_optima_resolve_to_smallest_threshold() {
        // (tpr, fpr) = (0.5, 0) at 0.7 and (1, 0.5) at 0.3 are class-swap mirrors.
        let result = optimum(
            &[0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1],
            &[true, true, false, true, false, true, false, false],
        );
        let at = |t: f64| result.series.iter().find(|m| m.threshold == t).unwrap().score;
        assert_eq!(at(0.7), at(0.3));
        assert_eq!(result.optimal.threshold, 0.3);
        assert_eq!(result.optimal.type_i_error_rate, 0.5);
        assert_eq!(result.optimal.type_ii_error_rate, 0.0);
    }

    #[test]
    fn sedi_scores_are_finite() {
        let result = optimum(&[0.5, 0.5, 0.5], &[true, false, false]);
        assert!(result.series.iter().all(|m| m.score.is_finite()));
    }

    #[test]
    fn epsilon_changes_boundary_values_only() {
        let set = ObservationSet::new(&[0.9, 0.6, 0.4, 0.2], &[true, false, true, false]).unwrap();
        let curve = build_roc_curve(&set).unwrap();
        let a = optimize_sedi(&curve, 1e-9);
        let b = optimize_sedi(&curve, 1e-6);
        // Threshold 0.6 has no zero rates, so epsilon is irrelevant there.
        assert_eq!(a.series[2].score, b.series[2].score);
        assert_eq!(a.warnings[0].epsilon, 1e-9);
        assert_eq!(b.warnings[0].epsilon, 1e-6);
    }
}
