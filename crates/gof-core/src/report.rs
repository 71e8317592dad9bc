//! Summary report assembly.
//!
//! The assembler derives nothing numerically beyond binning fitted scores and
//! classifying each observation against the TSS-selected threshold. Everything
//! else is passed through from the curve and the optimizers.

use gof_common::SCHEMA_VERSION;
use serde::Serialize;

use crate::observation::ObservationSet;
use crate::optimize::sedi::{DegenerateRateWarning, SediOptimum};
use crate::optimize::tss::TssOptimum;
use crate::optimize::{OptimalThreshold, ThresholdMetric};
use crate::roc::RocCurve;

/// Goodness-of-fit summary for one set of fitted scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub schema_version: String,
    pub n_observations: usize,
    pub n_positive: usize,
    pub n_negative: usize,
    /// Area under the ROC curve.
    pub auc: f64,
    /// Threshold maximizing the True Skill Statistic.
    pub tss: OptimalThreshold,
    /// Threshold maximizing the Symmetric Extremal Dependence Index.
    pub sedi: OptimalThreshold,
    /// Thresholds where zero rates were replaced before computing SEDI.
    pub degenerate_rates: Vec<DegenerateRateWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Diagnostics>,
}

/// Datasets for plotting collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    /// Full ROC curve; `(fpr, tpr)` per point is the plotted curve.
    pub roc_curve: RocCurve,
    pub score_histogram: Vec<HistogramBin>,
    pub tss_series: TssSeries,
    /// Each observation classified against the TSS-selected threshold.
    pub classifications: Vec<ClassifiedObservation>,
}

/// Equal-width bin of fitted scores over [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// TSS against threshold, with the selected threshold marked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TssSeries {
    pub points: Vec<ThresholdMetric>,
    pub selected_threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassifiedObservation {
    pub fitted: f64,
    /// `fitted >= threshold`.
    pub classified: bool,
    pub observed: bool,
}

/// Equal-width histogram over [0, 1]; the last bin is closed on the right.
fn score_histogram(set: &ObservationSet, bins: usize) -> Vec<HistogramBin> {
    let bins = bins.max(1);
    let width = 1.0 / bins as f64;
    let mut counts = vec![0usize; bins];
    for obs in set.observations() {
        let idx = ((obs.score * bins as f64) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: i as f64 * width,
            upper: if i + 1 == bins { 1.0 } else { (i + 1) as f64 * width },
            count,
        })
        .collect()
}

fn classify(set: &ObservationSet, threshold: f64) -> Vec<ClassifiedObservation> {
    set.observations()
        .iter()
        .map(|obs| ClassifiedObservation {
            fitted: obs.score,
            classified: obs.score >= threshold,
            observed: obs.label,
        })
        .collect()
}

/// Join the curve, AUC, and both optima into a report.
///
/// `histogram_bins` is `Some(n)` to generate the diagnostic datasets with `n`
/// histogram bins, or `None` to skip them.
pub fn assemble_report(
    set: &ObservationSet,
    curve: RocCurve,
    auc: f64,
    tss: TssOptimum,
    sedi: SediOptimum,
    histogram_bins: Option<usize>,
) -> SummaryReport {
    let diagnostics = histogram_bins.map(|bins| Diagnostics {
        score_histogram: score_histogram(set, bins),
        classifications: classify(set, tss.optimal.threshold),
        tss_series: TssSeries {
            points: tss.series,
            selected_threshold: tss.optimal.threshold,
        },
        roc_curve: curve,
    });

    SummaryReport {
        schema_version: SCHEMA_VERSION.to_string(),
        n_observations: set.len(),
        n_positive: set.positives(),
        n_negative: set.negatives(),
        auc,
        tss: tss.optimal,
        sedi: sedi.optimal,
        degenerate_rates: sedi.warnings,
        diagnostics,
    }
}
