//! End-to-end summary: curve, AUC, both optima, report.
//!
//! Every call builds fresh intermediate state, so summaries of independent
//! models can run in parallel without coordination.

use gof_common::Result;
use gof_config::SummaryConfig;
use tracing::info;

use crate::adapter::ProbabilitySource;
use crate::auc::area_under_curve;
use crate::observation::ObservationSet;
use crate::optimize::sedi::optimize_sedi;
use crate::optimize::tss::optimize_tss;
use crate::report::{assemble_report, SummaryReport};
use crate::roc::build_roc_curve;

/// Summarize a model's fitted probabilities against its observed outcomes.
pub fn summarize<S>(source: &S, config: &SummaryConfig) -> Result<SummaryReport>
where
    S: ProbabilitySource + ?Sized,
{
    let (scores, labels) = source.probabilities_and_labels()?;
    let set = ObservationSet::new(&scores, &labels)?;
    summarize_observations(&set, config)
}

/// Summarize an already validated observation set.
pub fn summarize_observations(set: &ObservationSet, config: &SummaryConfig) -> Result<SummaryReport> {
    let curve = build_roc_curve(set)?;
    let auc = area_under_curve(&curve);
    let tss = optimize_tss(&curve);
    let sedi = optimize_sedi(&curve, config.sedi_epsilon);

    info!(
        observations = set.len(),
        thresholds = curve.points().len(),
        auc,
        tss_threshold = tss.optimal.threshold,
        tss = tss.optimal.metric_value,
        sedi_threshold = sedi.optimal.threshold,
        sedi = sedi.optimal.metric_value,
        "goodness-of-fit summary complete"
    );

    let bins = config.diagnostics.then(|| config.bins_for(set.len()));
    Ok(assemble_report(set, curve, auc, tss, sedi, bins))
}
