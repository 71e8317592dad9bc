//! Goodness-of-fit summaries for binary probit classifiers.
//!
//! The pipeline is a single forward pass:
//!
//! 1. A [`ProbabilitySource`] turns model output into averaged probabilities and labels.
//! 2. [`build_roc_curve`] sweeps every distinct score as a threshold.
//! 3. [`area_under_curve`], [`optimize_tss`] and [`optimize_sedi`] consume the curve.
//! 4. [`assemble_report`] joins the results into a [`SummaryReport`].
//!
//! [`summarize`] runs all of it.

pub mod adapter;
pub mod auc;
pub mod cli;
pub mod exit_codes;
pub mod logging;
pub mod observation;
pub mod optimize;
pub mod pipeline;
pub mod report;
pub mod roc;

pub use adapter::{DrawMatrix, ModelFit, ModelInput, PrecomputedScores, ProbabilitySource};
pub use auc::area_under_curve;
pub use observation::{Observation, ObservationSet};
pub use optimize::sedi::{
    optimize_sedi, DegenerateRateWarning, RateKind, SediOptimum, SEDI_TIE_TOLERANCE,
};
pub use optimize::tss::{optimize_tss, TssOptimum};
pub use optimize::{OptimalThreshold, ThresholdMetric};
pub use pipeline::{summarize, summarize_observations};
pub use report::{assemble_report, Diagnostics, SummaryReport};
pub use roc::{build_roc_curve, RocCurve, RocPoint};
