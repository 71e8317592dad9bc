//! Adapters from model representations to probabilities and labels.
//!
//! The summary never inspects the model itself. Each representation implements
//! [`ProbabilitySource`] once, and the pipeline only sees the averaged
//! probability per observation plus the observed outcome.
//!
//! Models fitted with random effects are accepted, but only their fixed-effect
//! linear predictors are evaluated; the random-effect contribution is never
//! folded into the probabilities.

use gof_common::{Error, Result};
use gof_math::mean_probit_probabilities;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::observation::labels_from_outcomes;

/// Produces the averaged probability vector and the label vector.
pub trait ProbabilitySource {
    fn probabilities_and_labels(&self) -> Result<(Vec<f64>, Vec<bool>)>;
}

/// Per-draw fitted linear predictors with the observed 0/1 outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawMatrix {
    /// One row per draw, one column per observation.
    pub draws: Vec<Vec<f64>>,
    /// Observed outcome per observation, 0 or 1.
    pub outcomes: Vec<i64>,
}

impl DrawMatrix {
    pub fn new(draws: Vec<Vec<f64>>, outcomes: Vec<i64>) -> Self {
        Self { draws, outcomes }
    }

    fn validate_shape(&self) -> Result<()> {
        let Some(first) = self.draws.first() else {
            return Err(Error::EmptyDraws);
        };
        let expected = first.len();
        if let Some((draw, row)) = self
            .draws
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            return Err(Error::RaggedDraws {
                draw,
                expected,
                actual: row.len(),
            });
        }
        if expected != self.outcomes.len() {
            return Err(Error::LengthMismatch {
                scores: expected,
                labels: self.outcomes.len(),
            });
        }
        Ok(())
    }
}

impl ProbabilitySource for DrawMatrix {
    fn probabilities_and_labels(&self) -> Result<(Vec<f64>, Vec<bool>)> {
        self.validate_shape()?;
        let labels = labels_from_outcomes(&self.outcomes)?;
        debug!(
            draws = self.draws.len(),
            observations = labels.len(),
            "averaging probit probabilities over draws"
        );
        Ok((mean_probit_probabilities(&self.draws), labels))
    }
}

/// A fitted model, tagged by whether it carries random effects.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelFit {
    /// Fixed effects only.
    Simple(DrawMatrix),
    /// Fixed effects plus random effects that are left out of the evaluation.
    WithRandomEffects {
        fixed: DrawMatrix,
        random_effects_ignored: bool,
    },
}

impl ModelFit {
    pub fn fixed_effects(&self) -> &DrawMatrix {
        match self {
            ModelFit::Simple(draws) => draws,
            ModelFit::WithRandomEffects { fixed, .. } => fixed,
        }
    }
}

impl ProbabilitySource for ModelFit {
    fn probabilities_and_labels(&self) -> Result<(Vec<f64>, Vec<bool>)> {
        if let ModelFit::WithRandomEffects {
            random_effects_ignored,
            ..
        } = self
        {
            warn!(
                random_effects_ignored,
                "random effects are not included in the evaluated probabilities; using fixed effects only"
            );
        }
        self.fixed_effects().probabilities_and_labels()
    }
}

/// Probabilities that were already averaged upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecomputedScores {
    pub scores: Vec<f64>,
    pub labels: Vec<bool>,
}

impl ProbabilitySource for PrecomputedScores {
    fn probabilities_and_labels(&self) -> Result<(Vec<f64>, Vec<bool>)> {
        Ok((self.scores.clone(), self.labels.clone()))
    }
}

/// Model variant tag used in serialized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Simple,
    WithRandomEffects,
}

/// Serialized model output as handed over by the fitting collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelInput {
    #[serde(default = "default_model_kind")]
    pub model: ModelKind,
    pub draws: Vec<Vec<f64>>,
    pub outcomes: Vec<i64>,
    /// Only meaningful for `with_random_effects`.
    #[serde(default = "default_random_effects_ignored")]
    pub random_effects_ignored: bool,
}

fn default_model_kind() -> ModelKind {
    ModelKind::Simple
}

fn default_random_effects_ignored() -> bool {
    true
}

impl From<ModelInput> for ModelFit {
    fn from(input: ModelInput) -> Self {
        let fixed = DrawMatrix::new(input.draws, input.outcomes);
        match input.model {
            ModelKind::Simple => ModelFit::Simple(fixed),
            ModelKind::WithRandomEffects => ModelFit::WithRandomEffects {
                fixed,
                random_effects_ignored: input.random_effects_ignored,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gof_math::standard_normal_cdf;

    #[test]
    fn averages_per_draw_probabilities() {
        let matrix = DrawMatrix::new(vec![vec![0.0, -1.0], vec![2.0, 1.0]], vec![1, 0]);
        let (probs, labels) = matrix.probabilities_and_labels().unwrap();
        assert_eq!(labels, vec![true, false]);
        let expected0 = (0.5 + standard_normal_cdf(2.0)) / 2.0;
        assert!((probs[0] - expected0).abs() < 1e-15);
        // Phi(-1) + Phi(1) = 1 up to the accuracy of erfc.
        assert!((probs[1] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn empty_draws_rejected() {
        let err = DrawMatrix::new(vec![], vec![1, 0])
            .probabilities_and_labels()
            .unwrap_err();
        assert!(matches!(err, Error::EmptyDraws));
    }

    #[test]
    fn ragged_draws_rejected() {
        let err = DrawMatrix::new(vec![vec![0.0, 1.0], vec![0.0]], vec![1, 0])
            .probabilities_and_labels()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedDraws {
                draw: 1,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn outcome_count_must_match_columns() {
        let err = DrawMatrix::new(vec![vec![0.0, 1.0]], vec![1])
            .probabilities_and_labels()
            .unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { .. }));
    }

    #[test]
    fn random_effects_variant_uses_fixed_draws_only() {
        let fixed = DrawMatrix::new(vec![vec![0.3, -0.3]], vec![1, 0]);
        let simple = ModelFit::Simple(fixed.clone());
        let with_re = ModelFit::WithRandomEffects {
            fixed,
            random_effects_ignored: true,
        };
        assert_eq!(
            simple.probabilities_and_labels().unwrap(),
            with_re.probabilities_and_labels().unwrap()
        );
    }

    #[test]
    fn model_input_parses_both_variants() {
        let simple: ModelInput =
            serde_json::from_str(r#"{"draws": [[0.1, -0.2]], "outcomes": [1, 0]}"#).unwrap();
        assert!(matches!(ModelFit::from(simple), ModelFit::Simple(_)));

        let re: ModelInput = serde_json::from_str(
            r#"{"model": "with_random_effects", "draws": [[0.1]], "outcomes": [1]}"#,
        )
        .unwrap();
        match ModelFit::from(re) {
            ModelFit::WithRandomEffects {
                random_effects_ignored,
                ..
            } => assert!(random_effects_ignored),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn precomputed_scores_pass_through() {
        let source = PrecomputedScores {
            scores: vec![0.2, 0.8],
            labels: vec![false, true],
        };
        let (scores, labels) = source.probabilities_and_labels().unwrap();
        assert_eq!(scores, vec![0.2, 0.8]);
        assert_eq!(labels, vec![false, true]);
    }
}
