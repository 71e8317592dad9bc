//! Score/label pairs evaluated by the summary.

use gof_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// One fitted probability and its observed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Fitted probability in [0, 1].
    pub score: f64,
    /// Observed outcome (`true` = positive class).
    pub label: bool,
}

/// Immutable, validated set of observations for one summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSet {
    observations: Vec<Observation>,
    positives: usize,
}

impl ObservationSet {
    /// Pair scores with labels.
    ///
    /// Fails with `LengthMismatch` when the slices differ in length and with
    /// `InvalidScore` when a score is not a finite probability. Class balance is
    /// not checked here; the ROC builder rejects single-class sets.
    pub fn new(scores: &[f64], labels: &[bool]) -> Result<Self> {
        if scores.len() != labels.len() {
            return Err(Error::LengthMismatch {
                scores: scores.len(),
                labels: labels.len(),
            });
        }
        if let Some((index, &value)) = scores
            .iter()
            .enumerate()
            .find(|(_, s)| !(s.is_finite() && (0.0..=1.0).contains(*s)))
        {
            return Err(Error::InvalidScore { index, value });
        }

        let observations: Vec<Observation> = scores
            .iter()
            .zip(labels)
            .map(|(&score, &label)| Observation { score, label })
            .collect();
        let positives = labels.iter().filter(|&&l| l).count();
        Ok(Self {
            observations,
            positives,
        })
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Number of observations with a positive outcome.
    pub fn positives(&self) -> usize {
        self.positives
    }

    /// Number of observations with a negative outcome.
    pub fn negatives(&self) -> usize {
        self.observations.len() - self.positives
    }
}

/// Convert 0/1 outcomes into labels.
pub fn labels_from_outcomes(outcomes: &[i64]) -> Result<Vec<bool>> {
    outcomes
        .iter()
        .enumerate()
        .map(|(index, &value)| match value {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidLabel { index, value }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_scores_with_labels() {
        let set = ObservationSet::new(&[0.9, 0.1, 0.4], &[true, false, true]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.positives(), 2);
        assert_eq!(set.negatives(), 1);
        assert_eq!(
            set.observations()[1],
            Observation {
                score: 0.1,
                label: false
            }
        );
    }

    #[test]
    fn length_mismatch_rejected() {
        let err = ObservationSet::new(&[0.5, 0.5], &[true]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                scores: 2,
                labels: 1
            }
        ));
    }

    #[test]
    fn out_of_range_and_nan_scores_rejected() {
        let err = ObservationSet::new(&[0.5, 1.5], &[true, false]).unwrap_err();
        assert!(matches!(err, Error::InvalidScore { index: 1, .. }));
        let err = ObservationSet::new(&[f64::NAN], &[true]).unwrap_err();
        assert!(matches!(err, Error::InvalidScore { index: 0, .. }));
    }

    #[test]
    fn boundary_probabilities_accepted() {
        assert!(ObservationSet::new(&[0.0, 1.0], &[false, true]).is_ok());
    }

    #[test]
    fn outcomes_must_be_binary() {
        assert_eq!(
            labels_from_outcomes(&[0, 1, 1]).unwrap(),
            vec![false, true, true]
        );
        let err = labels_from_outcomes(&[0, 2]).unwrap_err();
        assert!(matches!(err, Error::InvalidLabel { index: 1, value: 2 }));
    }
}
