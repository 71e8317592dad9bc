//! Summary configuration types.

use std::path::Path;

use gof_math::DEFAULT_RATE_EPSILON;
use serde::{Deserialize, Serialize};

/// Largest epsilon accepted for zero-rate substitution.
pub const MAX_RATE_EPSILON: f64 = 1e-3;

/// Options for one goodness-of-fit summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryConfig {
    /// Generate the diagnostic datasets (ROC points, histogram, TSS series,
    /// per-observation classification).
    #[serde(default)]
    pub diagnostics: bool,

    /// Value substituted for exact-zero rates before taking logarithms in SEDI.
    #[serde(default = "default_sedi_epsilon")]
    pub sedi_epsilon: f64,

    /// Number of fitted-score histogram bins. `None` uses Sturges' rule.
    #[serde(default)]
    pub histogram_bins: Option<usize>,
}

fn default_sedi_epsilon() -> f64 {
    DEFAULT_RATE_EPSILON
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            diagnostics: false,
            sedi_epsilon: DEFAULT_RATE_EPSILON,
            histogram_bins: None,
        }
    }
}

/// Errors raised while loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("sedi_epsilon must be in (0, {max}], got {value}")]
    InvalidEpsilon { value: f64, max: f64 },

    #[error("histogram_bins must be at least 1")]
    InvalidBins,
}

impl From<ConfigError> for gof_common::Error {
    fn from(err: ConfigError) -> Self {
        gof_common::Error::Config(err.to_string())
    }
}

impl SummaryConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse_json(&content)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, ConfigError> {
        let config: SummaryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check semantic constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sedi_epsilon > 0.0 && self.sedi_epsilon <= MAX_RATE_EPSILON) {
            return Err(ConfigError::InvalidEpsilon {
                value: self.sedi_epsilon,
                max: MAX_RATE_EPSILON,
            });
        }
        if self.histogram_bins == Some(0) {
            return Err(ConfigError::InvalidBins);
        }
        Ok(())
    }

    /// Histogram bin count for `n` fitted scores.
    ///
    /// Sturges' rule (`ceil(log2 n) + 1`) unless a fixed count is configured.
    pub fn bins_for(&self, n: usize) -> usize {
        match self.histogram_bins {
            Some(bins) => bins,
            None if n <= 1 => 1,
            None => (n as f64).log2().ceil() as usize + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SummaryConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.diagnostics);
        assert_eq!(config.sedi_epsilon, 1e-9);
        assert_eq!(config.histogram_bins, None);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config = SummaryConfig::parse_json("{}").unwrap();
        assert_eq!(config, SummaryConfig::default());
    }

    #[test]
    fn parse_full_config() {
        let config = SummaryConfig::parse_json(
            r#"{"diagnostics": true, "sedi_epsilon": 1e-6, "histogram_bins": 12}"#,
        )
        .unwrap();
        assert!(config.diagnostics);
        assert_eq!(config.sedi_epsilon, 1e-6);
        assert_eq!(config.histogram_bins, Some(12));
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = SummaryConfig::parse_json(r#"{"diagnostic": true}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn epsilon_bounds_enforced() {
        for bad in ["0.0", "-1e-9", "0.01"] {
            let json = format!(r#"{{"sedi_epsilon": {bad}}}"#);
            let err = SummaryConfig::parse_json(&json).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidEpsilon { .. }), "{bad}");
        }
    }

    #[test]
    fn zero_bins_rejected() {
        let err = SummaryConfig::parse_json(r#"{"histogram_bins": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBins));
    }

    #[test]
    fn sturges_rule() {
        let config = SummaryConfig::default();
        assert_eq!(config.bins_for(0), 1);
        assert_eq!(config.bins_for(1), 1);
        assert_eq!(config.bins_for(6), 4);
        assert_eq!(config.bins_for(100), 8);
        assert_eq!(config.bins_for(1024), 11);
    }

    #[test]
    fn fixed_bins_override_sturges() {
        let config = SummaryConfig {
            histogram_bins: Some(5),
            ..Default::default()
        };
        assert_eq!(config.bins_for(1000), 5);
    }

    #[test]
    fn converts_into_config_error_code() {
        let err: gof_common::Error = ConfigError::InvalidBins.into();
        assert_eq!(err.code(), 10);
    }

    #[test]
    fn from_file_reports_path_on_missing() {
        let err = SummaryConfig::from_file(Path::new("/nonexistent/gof.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/gof.json"));
    }
}
