//! Command-line arguments and the summary command.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use gof_common::{Error, Result};
use gof_config::{resolve_config, SummaryConfig};
use tracing::debug;

use crate::adapter::{ModelFit, ModelInput};
use crate::logging::LogFormat;
use crate::pipeline::summarize;
use crate::report::SummaryReport;

/// Goodness-of-fit summary (ROC, AUC, TSS and SEDI thresholds) for a binary probit model.
#[derive(Parser, Debug)]
#[command(name = "gof-summary", version, about)]
pub struct Cli {
    /// Model output as JSON (`-` reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Configuration file (falls back to $GOF_CONFIG, then defaults)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Include ROC points, score histogram, TSS series and classifications
    #[arg(long)]
    pub diagnostics: bool,

    /// Substitute for exact-zero rates in SEDI
    #[arg(long, value_name = "E")]
    pub epsilon: Option<f64>,

    /// Number of fitted-score histogram bins (default: Sturges' rule)
    #[arg(long, value_name = "N")]
    pub bins: Option<usize>,

    /// Log output format (logs go to stderr; filter with RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Resolved configuration with command-line overrides applied.
    pub fn summary_config(&self) -> Result<SummaryConfig> {
        let (mut config, source) = resolve_config(self.config.as_deref())?;
        debug!(?source, "summary config resolved");
        if self.diagnostics {
            config.diagnostics = true;
        }
        if let Some(epsilon) = self.epsilon {
            config.sedi_epsilon = epsilon;
        }
        if let Some(bins) = self.bins {
            config.histogram_bins = Some(bins);
        }
        config.validate()?;
        Ok(config)
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Load the model output named on the command line and summarize it.
pub fn run(cli: &Cli) -> Result<SummaryReport> {
    let config = cli.summary_config()?;
    let input: ModelInput =
        serde_json::from_str(&read_input(&cli.input)?).map_err(Error::MalformedInput)?;
    let model = ModelFit::from(input);
    summarize(&model, &config)
}
