//! Config resolution: explicit path, then environment, then built-in defaults.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::summary::{ConfigError, SummaryConfig};

/// Environment variable naming a summary configuration file.
pub const CONFIG_ENV_VAR: &str = "GOF_CONFIG";

/// Where the resolved configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Env(PathBuf),
    Defaults,
}

/// Resolve the summary configuration for this process.
pub fn resolve_config(
    explicit: Option<&Path>,
) -> Result<(SummaryConfig, ConfigSource), ConfigError> {
    let env = std::env::var(CONFIG_ENV_VAR).ok();
    resolve_config_from(explicit, env.as_deref())
}

/// Resolution with the environment lookup supplied by the caller.
pub fn resolve_config_from(
    explicit: Option<&Path>,
    env_value: Option<&str>,
) -> Result<(SummaryConfig, ConfigSource), ConfigError> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading config from explicit path");
        let config = SummaryConfig::from_file(path)?;
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        let path = PathBuf::from(value);
        debug!(path = %path.display(), env = CONFIG_ENV_VAR, "loading config from environment");
        let config = SummaryConfig::from_file(&path)?;
        return Ok((config, ConfigSource::Env(path)));
    }

    debug!("using built-in config defaults");
    Ok((SummaryConfig::default(), ConfigSource::Defaults))
}
