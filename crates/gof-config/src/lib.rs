//! Goodness-of-fit summary configuration loading and validation.
//!
//! This crate provides:
//! - The typed [`SummaryConfig`] consumed by the summary pipeline
//! - Semantic validation of configured values
//! - Config resolution (explicit path -> env -> defaults)

pub mod resolve;
pub mod summary;

pub use resolve::{resolve_config, resolve_config_from, ConfigSource, CONFIG_ENV_VAR};
pub use summary::{ConfigError, SummaryConfig};
