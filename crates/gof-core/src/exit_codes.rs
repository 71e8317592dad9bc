//! Exit codes for the gof-summary CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing.

use gof_common::Error;

/// Exit codes for gof-summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report produced
    Clean = 0,

    /// Configuration error
    ConfigError = 10,

    /// Input rejected or not evaluable (malformed document, shape, labels, single class)
    EvaluationError = 12,

    /// I/O or serialization error
    IoError = 13,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config(_) => ExitCode::ConfigError,
            Error::Io(_) | Error::Json(_) => ExitCode::IoError,
            _ if err.is_input_error() => ExitCode::EvaluationError,
            _ => ExitCode::IoError,
        }
    }
}
