//! Error types for goodness-of-fit summaries.

use thiserror::Error;

/// Result type alias for goodness-of-fit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for goodness-of-fit summaries.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    // Input errors (20-29)
    #[error("length mismatch: {scores} scores but {labels} labels")]
    LengthMismatch { scores: usize, labels: usize },

    #[error("invalid score {value} at observation {index}: must be a finite probability in [0, 1]")]
    InvalidScore { index: usize, value: f64 },

    #[error("invalid outcome {value} at observation {index}: must be 0 or 1")]
    InvalidLabel { index: usize, value: i64 },

    #[error("ragged draw matrix: draw {draw} has {actual} columns, expected {expected}")]
    RaggedDraws {
        draw: usize,
        expected: usize,
        actual: usize,
    },

    #[error("draw matrix contains no draws")]
    EmptyDraws,

    #[error("malformed model input: {0}")]
    MalformedInput(#[source] serde_json::Error),

    // Evaluation errors (30-39)
    #[error("insufficient classes: {positives} positive and {negatives} negative outcomes, both classes are required")]
    InsufficientClasses { positives: usize, negatives: usize },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::LengthMismatch { .. } => 20,
            Error::InvalidScore { .. } => 21,
            Error::InvalidLabel { .. } => 22,
            Error::RaggedDraws { .. } => 23,
            Error::EmptyDraws => 24,
            Error::MalformedInput(_) => 25,
            Error::InsufficientClasses { .. } => 30,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Whether the error originates from the caller's input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        (20..40).contains(&self.code())
    }
}
