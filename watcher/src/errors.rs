//! Error types for deploywatch

use thiserror::Error;

/// Which fixed-format parser rejected a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Duration,
    Timestamp,
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::Duration => write!(f, "duration"),
            FormatKind::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// Main error type for deploywatch
#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Unhandled {kind} format: {value}")]
    Format { kind: FormatKind, value: String },

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid field {path}: {reason}")]
    InvalidField { path: String, reason: String },

    #[error("Command failed ({status}): {command}\n{output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },

    #[error("Command returned an unexpected empty string: {0}")]
    EmptyOutput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl WatchError {
    pub(crate) fn duration_format(value: &str) -> Self {
        WatchError::Format {
            kind: FormatKind::Duration,
            value: value.to_string(),
        }
    }

    pub(crate) fn timestamp_format(value: &str) -> Self {
        WatchError::Format {
            kind: FormatKind::Timestamp,
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_field(path: &str, reason: impl Into<String>) -> Self {
        WatchError::InvalidField {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
