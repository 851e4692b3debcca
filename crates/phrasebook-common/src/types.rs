//! Common type definitions shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output style for the fmt logging layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented output.
    #[default]
    Pretty,
    /// Single-line output suited for files and log shippers.
    Compact,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Compact => write!(f, "compact"),
        }
    }
}

/// Common result type for the application.
pub type Result<T> = std::result::Result<T, PhrasebookError>;

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum PhrasebookError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
