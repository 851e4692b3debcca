//! Application-wide error types using thiserror.

use phrasebook_common::PhrasebookError;
use phrasebook_i18n::I18nError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration or logging setup error.
    #[error("{0}")]
    Setup(#[from] PhrasebookError),

    /// Localization error.
    #[error("Localization error: {0}")]
    Localization(#[from] I18nError),
}

/// Result type for the command-line application.
pub type CliResult<T> = Result<T, CliError>;
