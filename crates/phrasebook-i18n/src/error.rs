//! Error types for localization operations

use crate::domain::ResourceDomain;
use thiserror::Error;

/// Errors that can occur during localization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// No template exists for the key in the requested culture, its neutral
    /// language, or the universal fallback
    #[error("Resource key '{key}' ({domain}) not found for culture '{culture}'")]
    MissingResource {
        domain: ResourceDomain,
        key: String,
        culture: String,
    },

    /// A template references more positional arguments than were supplied
    #[error("Template '{template}' requires {required} argument(s) but {supplied} were supplied")]
    FormatMismatch {
        template: String,
        required: usize,
        supplied: usize,
    },

    /// A template could not be parsed
    #[error("Malformed template '{template}': {reason}")]
    MalformedTemplate { template: String, reason: String },

    /// Null-equivalent or unroutable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to parse a culture identifier
    #[error("Invalid culture identifier: {0}")]
    InvalidCulture(String),

    /// Failed to read a resource bundle
    #[error("Failed to load resource file: {path}")]
    ResourceLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A resource bundle is not well-formed
    #[error("Failed to parse {domain} resources: {message}")]
    ResourceParse {
        domain: ResourceDomain,
        message: String,
    },
}

/// Result type for localization operations
pub type I18nResult<T> = Result<T, I18nError>;
