//! Runtime validation of loaded configuration.

use crate::loader::ConfigError;
use crate::schema::Config;
use phrasebook_common::{normalize_locale_tag, parse_filter};
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if let Some(culture) = &config.localization.default_culture {
            validate_culture_tag(culture)?;
        }

        if let Some(dir) = &config.localization.resources_dir {
            validate_resources_dir(dir)?;
        }

        parse_filter(&config.logging.level)
            .map_err(|e| ConfigError::Validation(format!("logging.level: {e}")))?;

        if let Some(path) = &config.logging.file_path {
            if path.file_name().is_none() {
                return Err(ConfigError::Validation(format!(
                    "logging.file_path '{}' does not name a file",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}

/// Validate a culture tag such as `fr-CA` or `pt_BR.UTF-8`.
pub fn validate_culture_tag(tag: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::Validation(format!("localization.default_culture '{tag}' is not a valid culture"));

    let normalized = normalize_locale_tag(tag).ok_or_else(invalid)?;
    let id: LanguageIdentifier = normalized.parse().map_err(|_| invalid())?;
    if id.language.is_empty() {
        return Err(invalid());
    }
    Ok(())
}

/// Validate that the resources directory exists.
pub fn validate_resources_dir(dir: &Path) -> Result<(), ConfigError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "localization.resources_dir '{}' is not a directory",
            dir.display()
        )))
    }
}
