//! Configuration loading from YAML with environment overrides.

use crate::schema::Config;
use crate::validator::ConfigValidator;
use phrasebook_common::{PhrasebookError, Result as PhrasebookResult};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Path of the configuration file to load.
pub const CONFIG_PATH_VAR: &str = "PHRASEBOOK_CONFIG_PATH";
/// Overrides `localization.default_culture`.
pub const CULTURE_VAR: &str = "PHRASEBOOK_CULTURE";
/// Overrides `localization.resources_dir`.
pub const RESOURCES_DIR_VAR: &str = "PHRASEBOOK_RESOURCES_DIR";
/// Overrides `cache.enabled`.
pub const CACHE_ENABLED_VAR: &str = "PHRASEBOOK_CACHE_ENABLED";
/// Overrides `logging.level`.
pub const LOG_LEVEL_VAR: &str = "PHRASEBOOK_LOG_LEVEL";

/// File names searched in the working directory, in order.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["phrasebook.yaml", "phrasebook.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    Validation(String),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name.
        var: String,
        /// Underlying parse error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for PhrasebookError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        debug!("Loading configuration from {:?}", path.as_ref());
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::parse(&content)?;
        Self::finish(config, |var| env::var(var).ok())
    }

    /// Load configuration from the environment and the working directory
    ///
    /// Uses `PHRASEBOOK_CONFIG_PATH` when set, else the first of
    /// [`DEFAULT_CONFIG_FILES`] that exists, else defaults.
    pub fn load() -> PhrasebookResult<Config> {
        let config = match Self::config_path() {
            Some(path) => Self::load_config(path)?,
            None => {
                debug!("No configuration file found, using defaults");
                Self::finish(Config::default(), |var| env::var(var).ok())?
            }
        };
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PhrasebookResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Parse a YAML document; missing sections take their defaults
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }
        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Apply overrides from `lookup`, then validate
    pub fn finish<F>(mut config: Config, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::apply_overrides(&mut config, lookup)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Apply environment-style overrides to configuration
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(culture) = lookup(CULTURE_VAR) {
            config.localization.default_culture = Some(culture);
        }

        if let Some(dir) = lookup(RESOURCES_DIR_VAR) {
            config.localization.resources_dir = Some(PathBuf::from(dir));
        }

        if let Some(enabled) = lookup(CACHE_ENABLED_VAR) {
            config.cache.enabled = enabled.trim().parse().map_err(|e| ConfigError::EnvParse {
                var: CACHE_ENABLED_VAR.to_string(),
                source: Box::new(e),
            })?;
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phrasebook_common::LogFormat;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_parse_partial_document() {
        let config = ConfigLoader::parse("logging:\n  format: pretty\n").unwrap();
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.logging.level, "warn");
        assert!(config.cache.enabled);
        assert!(config.localization.default_culture.is_none());
    }

    #[test]
    fn test_parse_empty_document() {
        assert_eq!(ConfigLoader::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(matches!(
            ConfigLoader::parse("logging:\n  format: fancy\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides_apply() {
        let env = vars(&[
            (CULTURE_VAR, "he-IL"),
            (CACHE_ENABLED_VAR, "false"),
            (LOG_LEVEL_VAR, "debug"),
        ]);
        let config = ConfigLoader::finish(Config::default(), |k| env.get(k).cloned()).unwrap();

        assert_eq!(config.localization.default_culture.as_deref(), Some("he-IL"));
        assert!(!config.cache.enabled);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_bad_boolean_override() {
        let env = vars(&[(CACHE_ENABLED_VAR, "sometimes")]);
        let err = ConfigLoader::finish(Config::default(), |k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::EnvParse { ref var, .. } if var == CACHE_ENABLED_VAR));
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let env = vars(&[(CULTURE_VAR, "not a culture")]);
        assert!(matches!(
            ConfigLoader::finish(Config::default(), |k| env.get(k).cloned()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_error_converts_to_common_error() {
        let err: PhrasebookError = ConfigError::Validation("nope".to_string()).into();
        assert!(matches!(err, PhrasebookError::Config(ref message) if message.contains("nope")));
    }
}
