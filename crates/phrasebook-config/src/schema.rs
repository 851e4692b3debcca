//! Configuration schema definitions.

use phrasebook_common::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for Phrasebook.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Culture and resource settings.
    pub localization: LocalizationConfig,
    /// Resolved-template cache settings.
    pub cache: CacheConfig,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Culture and resource settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Culture used when a call names none; the ambient UI culture when absent.
    pub default_culture: Option<String>,
    /// Directory of TOML bundles merged over the bundled resources.
    pub resources_dir: Option<PathBuf>,
}

/// Resolved-template cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether resolved templates are memoized.
    pub enabled: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level or filter directives, e.g. `info` or `warn,phrasebook_i18n=debug`.
    pub level: String,
    /// Output style.
    pub format: LogFormat,
    /// Write logs to this file instead of stderr.
    pub file_path: Option<PathBuf>,
}

impl LoggingSettings {
    /// Converts these settings into the logging subsystem's configuration.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            file_path: self.file_path.clone(),
            ..LoggingConfig::default()
        }
    }
}
