//! Default values.

use crate::schema::{CacheConfig, LoggingSettings};
use phrasebook_common::LogFormat;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Compact,
            file_path: None,
        }
    }
}
