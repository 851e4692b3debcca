//! Structured logging infrastructure for Phrasebook

use crate::types::{LogFormat, PhrasebookError, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "phrasebook_i18n=trace")
    pub level: String,
    /// Output style of the fmt layer
    pub format: LogFormat,
    /// Optional file path for log output
    pub file_path: Option<PathBuf>,
    /// Whether to include spans in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// When logging to a file the returned guard must be kept alive for the
/// lifetime of the program, otherwise buffered lines are lost on exit.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = parse_filter(&config.level)?;

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let (writer, guard) = match &config.file_path {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let result = match (config.format, writer) {
        (LogFormat::Pretty, None) => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_span_events(span_events)
                    .with_target(config.include_targets),
            )
            .try_init(),
        (LogFormat::Pretty, Some(writer)) => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(false)
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
        (LogFormat::Compact, None) => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_span_events(span_events)
                    .with_target(config.include_targets),
            )
            .try_init(),
        (LogFormat::Compact, Some(writer)) => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
    };

    result.map_err(|e| PhrasebookError::Logging(e.to_string()))?;
    Ok(guard)
}

/// Parse a level or filter directive string such as `info,phrasebook_i18n=debug`
pub fn parse_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| PhrasebookError::Logging(format!("invalid level '{level}': {e}")))
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<Option<WorkerGuard>> {
    init_logging(&LoggingConfig::default())
}

fn file_appender(path: &Path) -> Result<tracing_appender::rolling::RollingFileAppender> {
    let file_name = path
        .file_name()
        .ok_or_else(|| PhrasebookError::Logging(format!("not a file path: {}", path.display())))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(directory)?;
    Ok(tracing_appender::rolling::never(directory, file_name))
}
