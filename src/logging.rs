//! Tracing subscriber installation for hosts that have none of their own

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter {filter:?}: {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to open log file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Guard of the writer installed by [`init_logging`]; dropping it flushes
static WRITER_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Install the global subscriber described by `config`
///
/// Records go through a non-blocking writer. Call [`flush_logging`] before
/// the process exits so buffered records reach the sink.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(&config.filter).map_err(|source| {
        LoggingError::InvalidFilter {
            filter: config.filter.clone(),
            source,
        }
    })?;
    let (writer, guard) = make_writer(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true);
    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    result.map_err(|_| LoggingError::AlreadyInitialized)?;

    *WRITER_GUARD.lock().unwrap_or_else(PoisonError::into_inner) = Some(guard);

    tracing::debug!("tracing initialized (format={:?})", config.format);
    Ok(())
}

/// Flush records buffered by the writer installed by [`init_logging`]
///
/// Blocks until the writer drained its queue. Records emitted afterwards are
/// dropped. Does nothing when [`init_logging`] was never called.
pub fn flush_logging() {
    let guard = WRITER_GUARD
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
    drop(guard);
}

/// Non-blocking writer to the configured file, or stderr
pub fn make_writer(config: &LoggingConfig) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::Io {
                    path: path.clone(),
                    source,
                })?;
            Ok(tracing_appender::non_blocking(file))
        }
        None => Ok(tracing_appender::non_blocking(io::stderr())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn make_writer_appends_to_configured_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("version-info.log");
        std::fs::write(&path, "existing\n").unwrap();
        let config = LoggingConfig {
            file: Some(path.clone()),
            ..LoggingConfig::default()
        };

        let (mut writer, guard) = make_writer(&config).unwrap();
        writer.write_all(b"appended\n").unwrap();
        drop(guard);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing\nappended\n");
    }

    #[test]
    fn make_writer_reports_unopenable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing-dir").join("version-info.log");
        let config = LoggingConfig {
            file: Some(path.clone()),
            ..LoggingConfig::default()
        };

        let result = make_writer(&config);

        assert!(matches!(result, Err(LoggingError::Io { path: p, .. }) if p == path));
    }

    #[test]
    fn init_logging_rejects_invalid_filter() {
        let config = LoggingConfig {
            filter: "version_info=notalevel".to_string(),
            ..LoggingConfig::default()
        };

        let result = init_logging(&config);

        assert!(matches!(result, Err(LoggingError::InvalidFilter { .. })));
    }

    #[test]
    fn flush_logging_without_init_is_noop() {
        flush_logging();
        flush_logging();
    }
}
