//! Logging setup
//!
//! The TUI owns the terminal, so log output goes to a daily rolling file
//! under the data directory. Plain mode can mirror it to stderr.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::{QuizError, Result, APP_NAME, LOG_FILE_PREFIX};

/// Keeps the background log writer alive; drop it last
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Directory the log files are written to
pub fn log_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| QuizError::ConfigError("Unable to determine data directory".to_string()))?;
    Ok(data_dir.join(APP_NAME).join("logs"))
}

/// Install the global subscriber. Filter comes from `RUST_LOG`, default `info`.
pub fn init_logging(to_stderr: bool) -> LoggingGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = to_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact()
            .with_writer(std::io::stderr)
    });

    let mut file_guard = None;
    let mut warn_msg = None;
    let file_layer = match log_dir().and_then(|dir| {
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }) {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            file_guard = Some(guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(writer),
            )
        }
        Err(err) => {
            warn_msg = Some(format!("File logging disabled: {}", err));
            None
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .ok();

    if let Some(message) = warn_msg {
        tracing::warn!("{message}");
    }

    LoggingGuard {
        _file_guard: file_guard,
    }
}
