//! Logging bootstrap.
//!
//! Writing logs to the terminal would corrupt the TUI (alternate screen), so
//! an interactive session logs to a file unless told otherwise.

use std::fs::{File, OpenOptions};
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::AkiRiskError;

/// Open the log file for appending, creating parent directories.
///
/// # Errors
/// Returns `AkiRiskError::Io` if the file cannot be opened.
pub fn open_log_file(path: &Path) -> crate::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        // Best-effort: opening the file reports the real problem.
        let _ = std::fs::create_dir_all(parent);
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Install the global `tracing` subscriber.
///
/// The returned guard flushes buffered log lines when dropped; keep it alive
/// for the lifetime of the program.
///
/// # Errors
/// Returns error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(config: &Config, interactive: bool) -> crate::Result<WorkerGuard> {
    let use_file = config.log_mode.use_file(interactive);

    let (writer, guard) = if use_file {
        tracing_appender::non_blocking(open_log_file(&config.log_file)?)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(!use_file),
        )
        .try_init()
        .map_err(|e| AkiRiskError::Config(format!("Cannot install log subscriber: {e}")))?;

    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("logs").join("aki-risk.log");

        open_log_file(&path).expect("Should open log file");
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_reports_io_error() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        // A directory cannot be opened as a log file.
        let err = open_log_file(dir.path()).expect_err("Should fail");
        assert!(matches!(err, AkiRiskError::Io(_)));
    }
}
