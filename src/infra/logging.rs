use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

/// Installs the global subscriber writing to the configured log file.
///
/// The terminal belongs to the TUI, so nothing is logged to stdout/stderr.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, AppError> {
    let (directory, file_name) = split_log_path(&config.file)?;
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

fn split_log_path(path: &Path) -> Result<(&Path, &Path), AppError> {
    let file_name = path
        .file_name()
        .map(Path::new)
        .ok_or_else(|| AppError::LogFilePath {
            path: path.to_path_buf(),
        })?;
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    Ok((directory, file_name))
}
