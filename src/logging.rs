//! Log file setup
//!
//! The terminal is owned by the UI, so log records go to a file under the
//! user's data directory instead of stderr.

use crate::{GamesError, Result, APP_NAME, LOG_FILE};
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Get the standard log file path
/// Uses $DATA_HOME/cligames/cligames.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        GamesError::LogError("Unable to determine data directory".to_string())
    })?;

    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Build a logger that appends to `path` at the given level
pub fn build_logger(path: &Path, level: LevelFilter) -> Result<env_logger::Logger> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            GamesError::LogError(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            GamesError::LogError(format!("Failed to open log file {}: {}", path.display(), e))
        })?;

    Ok(env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .build())
}

/// Install the file logger as the global `log` backend
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let logger = build_logger(path, level)?;
    let max_level = logger.filter();
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| GamesError::LogError(format!("Logger already installed: {}", e)))?;
    log::set_max_level(max_level);
    Ok(())
}
