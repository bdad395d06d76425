//! File logging.
//!
//! The terminal belongs to the UI while it runs, so log records go to a file
//! under the user cache directory instead of stderr. Logging is off unless
//! enabled in the configuration; with no logger installed the `log` macros
//! are no-ops.

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;

/// `<cache_dir>/git-pick/git-pick.log`
pub fn get_log_file_path() -> Result<PathBuf> {
    let dir = dirs::cache_dir().context("Could not determine cache directory")?;
    Ok(dir.join(APP_NAME).join(LOG_FILE_NAME))
}

/// Install the global logger according to `config`.
///
/// Returns the log file path when logging was enabled, `None` otherwise.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    init_with_path(config, path.clone())?;
    Ok(Some(path))
}

/// Install the global logger writing to `path`.
pub fn init_with_path(config: &LoggingConfig, path: PathBuf) -> Result<()> {
    let level = config.level_filter()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file)
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    log::info!("Logging to {} at level {}", path.display(), level);
    Ok(())
}
