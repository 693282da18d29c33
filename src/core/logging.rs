//! Logging initialization
//!
//! Installs the process-wide logger (console + daily file) exactly once,
//! no matter how many fetchers or plugins get constructed afterwards.

use anyhow::Result;
use simplelog::*;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use crate::core::config;

/// Path of the log file the installed logger writes to.
static LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

/// Serializes concurrent first-time initialization.
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Daily log file name, e.g. `downloader_20261016.log`
pub fn log_file_name(date: chrono::NaiveDate) -> String {
    format!("{}{}.log", config::logging::LOG_FILE_PREFIX, date.format("%Y%m%d"))
}

/// Initialize logger for both console and file output
///
/// The file lives in `log_dir` (created if missing) and is opened in append
/// mode. Calling this again after a successful init is a no-op that returns
/// the path chosen the first time.
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the active log file
/// * `Err(anyhow::Error)` - Failed to create the file or install the logger
pub fn init_logger(log_dir: &Path) -> Result<PathBuf> {
    let _guard = INIT_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(path) = LOG_FILE.get() {
        return Ok(path.clone());
    }

    std::fs::create_dir_all(log_dir).map_err(|e| anyhow::anyhow!("Failed to create log directory: {}", e))?;
    let path = log_dir.join(log_file_name(chrono::Local::now().date_naive()));
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", path.display(), e))?;

    // Timestamp, target (logger name), level, message
    let file_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, file_config, log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(LOG_FILE.get_or_init(|| path).clone())
}

/// Whether [`init_logger`] has already installed the logger.
pub fn is_initialized() -> bool {
    LOG_FILE.get().is_some()
}
