//! Logging configuration for AV Audio Converter
//!
//! Logs go to the terminal and to a file at
//! `~/Library/Logs/AV-Audio-Converter/av-audio-converter.log` on macOS, or
//! under the platform's local data directory elsewhere.

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::conversion::open_in_file_manager;

const APP_DIR_NAME: &str = "AV-Audio-Converter";
const LOG_FILE_NAME: &str = "av-audio-converter.log";
const ROTATED_LOG_FILE_NAME: &str = "av-audio-converter.log.old";

/// Logs larger than this are moved aside at startup
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

/// Get the log directory path
pub fn get_log_directory() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Logs").join(APP_DIR_NAME))
    } else {
        dirs::data_local_dir().map(|d| d.join(APP_DIR_NAME).join("logs"))
    }
}

/// Move the log to `.old` once it passes the size limit
///
/// Returns true if the file was rotated.
fn rotate_if_too_large(log_dir: &Path, max_size: u64) -> bool {
    let log_path = log_dir.join(LOG_FILE_NAME);
    match fs::metadata(&log_path) {
        Ok(metadata) if metadata.len() > max_size => {
            fs::rename(&log_path, log_dir.join(ROTATED_LOG_FILE_NAME)).is_ok()
        }
        _ => false,
    }
}

fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build()
}

/// Initialize the logging system
///
/// Info and above go to the terminal, debug and above to the log file.
/// Falls back to terminal-only logging when the file can't be opened.
///
/// Returns the path to the log file on success
pub fn init_logging() -> Option<PathBuf> {
    let Some(log_dir) = get_log_directory() else {
        eprintln!("Warning: Could not determine log directory");
        init_terminal_only();
        return None;
    };

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Could not create log directory: {}", e);
        init_terminal_only();
        return None;
    }

    rotate_if_too_large(&log_dir, MAX_LOG_SIZE);

    let log_path = log_dir.join(LOG_FILE_NAME);
    let log_file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file: {}", e);
            init_terminal_only();
            return None;
        }
    };

    let config = log_config();
    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(
            LevelFilter::Info,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Debug, config, log_file),
    ];

    if CombinedLogger::init(loggers).is_err() {
        eprintln!("Warning: Logger already initialized");
    }

    log::info!("=== AV Audio Converter session started ===");
    log::info!("Log file: {}", log_path.display());

    Some(log_path)
}

/// Terminal-only logging (fallback if file logging fails)
fn init_terminal_only() {
    let term_logger = TermLogger::new(
        LevelFilter::Info,
        log_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    let _ = CombinedLogger::init(vec![term_logger]);
}

/// Reveal the log directory so users can attach logs to bug reports
pub fn open_log_directory() -> Result<(), String> {
    let log_dir = get_log_directory().ok_or("Could not determine log directory")?;
    open_in_file_manager(&log_dir)
}
