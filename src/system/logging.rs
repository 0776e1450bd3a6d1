//! Logging system initialization
//!
//! Sets up tracing according to the `[logging]` section of the config.
//! Console output goes to stderr so command output on stdout stays clean.
//! The TUI draws on stderr itself, so it only ever logs to a file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{BookmarkError, Result};

/// Where log lines end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogTarget<'a> {
    Rolling(&'a str),
    File(&'a str),
    Stderr,
    Discard,
}

/// 没有配置日志文件时，`console` 决定是写 stderr 还是丢弃
fn log_target(config: &LoggingConfig, console: bool) -> LogTarget<'_> {
    match config.file.as_deref().filter(|f| !f.is_empty()) {
        Some(file) if config.enable_rotation => LogTarget::Rolling(file),
        Some(file) => LogTarget::File(file),
        None if console => LogTarget::Stderr,
        None => LogTarget::Discard,
    }
}

/// Initialize logging system based on configuration
///
/// Call once at startup, after the configuration has been loaded. Pass
/// `console = false` when something else owns the terminal.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(config: &LoggingConfig, console: bool) -> Result<WorkerGuard> {
    let target = log_target(config, console);

    let writer: Box<dyn std::io::Write + Send + Sync> = match target {
        LogTarget::Rolling(log_file) => {
            let path = Path::new(log_file);
            let dir = path.parent().unwrap_or(Path::new("."));
            let filename = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("bookmarker.log");
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(config.max_backups as usize)
                .build(dir)
                .map_err(|e| {
                    BookmarkError::config(format!("Failed to create rolling log appender: {}", e))
                })?;
            Box::new(appender)
        }
        LogTarget::File(log_file) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .map_err(|e| {
                    BookmarkError::file_operation(format!(
                        "Failed to open log file {}: {}",
                        log_file, e
                    ))
                })?;
            Box::new(file)
        }
        LogTarget::Stderr => Box::new(std::io::stderr()),
        LogTarget::Discard => Box::new(std::io::sink()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level).map_err(|e| {
        BookmarkError::config(format!("Invalid log level '{}': {}", config.level, e))
    })?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(target == LogTarget::Stderr);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| BookmarkError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}
