//! Logging bootstrap.
//!
//! # Responsibility
//! - Initialize rolling file logs exactly once per process.
//!
//! # Invariants
//! - Re-initialization with the same level and directory is idempotent.
//! - Conflicting re-initialization is rejected, never silently applied.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

const LOG_FILE_BASENAME: &str = "fancytodo";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Initializes rolling file logging for the process.
///
/// # Errors
/// - Unsupported `level` values.
/// - A `log_dir` that cannot be created.
/// - Re-initialization with a different level or directory.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = normalize_level(level)?;
    let log_dir = PathBuf::from(log_dir.trim());
    if log_dir.as_os_str().is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        std::fs::create_dir_all(&log_dir)
            .map_err(|err| format!("failed to create log directory `{}`: {err}", log_dir.display()))?;

        let logger = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir.as_path())
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        info!(
            "event=logging_init module=core status=ok level={level} log_dir={} version={}",
            log_dir.display(),
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level,
            log_dir: log_dir.clone(),
            _logger: logger,
        })
    })?;

    if state.log_dir != log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }
    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{level}`",
            state.level
        ));
    }

    Ok(())
}

/// Default log level for the current build mode: `debug` in debug builds,
/// `info` in release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{init_logging, normalize_level};

    #[test]
    fn normalize_level_accepts_known_values_case_insensitively() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert!(normalize_level("loud").is_err());
    }

    #[test]
    fn init_rejects_empty_dir() {
        let error = init_logging("info", "  ").expect_err("empty dir must be rejected");
        assert!(error.contains("empty"));
    }
}
