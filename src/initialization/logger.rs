//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging. Logs go to stderr so
/// they never mix with the hop dump on stdout.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter overrides it for this crate.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show every hop as it is requested
/// hop_trace example.com --log-level debug
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=hop_trace=debug,reqwest=info hop_trace example.com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("hop_trace", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_log_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init so tests and embedding applications can call this more than once
    builder.try_init()?;

    Ok(())
}

/// Formats one structured log line.
fn json_log_line(ts_millis: i64, level: log::Level, target: &str, message: &str) -> String {
    format!(
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        ts_millis,
        level,
        target,
        serde_json::to_string(message).unwrap_or_else(|_| "\"\"".into())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_log_line_is_valid_json() {
        let line = json_log_line(
            1_700_000_000_000,
            log::Level::Info,
            "hop_trace::trace",
            "hop 1: \"quoted\" http://example.com/",
        );
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");
        assert_eq!(parsed["ts"], 1_700_000_000_000i64);
        assert_eq!(parsed["level"], "INFO");
        assert_eq!(parsed["target"], "hop_trace::trace");
        assert_eq!(parsed["msg"], "hop 1: \"quoted\" http://example.com/");
    }

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        // Only the first installation in a process can succeed
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
