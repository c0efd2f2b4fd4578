//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::config::headers::build_header_map;
use crate::error_handling::InitializationError;
use crate::trace::TracerConfig;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the finished trace is written to stdout.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One numbered line per hop
    Plain,
    /// A single JSON document describing every hop
    Json,
}

/// Tracer configuration and command-line options.
///
/// The same struct is used by the library (construct it directly, usually via
/// `..Default::default()`) and by the `hop_trace` binary, where `clap` fills it
/// from the command line.
///
/// # Examples
///
/// ```no_run
/// use hop_trace::Config;
///
/// let config = Config {
///     url: "example.com".to_string(),
///     max_redirects: 20,
///     ..Default::default()
/// };
/// ```
///
/// ```bash
/// # Follow a chain with a custom header and a tighter bound
/// hop_trace example.com -H "Accept-Language: de" --max-redirects 10
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hop_trace",
    about = "Follows an HTTP redirect chain hop by hop and prints every hop."
)]
pub struct Config {
    /// URL to trace (http:// is assumed when no scheme is given)
    pub url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Output format for the trace: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Maximum number of hops attempted before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Extra request header sent on every hop, as `Name: value` (repeatable)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Plain,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: Vec::new(),
        }
    }
}

impl Config {
    /// Per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Builds the tracer settings from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::InvalidHeader` if a header line cannot be
    /// parsed, or `InitializationError::InvalidConfig` if `max_redirects` is 0.
    pub fn tracer_config(&self) -> Result<TracerConfig, InitializationError> {
        let headers = build_header_map(&self.headers)?;
        TracerConfig::new(headers, self.max_redirects)
    }
}
