//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, limits, dump markers)
//! - Request header parsing
//! - Configuration types shared by the library and the CLI

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::{build_header_map, parse_header_line};
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
