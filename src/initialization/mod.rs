//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - The logger
//! - The HTTP client used for single hops
//! - A ready-to-use tracer built from `Config`
//!
//! All initialization functions return `InitializationError` on failure.

mod client;
mod logger;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::trace::{ReqwestExecutor, Tracer};

// Re-export public API
pub use client::{init_redirect_client, init_redirect_client_from};
pub use logger::init_logger_with;

/// Builds a tracer backed by `reqwest` from the given configuration.
///
/// # Errors
///
/// Returns an error if a header line is malformed, `max_redirects` is 0, or the
/// HTTP client cannot be created.
pub fn init_tracer(config: &Config) -> Result<Tracer<ReqwestExecutor>, InitializationError> {
    let tracer_config = config.tracer_config()?;
    let client = init_redirect_client_from(config)?;
    Ok(Tracer::with_config(ReqwestExecutor::new(client), tracer_config))
}
