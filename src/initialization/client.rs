//! HTTP client initialization.
//!
//! This module builds the `reqwest` client that performs single hops.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes an HTTP client for redirect tracing.
///
/// Creates a `reqwest::Client` with redirects disabled so every 3xx response
/// is returned as-is and the chain can be recorded hop by hop. A client that
/// followed redirects itself would only ever show the final response.
///
/// # Arguments
///
/// * `user_agent` - User-Agent header sent on every request
/// * `timeout` - Per-request timeout
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_redirect_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Initializes the redirect-tracing client from a `Config`.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_redirect_client_from(config: &Config) -> Result<reqwest::Client, InitializationError> {
    init_redirect_client(&config.user_agent, config.timeout())
}
