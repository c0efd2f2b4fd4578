//! Error categorization.
//!
//! This module maps `reqwest` failures onto the crate's transport error kinds.

use std::error::Error as StdError;

use super::types::{TransportError, TransportErrorKind};

/// Categorizes a `reqwest::Error` into a `TransportErrorKind`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `TransportErrorKind` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_builder() {
        TransportErrorKind::Builder
    } else if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else if error.is_request() {
        TransportErrorKind::Request
    } else if error.is_body() {
        TransportErrorKind::Body
    } else if error.is_decode() {
        TransportErrorKind::Decode
    } else {
        TransportErrorKind::Other
    }
}

/// Renders an error and its `source()` chain as `outer: inner: root`.
///
/// `reqwest` keeps the interesting part (connection refused, DNS failure)
/// in the source chain, not in its own message.
pub fn error_chain_message(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        TransportError::new(categorize_reqwest_error(&error), error_chain_message(&error))
    }
}
