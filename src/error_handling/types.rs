//! Error type definitions.
//!
//! This module defines the errors surfaced by tracer setup and by a traversal.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::Display;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A `Name: value` header could not be parsed.
    #[error("Invalid header {header:?}: {reason}")]
    InvalidHeader {
        /// The header line as given
        header: String,
        /// Why it was rejected
        reason: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Broad category of a transport failure.
///
/// Mirrors the predicates `reqwest::Error` exposes so callers can tell a
/// timeout from a refused connection without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TransportErrorKind {
    /// The request could not be built
    Builder,
    /// The per-request timeout elapsed
    Timeout,
    /// DNS, TCP or TLS connection failure
    Connect,
    /// The request failed while being sent
    Request,
    /// The response body failed
    Body,
    /// The response could not be decoded
    Decode,
    /// Anything else
    Other,
}

/// A failure reported by the single-request executor.
///
/// Stored on the failing hop and returned from the traversal, so it is
/// `Clone` and owns its message rather than the underlying client error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} error: {message}")]
pub struct TransportError {
    kind: TransportErrorKind,
    message: String,
}

impl TransportError {
    /// Creates a transport error of the given kind.
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The category of the failure.
    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    /// Human-readable detail, including the underlying cause chain.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Why a `Location` header could not be turned into the next hop's URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RedirectTargetError {
    /// The header is present but blank
    #[error("Location header is empty")]
    Empty,

    /// The value does not parse as a URL, even relative to the current one
    #[error("Location is not a valid URL: {0}")]
    Parse(#[from] url::ParseError),
}

/// Terminal failures of a traversal.
///
/// Every variant except `InvalidUrl` leaves the hops recorded so far on the
/// tracer for inspection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// The starting URL is malformed; no hop was attempted.
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        /// The URL as given
        url: String,
        /// Parse failure
        #[source]
        source: url::ParseError,
    },

    /// The executor failed on a hop (DNS, connect, TLS, timeout, ...).
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// URL of the failing hop
        url: String,
        /// Error recorded on that hop
        #[source]
        source: TransportError,
    },

    /// A redirect response carried a `Location` that cannot be followed.
    #[error("Invalid redirect from {url} to {location:?}: {reason}")]
    InvalidRedirect {
        /// URL of the hop that answered with the redirect
        url: String,
        /// Raw `Location` value (lossily decoded)
        location: String,
        /// Why it was rejected
        #[source]
        reason: RedirectTargetError,
    },

    /// The hop limit was reached before a terminal response.
    #[error("Stopped after {max_redirects} redirects")]
    MaxRedirectsExceeded {
        /// The configured limit
        max_redirects: usize,
    },

    /// The traversal was cancelled while a hop was in flight.
    #[error("Trace cancelled while requesting {url}")]
    Cancelled {
        /// URL of the abandoned hop
        url: String,
    },
}

impl TraceError {
    /// True when the traversal stopped because the network failed, as opposed
    /// to the server sending something unusable or the hop limit being hit.
    pub fn is_transport(&self) -> bool {
        matches!(self, TraceError::Transport { .. })
    }
}
