//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and traversal
//! - Transport error categorization from `reqwest` errors
//!
//! A traversal can fail in four distinct ways:
//! - **Request construction**: the starting URL is malformed
//! - **Transport**: DNS, connect, TLS or timeout on a hop
//! - **Redirect resolution**: the server sent an unusable `Location`
//! - **Policy**: the hop limit was reached

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, error_chain_message};
pub use types::{
    InitializationError, RedirectTargetError, TraceError, TransportError, TransportErrorKind,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer {
        message: &'static str,
        source: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl std::error::Error for Layer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.source
                .as_deref()
                .map(|s| s as &(dyn std::error::Error + 'static))
        }
    }

    #[test]
    fn test_error_chain_message_joins_sources() {
        let error = Layer {
            message: "error sending request",
            source: Some(Box::new(Layer {
                message: "client error (Connect)",
                source: Some(Box::new(Layer {
                    message: "Connection refused (os error 111)",
                    source: None,
                })),
            })),
        };
        assert_eq!(
            error_chain_message(&error),
            "error sending request: client error (Connect): Connection refused (os error 111)"
        );
    }

    #[test]
    fn test_error_chain_message_skips_repeated_causes() {
        let error = Layer {
            message: "timed out: operation timed out",
            source: Some(Box::new(Layer {
                message: "operation timed out",
                source: None,
            })),
        };
        assert_eq!(error_chain_message(&error), "timed out: operation timed out");
    }

    #[test]
    fn test_transport_error_display() {
        let error = TransportError::new(TransportErrorKind::Connect, "connection refused");
        assert_eq!(error.to_string(), "connect error: connection refused");
        assert_eq!(error.kind(), TransportErrorKind::Connect);
        assert_eq!(error.message(), "connection refused");
    }

    #[test]
    fn test_transport_error_kinds_display_snake_case() {
        assert_eq!(TransportErrorKind::Timeout.to_string(), "timeout");
        assert_eq!(TransportErrorKind::Connect.to_string(), "connect");
        assert_eq!(TransportErrorKind::Other.to_string(), "other");
    }

    #[test]
    fn test_trace_error_is_transport() {
        let transport = TraceError::Transport {
            url: "http://example.com/".to_string(),
            source: TransportError::new(TransportErrorKind::Timeout, "timed out"),
        };
        assert!(transport.is_transport());

        let redirect = TraceError::InvalidRedirect {
            url: "http://example.com/".to_string(),
            location: String::new(),
            reason: RedirectTargetError::Empty,
        };
        assert!(!redirect.is_transport());
        assert!(!TraceError::MaxRedirectsExceeded { max_redirects: 3 }.is_transport());
    }

    #[test]
    fn test_max_redirects_message() {
        let error = TraceError::MaxRedirectsExceeded { max_redirects: 100 };
        assert_eq!(error.to_string(), "Stopped after 100 redirects");
    }
}
