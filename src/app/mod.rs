//! Main application helpers.
//!
//! This module provides input handling used by the `hop_trace` binary before a
//! traversal starts.

pub mod url;

// Re-export public API
pub use url::normalize_url;
