//! Configuration constants.
//!
//! This module defines the defaults used when building a tracer or parsing
//! command-line options.

/// Default upper bound on the number of hops attempted in one traversal.
///
/// Redirect loops are common on the open web, so every traversal is bounded.
pub const DEFAULT_MAX_REDIRECTS: usize = 100;

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Scheme prepended to URLs given without one.
pub const DEFAULT_SCHEME: &str = "http://";

/// Marker printed in the hop dump for hops that never produced a response.
pub const NO_RESPONSE_MARKER: &str = "<no response>";

/// Token printed in the hop dump for hops that completed without error.
pub const NO_ERROR_TOKEN: &str = "none";
