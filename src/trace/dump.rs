//! Human-readable and structured renderings of a recorded chain.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use serde::Serialize;

use super::hop::Hop;
use crate::config::{NO_ERROR_TOKEN, NO_RESPONSE_MARKER};

/// Renders hops as numbered lines, one per hop, without a trailing newline.
///
/// Each line reads `<n>. <link> <status> error=<error>`, where `<status>` is
/// the response status (`302 Found`) or `<no response>`, and `<error>` is the
/// hop's transport error or `none`.
pub fn render_hops(hops: &[Hop]) -> String {
    hops.iter()
        .enumerate()
        .map(|(i, hop)| render_hop(i + 1, hop))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_hop(index: usize, hop: &Hop) -> String {
    let status = match hop.response() {
        Some(response) => Cow::Owned(response.status().to_string()),
        None => Cow::Borrowed(NO_RESPONSE_MARKER),
    };
    let error = match hop.error() {
        Some(error) => Cow::Owned(error.to_string()),
        None => Cow::Borrowed(NO_ERROR_TOKEN),
    };
    format!(
        "{index}. {} {status} error={error}",
        display_link(hop.link())
    )
}

/// Percent-decodes a link for display, falling back to the raw link when the
/// decoded bytes are not UTF-8 or contain control characters (a decoded `%0A`
/// would split the hop across two lines).
pub fn display_link(link: &str) -> Cow<'_, str> {
    match percent_decode_str(link).decode_utf8() {
        Ok(decoded) if !decoded.chars().any(char::is_control) => decoded,
        _ => Cow::Borrowed(link),
    }
}

/// One hop in a [`TraceReport`].
#[derive(Debug, Clone, Serialize)]
pub struct HopRecord {
    /// 1-based position in the chain
    pub index: usize,
    /// Requested URL
    pub link: String,
    /// Status code, absent if the request failed
    pub status: Option<u16>,
    /// Canonical reason phrase for `status`
    pub reason: Option<String>,
    /// Raw `Location` header, if any
    pub location: Option<String>,
    /// Protocol version of the response (`HTTP/1.1`, `HTTP/2.0`)
    pub version: Option<String>,
    /// Transport error, if any
    pub error: Option<String>,
    /// Request duration in milliseconds
    pub elapsed_ms: u64,
}

impl HopRecord {
    fn new(index: usize, hop: &Hop) -> Self {
        let response = hop.response();
        Self {
            index,
            link: hop.link().to_string(),
            status: response.map(|r| r.status().as_u16()),
            reason: response.and_then(|r| r.status().canonical_reason().map(str::to_string)),
            location: response.and_then(|r| r.location_lossy()),
            version: response.map(|r| format!("{:?}", r.version())),
            error: hop.error().map(|e| e.to_string()),
            elapsed_ms: u64::try_from(hop.elapsed().as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Serializable snapshot of the last traversal.
#[derive(Debug, Clone, Serialize)]
pub struct TraceReport {
    /// URL of the first hop
    pub start_url: Option<String>,
    /// URL of the last hop that produced a response
    pub final_url: Option<String>,
    /// Redirects followed (every hop but the last)
    pub redirect_count: usize,
    /// Terminal error of the traversal, filled in by the caller
    pub error: Option<String>,
    /// Every recorded hop in order
    pub hops: Vec<HopRecord>,
}

impl TraceReport {
    pub(crate) fn from_hops(hops: &[Hop]) -> Self {
        Self {
            start_url: hops.first().map(|hop| hop.link().to_string()),
            final_url: hops
                .iter()
                .rev()
                .find(|hop| hop.response().is_some())
                .map(|hop| hop.link().to_string()),
            redirect_count: hops.len().saturating_sub(1),
            error: None,
            hops: hops
                .iter()
                .enumerate()
                .map(|(i, hop)| HopRecord::new(i + 1, hop))
                .collect(),
        }
    }

    /// Records the traversal's terminal error.
    pub fn with_error(mut self, error: &impl std::fmt::Display) -> Self {
        self.error = Some(error.to_string());
        self
    }
}
