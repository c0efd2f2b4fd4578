//! Hop and response types.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, LOCATION};
use reqwest::{StatusCode, Version};

use crate::error_handling::TransportError;

/// The parts of an HTTP response the tracer needs.
///
/// The body is never read: a hop is judged on status and headers alone.
#[derive(Debug, Clone)]
pub struct HopResponse {
    status: StatusCode,
    version: Version,
    headers: HeaderMap,
}

impl HopResponse {
    /// Creates a response with the given status and headers (HTTP/1.1).
    pub fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            status,
            version: Version::HTTP_11,
            headers,
        }
    }

    /// Sets the protocol version the response arrived with.
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Adds a header value, keeping any existing values for the same name.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Response status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// HTTP version of the response.
    pub fn version(&self) -> Version {
        self.version
    }

    /// All response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw `Location` header.
    ///
    /// `None` means the header is absent; a present but empty header is
    /// returned as `Some` with an empty value.
    pub fn location(&self) -> Option<&HeaderValue> {
        self.headers.get(LOCATION)
    }

    /// `Location` as display text, with invalid UTF-8 replaced.
    pub fn location_lossy(&self) -> Option<String> {
        self.location()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
    }
}

impl From<&reqwest::Response> for HopResponse {
    fn from(response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            version: response.version(),
            headers: response.headers().clone(),
        }
    }
}

/// One attempted request in a redirect chain.
///
/// Every hop carries a response, an error, or both. Hops are only created
/// once the executor has finished with the request.
#[derive(Debug, Clone)]
pub struct Hop {
    link: String,
    response: Option<HopResponse>,
    error: Option<TransportError>,
    elapsed: Duration,
}

impl Hop {
    pub(crate) fn completed(link: String, response: HopResponse, elapsed: Duration) -> Self {
        Self {
            link,
            response: Some(response),
            error: None,
            elapsed,
        }
    }

    pub(crate) fn failed(link: String, error: TransportError, elapsed: Duration) -> Self {
        Self {
            link,
            response: None,
            error: Some(error),
            elapsed,
        }
    }

    /// The URL requested on this hop.
    pub fn link(&self) -> &str {
        &self.link
    }

    /// The response, if the executor produced one.
    pub fn response(&self) -> Option<&HopResponse> {
        self.response.as_ref()
    }

    /// The transport error, if the request failed.
    pub fn error(&self) -> Option<&TransportError> {
        self.error.as_ref()
    }

    /// How long the request took.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
