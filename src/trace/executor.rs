//! Single-request executors.
//!
//! The tracer never talks to the network itself. It hands each hop to a
//! `HopExecutor`, which performs exactly one GET and must return redirect
//! responses untouched.

use std::future::Future;

use reqwest::header::HeaderMap;
use url::Url;

use super::hop::HopResponse;
use crate::config::Config;
use crate::error_handling::{InitializationError, TransportError};
use crate::initialization::init_redirect_client_from;

/// Performs one HTTP GET without following redirects.
///
/// Implementations that chase redirects internally break hop recording: the
/// tracer would only ever observe the final response.
pub trait HopExecutor {
    /// Requests `url` with `headers` and returns the response as received.
    fn get(
        &self,
        url: &Url,
        headers: &HeaderMap,
    ) -> impl Future<Output = Result<HopResponse, TransportError>> + Send;
}

/// `HopExecutor` backed by a `reqwest::Client`.
///
/// The client must be built with `redirect::Policy::none()`; use
/// [`crate::initialization::init_redirect_client`] or
/// [`ReqwestExecutor::from_config`] to get one.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
}

impl ReqwestExecutor {
    /// Wraps an existing client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Builds a redirect-disabled client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if client creation fails.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(init_redirect_client_from(config)?))
    }
}

impl HopExecutor for ReqwestExecutor {
    async fn get(&self, url: &Url, headers: &HeaderMap) -> Result<HopResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .headers(headers.clone())
            .send()
            .await?;
        Ok(HopResponse::from(&response))
    }
}
