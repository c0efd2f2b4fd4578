//! Manual redirect tracing.
//!
//! A [`Tracer`] issues a GET, records the response as a [`Hop`], and follows
//! the `Location` header itself instead of letting the HTTP client do it. Each
//! hop is requested only after the previous one has finished, so the
//! recorded chain is exactly what the servers answered, in order.
//!
//! A traversal ends when:
//! - a response is not a redirect, or has no `Location` (success)
//! - a hop fails at the transport level ([`TraceError::Transport`])
//! - a `Location` cannot be resolved ([`TraceError::InvalidRedirect`])
//! - `max_redirects` hops were made without reaching one of the above
//!   ([`TraceError::MaxRedirectsExceeded`])
//!
//! Whatever happens, the hops recorded so far stay available through
//! [`Tracer::hops`] until the next traversal starts.
//!
//! # Example
//!
//! ```no_run
//! use hop_trace::{init_tracer, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tracer = init_tracer(&Config::default())?;
//! let result = tracer.trace("http://example.com/").await;
//! println!("{}", tracer.dump_hops());
//! result?;
//! # Ok(())
//! # }
//! ```

mod dump;
mod executor;
mod hop;
mod redirects;


use std::time::Instant;

use log::{debug, info, warn};
use reqwest::header::HeaderMap;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::config::DEFAULT_MAX_REDIRECTS;
use crate::error_handling::{InitializationError, TraceError};

// Re-export public API
pub use dump::{display_link, render_hops, HopRecord, TraceReport};
pub use executor::{HopExecutor, ReqwestExecutor};
pub use hop::{Hop, HopResponse};
pub use redirects::redirect_target;

/// Per-traversal settings: headers sent on every hop and the hop limit.
#[derive(Debug, Clone)]
pub struct TracerConfig {
    headers: HeaderMap,
    max_redirects: usize,
}

impl TracerConfig {
    /// Creates a configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::InvalidConfig` if `max_redirects` is 0.
    pub fn new(headers: HeaderMap, max_redirects: usize) -> Result<Self, InitializationError> {
        validate_max_redirects(max_redirects)?;
        Ok(Self {
            headers,
            max_redirects,
        })
    }

    /// Headers attached to every hop's request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Upper bound on hops attempted in one traversal.
    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            headers: HeaderMap::new(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

fn validate_max_redirects(max_redirects: usize) -> Result<(), InitializationError> {
    if max_redirects == 0 {
        return Err(InitializationError::InvalidConfig(
            "max_redirects must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Follows redirect chains hop by hop.
///
/// A tracer can be reused: every call to [`Tracer::trace`] clears the hops of
/// the previous traversal. `trace` takes `&mut self`, so one tracer runs one
/// traversal at a time; use separate tracers for concurrent work.
#[derive(Debug)]
pub struct Tracer<E = ReqwestExecutor> {
    executor: E,
    config: TracerConfig,
    hops: Vec<Hop>,
}

impl<E: HopExecutor> Tracer<E> {
    /// Creates a tracer with no extra headers and the default hop limit.
    pub fn new(executor: E) -> Self {
        Self::with_config(executor, TracerConfig::default())
    }

    /// Creates a tracer with explicit settings.
    pub fn with_config(executor: E, config: TracerConfig) -> Self {
        Self {
            executor,
            config,
            hops: Vec::new(),
        }
    }

    /// Current settings.
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Headers sent on every hop, for adjustment between traversals.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.config.headers
    }

    /// Changes the hop limit for subsequent traversals.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::InvalidConfig` if `max_redirects` is 0.
    pub fn set_max_redirects(&mut self, max_redirects: usize) -> Result<(), InitializationError> {
        validate_max_redirects(max_redirects)?;
        self.config.max_redirects = max_redirects;
        Ok(())
    }

    /// Hops recorded by the most recent traversal, in order.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Follows the redirect chain starting at `url`.
    ///
    /// # Returns
    ///
    /// The terminal response: the first one that is not a redirect or has no
    /// `Location` header.
    ///
    /// # Errors
    ///
    /// - `TraceError::InvalidUrl` if `url` does not parse (no hop recorded)
    /// - `TraceError::Transport` if any hop fails to execute
    /// - `TraceError::InvalidRedirect` if a `Location` cannot be resolved
    /// - `TraceError::MaxRedirectsExceeded` if the hop limit is reached
    pub async fn trace(&mut self, url: &str) -> Result<HopResponse, TraceError> {
        self.run(url, None).await
    }

    /// Like [`Tracer::trace`], but aborts the in-flight hop when `cancel` fires.
    ///
    /// An aborted hop is not recorded; hops completed before it are kept.
    ///
    /// # Errors
    ///
    /// Everything [`Tracer::trace`] returns, plus `TraceError::Cancelled`.
    pub async fn trace_with_cancellation(
        &mut self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<HopResponse, TraceError> {
        self.run(url, Some(cancel)).await
    }

    async fn run(
        &mut self,
        url: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<HopResponse, TraceError> {
        self.hops.clear();

        let mut current = Url::parse(url).map_err(|source| TraceError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let max_redirects = self.config.max_redirects;
        let mut hop_count = 0;

        while hop_count < max_redirects {
            let started = Instant::now();
            let request = self.executor.get(&current, &self.config.headers);
            let outcome = match cancel {
                Some(token) => tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        info!("Trace cancelled while requesting {current}");
                        return Err(TraceError::Cancelled {
                            url: current.to_string(),
                        });
                    }
                    outcome = request => outcome,
                },
                None => request.await,
            };
            let elapsed = started.elapsed();
            let link = current.to_string();

            let response = match outcome {
                Ok(response) => response,
                Err(error) => {
                    warn!("Hop {} to {link} failed: {error}", hop_count + 1);
                    self.hops.push(Hop::failed(link.clone(), error.clone(), elapsed));
                    return Err(TraceError::Transport {
                        url: link,
                        source: error,
                    });
                }
            };
            debug!(
                "Hop {}: {link} -> {} in {:?}",
                hop_count + 1,
                response.status(),
                elapsed
            );

            match redirect_target(&response, &current) {
                Ok(None) => {
                    info!(
                        "Reached {link} ({}) after {} redirect(s)",
                        response.status(),
                        hop_count
                    );
                    self.hops
                        .push(Hop::completed(link, response.clone(), elapsed));
                    return Ok(response);
                }
                Err(reason) => {
                    let location = response.location_lossy().unwrap_or_default();
                    warn!("Cannot follow redirect from {link} to {location:?}: {reason}");
                    self.hops
                        .push(Hop::completed(link.clone(), response, elapsed));
                    return Err(TraceError::InvalidRedirect {
                        url: link,
                        location,
                        reason,
                    });
                }
                Ok(Some(next)) => {
                    self.hops.push(Hop::completed(link, response, elapsed));
                    current = next;
                    hop_count += 1;
                }
            }
        }

        warn!("Giving up after {max_redirects} redirects, last target was {current}");
        Err(TraceError::MaxRedirectsExceeded { max_redirects })
    }

    /// Renders the recorded hops, one numbered line each.
    ///
    /// See [`render_hops`] for the line format. Rendering does not change the
    /// tracer, so repeated calls return the same text.
    pub fn dump_hops(&self) -> String {
        render_hops(&self.hops)
    }

    /// Structured snapshot of the recorded hops.
    pub fn report(&self) -> TraceReport {
        TraceReport::from_hops(&self.hops)
    }
}

impl Tracer<ReqwestExecutor> {
    /// Creates a `reqwest`-backed tracer with every default: no extra
    /// headers, redirects disabled, a 10 second timeout and 100 hops.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn with_defaults() -> Result<Self, InitializationError> {
        let executor = ReqwestExecutor::from_config(&crate::config::Config::default())?;
        Ok(Self::new(executor))
    }
}
