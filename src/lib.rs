//! hop_trace library: manual HTTP redirect tracing
//!
//! This library follows an HTTP redirect chain one hop at a time, using an HTTP
//! client with automatic redirects disabled, and records every request and
//! response along the way. The recorded chain can be rendered as numbered
//! lines or serialized as JSON.
//!
//! # Example
//!
//! ```no_run
//! use hop_trace::{init_tracer, Config};
//! use tokio;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "http://example.com/".to_string(),
//!     max_redirects: 20,
//!     ..Default::default()
//! };
//!
//! let mut tracer = init_tracer(&config)?;
//! match tracer.trace(&config.url).await {
//!     Ok(response) => println!("Final status: {}", response.status()),
//!     Err(e) => eprintln!("Trace failed: {e}"),
//! }
//! println!("{}", tracer.dump_hops());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod trace;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{
    InitializationError, RedirectTargetError, TraceError, TransportError, TransportErrorKind,
};
pub use initialization::init_tracer;
pub use trace::{
    Hop, HopExecutor, HopResponse, ReqwestExecutor, TraceReport, Tracer, TracerConfig,
};
