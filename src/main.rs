//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `hop_trace` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the hop dump and mapping the outcome to an exit code
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use hop_trace::app::normalize_url;
use hop_trace::initialization::init_logger_with;
use hop_trace::{init_tracer, Config, OutputFormat};

/// Exit code for a traversal that ended in an error.
const EXIT_TRACE_FAILED: i32 = 1;
/// Exit code for unusable options (matches clap's usage errors).
const EXIT_USAGE: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let mut tracer = match init_tracer(&config) {
        Ok(tracer) => tracer,
        Err(e) => {
            eprintln!("hop_trace error: {e}");
            process::exit(EXIT_USAGE);
        }
    };

    let url = normalize_url(&config.url);
    let result = tracer.trace(&url).await;

    match config.output {
        OutputFormat::Plain => {
            let dump = tracer.dump_hops();
            if !dump.is_empty() {
                println!("{dump}");
            }
        }
        OutputFormat::Json => {
            let report = match &result {
                Ok(_) => tracer.report(),
                Err(e) => tracer.report().with_error(e),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize trace")?
            );
        }
    }

    if let Err(e) = result {
        eprintln!("hop_trace error: {e}");
        process::exit(EXIT_TRACE_FAILED);
    }
    Ok(())
}
