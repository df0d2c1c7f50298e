//! Logging initialization with environment-based formatters
//!
//! - Production: Structured JSON logs for log aggregation
//! - Sandbox: Colorful, human-readable logs for local runs
//!
//! Logs go to stderr so the JSON report can own stdout.

use crate::config::{get_environment, is_production};
use crate::error::{PipelineError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber for the current `APP_ENV`.
///
/// `RUST_LOG` overrides the default `info` filter. Fails if a subscriber is
/// already installed.
pub fn init_logging() -> Result<()> {
    let env = get_environment();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = if is_production(&env) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    installed.map_err(|e| PipelineError::Config(format!("logging already initialised: {}", e)))
}
