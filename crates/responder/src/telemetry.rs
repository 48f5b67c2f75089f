//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, DEFAULT_LOG_FILTER, LogFormat};

/// Target of the startup announcement lines. Always enabled at `info`.
pub const STARTUP_TARGET: &str = "startup";

/// Builds the filter from the configured directive, falling back to `info`
/// when the directive does not parse.
///
/// `startup=info` is appended so the port and environment lines survive
/// stricter directives such as `RUST_LOG=warn`.
pub fn env_filter(config: &Config) -> EnvFilter {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match format!("{STARTUP_TARGET}=info").parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Installs the global subscriber writing to stdout.
///
/// A subscriber that is already installed is left in place.
pub fn init(config: &Config) {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let result = match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
