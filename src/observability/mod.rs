// Observability bootstrap using the tracing crate
// For host processes that have not installed a subscriber of their own

use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Install the default JSON subscriber with a crate-scoped filter
pub fn init() -> Result<()> {
    init_with_filter("process_uptime=info")
}

/// Install a JSON subscriber with an explicit fallback filter
///
/// `RUST_LOG` still takes precedence when set. Returns an error if a
/// global subscriber is already installed, which embedding hosts and
/// test harnesses may safely ignore.
pub fn init_with_filter(default_filter: &str) -> Result<()> {
    let fmt_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_thread_ids(true);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .context("Failed to create tracing filter")?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
