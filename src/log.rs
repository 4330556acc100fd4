use crate::prelude::*;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG`, defaulting to `info`.
pub fn setup_logging() -> Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
