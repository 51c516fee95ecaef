use std::io;

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
/// Logs go to stderr so stdout stays reserved for translated values.
pub fn init(default_level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .with_context(|| format!("invalid log level: {}", default_level))?,
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}
