//! Tracing bootstrap for hosts and tests.

use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Initialize the global tracing subscriber.
///
/// `log_level` is the fallback filter when `RUST_LOG` is unset. Fails if a
/// subscriber is already installed, so tests call it at most once per
/// process.
pub fn init_tracing(log_level: &str, json_format: bool) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = Registry::default().with(env_filter);

    if json_format {
        registry
            .with(fmt::layer().json())
            .try_init()
            .context("failed to initialize tracing subscriber")?;
    } else {
        registry
            .with(fmt::layer().compact())
            .try_init()
            .context("failed to initialize tracing subscriber")?;
    }

    Ok(())
}
