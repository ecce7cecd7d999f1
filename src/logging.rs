use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr subscriber. `RUST_LOG` wins over the configured
/// level; `--verbose` raises the configured level to `debug`.
pub fn init(level: &str, verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(effective_level(level, verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "figdroid starting");
    Ok(())
}

fn effective_level(level: &str, verbose: bool) -> &str {
    if verbose { "debug" } else { level }
}
