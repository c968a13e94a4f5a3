use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter from `RUST_LOG`, or fall back to `level` for this crate.
fn env_filter(level: &str) -> EnvFilter {
    let default_filter = format!("vapecost={level},vapecost_core=warn");
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize logging to stderr.
///
/// Stdout carries the rendered curves, so diagnostics never go there. The
/// log level can be controlled via the `level` parameter or the `RUST_LOG`
/// environment variable.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::debug!("vapecost logging initialized (level={level})");
    Ok(())
}
