//! Logging setup for the batch binary
//!
//! Logs go to stderr so they never interleave with the stdout summary table.
//! The level can be controlled via the `level` parameter or the `RUST_LOG`
//! environment variable.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("hiresim={level},hiresim_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    Ok(())
}
