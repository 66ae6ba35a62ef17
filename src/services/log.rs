use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a `-v` count, used when `RUST_LOG` is unset.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global `tracing` subscriber.
///
/// Events go to stderr so stdout only ever carries the report. Calling this
/// twice is an error from the subscriber registry, which is returned as-is.
pub fn init_logging(verbosity: u8) -> crate::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()
        .map_err(|e| crate::SnapshotError::config(format!("tracing setup failed: {e}")))
}
