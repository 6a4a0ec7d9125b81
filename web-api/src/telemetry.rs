use tracing_subscriber::EnvFilter;

use crate::settings::LogLevel;

/// Installs the global fmt subscriber, `RUST_LOG` takes precedence over the configured level.
pub fn init_tracer(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_ref()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
