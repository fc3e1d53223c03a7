use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. `RUST_LOG` wins; otherwise this crate and
/// the per-request spans from `TraceLayer` log at debug.
pub fn setup_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Installs `color_eyre` panic and error report hooks for the binary.
///
/// # Errors
///
/// Returns an error if the hooks were already installed.
pub fn init_error_formatter() -> color_eyre::Result<()> {
    color_eyre::install()
}
