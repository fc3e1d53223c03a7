use std::net::SocketAddr;

use api_key_auth::{app, config::AppConfig, preflight};
use color_eyre::eyre::Result;
use tokio::net::TcpListener;

/// Main entry point for the API key demo server.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables cannot be parsed
/// - The listening socket cannot be bound
/// - The server fails while serving
#[tokio::main]
pub async fn main() -> Result<()> {
    preflight::setup_tracing();
    preflight::init_error_formatter()?;

    tracing::info!("Setting up application configuration from environment variables.");
    let config = AppConfig::new_from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let app = app::router(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        "Setup complete. Listening on {}; /whoami requires an `Authorization: ApiKey <key>` header.",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}
