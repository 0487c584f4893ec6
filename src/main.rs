//! claude-example-web crate entrypoint.
//!
//! Starts the Tokio runtime, reads the listening port from the
//! environment and launches the web server defined in the `server`
//! module. Keep this file minimal — most application logic lives in
//! `server`, `config`, and `views`.
//!
/// HTTP server implementation and request handling
mod server;
/// Configuration management and settings
mod config;
/// View engine and page templates
mod views;

use config::Config;
use tracing::error;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    if let Err(err) = server::serve(config.port).await {
        error!("Server failed to start: {err}");
        std::process::exit(1);
    }
}
