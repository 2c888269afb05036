//! algoscope server - standalone entry point for the algoscope API
//!
//! Thin wrapper around `algoscope-api` that reads configuration from the
//! environment and serves until interrupted.

use algoscope_api::{AlgoscopeServer, ServerConfig};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    algoscope_api::server::init_tracing();

    tracing::info!("Starting algoscope server...");

    // ALGOSCOPE_PORT wins over a platform-provided PORT
    let config = ServerConfig::from_env();
    tracing::info!(
        addr = %config.addr,
        timeout_secs = config.timeout.as_secs(),
        max_body_size = config.max_body_size,
        compression = config.compression,
        "Loaded configuration"
    );

    let server = AlgoscopeServer::new(config);

    server.run().await.map_err(|e| {
        tracing::error!("Server error during execution: {}", e);
        e
    })?;

    Ok(())
}
