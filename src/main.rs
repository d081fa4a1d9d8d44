//! LotsEye site server - Main entry point
//!
//! Serves the LotsEye marketing site (pages, contact form, search) over the
//! Model Context Protocol on stdio.

use anyhow::Result;
use lotseye_site::delivery::sink_from_config;
use lotseye_site::{Config, Metrics, SiteMcpServer, SiteSession};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Read configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let metrics = Metrics::new();
    let sink = sink_from_config(&config, metrics.clone());
    info!("Contact submissions go to the {} sink", sink.name());

    let session = SiteSession::new(&config, sink, metrics)?;
    let server = SiteMcpServer::new(session);

    info!(
        "Toast duration: {} ms, typewriter ticks: {}/{} ms",
        config.toast_duration_ms, config.typewriter_type_ms, config.typewriter_delete_ms
    );

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    lotseye_site::server::run_server(server).await?;

    info!("LotsEye site server shutdown complete");
    Ok(())
}
