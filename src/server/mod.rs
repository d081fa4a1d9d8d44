//! MCP server for the LotsEye site.
//!
//! This module provides the MCP protocol server that exposes the site's
//! pages, contact form and search to AI assistants.

pub mod handlers;

pub use handlers::SiteMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the site MCP server with stdio transport.
///
/// Communicates via stdin/stdout and returns once the client disconnects.
pub async fn run_server(server: SiteMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
