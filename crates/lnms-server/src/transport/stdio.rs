//! Stdio transport for MCP
//!
//! The traditional MCP transport over standard input/output. Used by
//! desktop clients that spawn the server as a subprocess.

use crate::McpServer;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::info;

/// Extension trait adding stdio serving to [`McpServer`]
pub trait StdioServerExt {
    /// Serve the MCP server over stdio until the client disconnects
    async fn serve_stdio(self) -> Result<(), Box<dyn std::error::Error>>;
}

impl StdioServerExt for McpServer {
    async fn serve_stdio(self) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting MCP protocol server on stdio transport");

        let service = self
            .serve(stdio())
            .await
            .map_err(|e| format!("Failed to start MCP service: {e:?}"))?;

        service
            .waiting()
            .await
            .map_err(|e| format!("MCP service error: {e:?}"))?;

        info!("MCP server shutdown complete");
        Ok(())
    }
}
