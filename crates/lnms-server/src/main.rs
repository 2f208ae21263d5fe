//! LibreNMS MCP server binary
//!
//! Exposes the LibreNMS network monitoring API as MCP tools over stdio
//! or HTTP.

use clap::Parser;
use lnms_server::init::{RunOverrides, run};
use lnms_server::transport::TransportMode;

/// Command line interface for the LibreNMS MCP server
#[derive(Parser, Debug)]
#[command(name = "librenms-mcp")]
#[command(about = "MCP server for the LibreNMS network monitoring API")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Transport mode: stdio, http, or hybrid (overrides config)
    #[arg(short, long)]
    pub transport: Option<TransportMode>,

    /// Refuse all tools that can modify LibreNMS (overrides config)
    #[arg(long)]
    pub read_only: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(
        cli.config.as_deref(),
        RunOverrides {
            transport: cli.transport,
            read_only: cli.read_only,
        },
    )
    .await
}
