//! Server initialization
//!
//! Handles startup: configuration loading, logging and telemetry
//! setup, server wiring, and transport selection.
//!
//! # Transport Modes
//!
//! The server supports three transport modes configured via
//! `server.transport_mode`:
//!
//! - **Stdio**: Traditional MCP protocol over stdin/stdout (default)
//! - **Http**: JSON-RPC over HTTP with Server-Sent Events
//! - **Hybrid**: Both running simultaneously
//!
//! # Configuration
//!
//! Settings merge in order: defaults, TOML file, environment variables
//! (`LIBRENMS_MCP_` prefix with `__` separators, e.g.
//! `LIBRENMS_MCP_SERVER__TRANSPORT_MODE=http`), then the CLI flags.

use std::path::Path;
use std::sync::Arc;

use lnms_infrastructure::config::{AppConfig, ConfigLoader, TransportMode};
use lnms_infrastructure::{LibreNmsClient, SlidingWindowRateLimiter, init_logging, init_telemetry};
use tracing::{error, info};

use crate::McpServer;
use crate::McpServerBuilder;
use crate::access::AccessPolicy;
use crate::transport::http::{HttpTransport, HttpTransportConfig};
use crate::transport::stdio::StdioServerExt;

/// CLI overrides applied on top of the loaded configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOverrides {
    /// Force a transport mode regardless of configuration
    pub transport: Option<TransportMode>,
    /// Force read-only mode on
    pub read_only: bool,
}

/// Run the LibreNMS MCP server
///
/// This is the main entry point. It loads configuration, initializes
/// logging and telemetry, wires the server, and blocks on the selected
/// transport until shutdown.
pub async fn run(
    config_path: Option<&Path>,
    overrides: RunOverrides,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config_path)?;
    if let Some(transport) = overrides.transport {
        config.server.transport_mode = transport;
    }
    if overrides.read_only {
        config.access.read_only = true;
    }

    init_logging(&config.logging)?;
    // the guard flushes pending events on drop, keep it for the whole run
    let _telemetry = init_telemetry(&config.telemetry);

    config.require_credentials()?;

    info!(
        transport_mode = %config.server.transport_mode,
        host = %config.server.host,
        port = config.server.port,
        read_only = config.access.read_only,
        "Starting LibreNMS MCP server"
    );

    let transport_mode = config.server.transport_mode;
    let http_config = HttpTransportConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        enable_cors: config.server.enable_cors,
    };

    let server = create_mcp_server(&config)?;
    info!("MCP server initialized successfully");

    start_transport(server, transport_mode, http_config).await
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Wire the MCP server from configuration
fn create_mcp_server(config: &AppConfig) -> Result<McpServer, Box<dyn std::error::Error>> {
    let client = Arc::new(LibreNmsClient::new(&config.librenms)?);
    let policy = AccessPolicy::from_config(&config.access);

    let mut builder = McpServerBuilder::new().with_client(client).with_policy(policy);
    if let Some(limiter) = SlidingWindowRateLimiter::from_config(&config.rate_limit) {
        info!(
            max_requests = config.rate_limit.max_requests,
            window_secs = config.rate_limit.window_secs,
            "Rate limiting enabled"
        );
        builder = builder.with_rate_limiter(Arc::new(limiter));
    }

    builder
        .build()
        .map_err(|e| -> Box<dyn std::error::Error> { Box::new(e) })
}

/// Start the appropriate transport based on configuration
async fn start_transport(
    server: McpServer,
    transport_mode: TransportMode,
    http_config: HttpTransportConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match transport_mode {
        TransportMode::Stdio => {
            info!("Starting stdio transport");
            server.serve_stdio().await
        }
        TransportMode::Http => {
            info!(host = %http_config.host, port = http_config.port, "Starting HTTP transport");
            run_http_transport(server, http_config).await
        }
        TransportMode::Hybrid => {
            info!(
                host = %http_config.host,
                port = http_config.port,
                "Starting hybrid transport (stdio + HTTP)"
            );
            run_hybrid_transport(server, http_config).await
        }
    }
}

/// Run the server with HTTP transport only
async fn run_http_transport(
    server: McpServer,
    http_config: HttpTransportConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let http_transport = HttpTransport::new(http_config, Arc::new(server));
    http_transport
        .start()
        .await
        .map_err(|e| -> Box<dyn std::error::Error> { e })
}

/// Run the server with both stdio and HTTP transports simultaneously
///
/// If either transport fails, the error is logged and the other
/// continues. The function returns when both have finished.
async fn run_hybrid_transport(
    server: McpServer,
    http_config: HttpTransportConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdio_server = server.clone();
    let http_server = Arc::new(server);

    let stdio_handle = tokio::spawn(async move {
        info!("Hybrid: starting stdio transport");
        if let Err(e) = stdio_server.serve_stdio().await {
            error!(error = %e, "Hybrid: stdio transport failed");
        }
        info!("Hybrid: stdio transport finished");
    });

    let http_handle = tokio::spawn(async move {
        info!(
            "Hybrid: starting HTTP transport on {}:{}",
            http_config.host, http_config.port
        );
        let http_transport = HttpTransport::new(http_config, http_server);
        if let Err(e) = http_transport.start().await {
            error!(error = %e, "Hybrid: HTTP transport failed");
        }
        info!("Hybrid: HTTP transport finished");
    });

    let (stdio_result, http_result) = tokio::join!(stdio_handle, http_handle);

    if let Err(e) = stdio_result {
        error!(error = %e, "Hybrid: stdio transport task panicked");
    }
    if let Err(e) = http_result {
        error!(error = %e, "Hybrid: HTTP transport task panicked");
    }

    Ok(())
}
