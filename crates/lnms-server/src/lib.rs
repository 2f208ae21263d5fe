//! # LibreNMS MCP Server
//!
//! MCP protocol server exposing the LibreNMS network monitoring API as
//! tools. The catalog covers devices, device groups, alerts (with
//! rules and templates), ports, port groups, health sensors,
//! inventory, locations, services, bills, logs, and network resources
//! (ARP, BGP, OSPF, VRF, FDB).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lnms_server::init::{RunOverrides, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Run with default config (librenms-mcp.toml + environment)
//!     run(None, RunOverrides::default()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`McpServer`] | Main server struct |
//! | [`McpServerBuilder`] | Builder for server construction |
//! | [`AccessPolicy`] | Read-only mode and tag-based tool disabling |

// Allow Rust 2024 compatibility issues from Rocket's EventStream macro
#![allow(rust_2024_compatibility)]

pub mod access;
pub mod args;
pub mod builder;
pub mod constants;
pub mod formatter;
pub mod handlers;
pub mod init;
pub mod mcp_server;
pub mod tools;
pub mod transport;

pub use access::AccessPolicy;
pub use builder::McpServerBuilder;
pub use init::run;
pub use mcp_server::McpServer;
