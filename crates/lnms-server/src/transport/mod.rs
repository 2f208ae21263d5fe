//! MCP transport layer
//!
//! | Transport | Description | Use Case |
//! |-----------|-------------|----------|
//! | [`stdio`] | Standard I/O streams | Desktop MCP clients |
//! | [`http`] | HTTP server with SSE | Web clients, automation |
//!
//! The hybrid mode in [`crate::init`] runs both at once.

pub mod http;
pub mod stdio;
pub mod types;

pub use http::{HttpTransport, HttpTransportConfig};
pub use stdio::StdioServerExt;
pub use types::{McpError, McpRequest, McpResponse};

// TransportMode lives in the config layer so files and env vars can set it
pub use lnms_infrastructure::config::TransportMode;
