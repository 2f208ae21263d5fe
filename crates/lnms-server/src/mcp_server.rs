//! MCP server implementation
//!
//! Core MCP protocol server over the LibreNMS API. Every call passes
//! through the access policy and the optional rate limiter before it
//! reaches a handler.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolResult, ErrorCode, Implementation, ListToolsResult, PaginatedRequestParam,
    ProtocolVersion, ServerCapabilities, ServerInfo,
};
use tracing::debug;

use lnms_infrastructure::SlidingWindowRateLimiter;

use crate::access::AccessPolicy;
use crate::constants::JSONRPC_RATE_LIMITED;
use crate::handlers::ToolHandlers;
use crate::tools::{create_tool_list, find_spec, route_tool_call};

/// MCP server exposing the LibreNMS API as tools
#[derive(Clone)]
pub struct McpServer {
    handlers: ToolHandlers,
    policy: AccessPolicy,
    rate_limiter: Option<Arc<SlidingWindowRateLimiter>>,
}

impl McpServer {
    /// Create a new server with injected dependencies
    pub fn new(
        handlers: ToolHandlers,
        policy: AccessPolicy,
        rate_limiter: Option<Arc<SlidingWindowRateLimiter>>,
    ) -> Self {
        Self {
            handlers,
            policy,
            rate_limiter,
        }
    }

    /// Access to the tool handlers (for the HTTP transport)
    pub fn handlers(&self) -> &ToolHandlers {
        &self.handlers
    }

    /// Access to the access policy (for the HTTP transport)
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Gate a tool call on policy and rate limit
    pub fn check_call(&self, tool_name: &str) -> Result<(), McpError> {
        let spec = find_spec(tool_name)
            .ok_or_else(|| McpError::invalid_params(format!("Unknown tool: {tool_name}"), None))?;
        self.policy.check_call(&spec.meta)?;

        if let Some(limiter) = &self.rate_limiter
            && !limiter.try_acquire()
        {
            debug!(tool = tool_name, "Rate limit exceeded");
            return Err(McpError::new(
                ErrorCode(JSONRPC_RATE_LIMITED),
                "Rate limit exceeded, try again later",
                None,
            ));
        }
        Ok(())
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "LibreNMS MCP Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "LibreNMS MCP Server\n\n\
                 Exposes the LibreNMS network monitoring API as MCP tools:\n\
                 devices, device groups, alerts, alert rules and templates,\n\
                 ports, port groups, health sensors, inventory, locations,\n\
                 services, bills, logs, and network resources (ARP, BGP,\n\
                 OSPF, VRF, FDB).\n\n\
                 Write tools are refused when the server runs in read-only\n\
                 mode, and whole tool families can be disabled by tag.\n"
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _pagination: Option<PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = create_tool_list(&self.policy)?;
        Ok(ListToolsResult {
            tools,
            meta: Default::default(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: rmcp::model::CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.check_call(&request.name)?;
        route_tool_call(request, &self.handlers).await
    }
}
