//! System info and health check tools

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use lnms_infrastructure::LibreNmsClient;

use crate::args::NoArgs;
use crate::formatter::ResponseFormatter;

/// Handler for the system API
#[derive(Clone)]
pub struct SystemHandler {
    client: Arc<LibreNmsClient>,
}

impl SystemHandler {
    pub fn new(client: Arc<LibreNmsClient>) -> Self {
        Self { client }
    }

    pub async fn system_info(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("system", None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn ping(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("ping", None)
            .await;
        ResponseFormatter::api_response(response)
    }
}
