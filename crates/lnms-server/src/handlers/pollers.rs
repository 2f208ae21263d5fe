//! Poller group tools

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use lnms_infrastructure::LibreNmsClient;

use crate::args::PollerGroupArgs;
use crate::formatter::ResponseFormatter;

/// Handler for the poller API
#[derive(Clone)]
pub struct PollersHandler {
    client: Arc<LibreNmsClient>,
}

impl PollersHandler {
    pub fn new(client: Arc<LibreNmsClient>) -> Self {
        Self { client }
    }

    /// `poller_group` is an ID or the literal "all"
    pub async fn poller_group_get(
        &self,
        Parameters(args): Parameters<PollerGroupArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("poller_group/{}", args.poller_group), None)
            .await;
        ResponseFormatter::api_response(response)
    }
}
