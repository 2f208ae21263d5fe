//! Hardware inventory tools

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use lnms_infrastructure::{LibreNmsClient, Query};

use crate::args::{HostnameArgs, InventoryArgs};
use crate::formatter::ResponseFormatter;

/// Handler for the inventory API
#[derive(Clone)]
pub struct InventoryHandler {
    client: Arc<LibreNmsClient>,
}

impl InventoryHandler {
    pub fn new(client: Arc<LibreNmsClient>) -> Self {
        Self { client }
    }

    pub async fn inventory_device(
        &self,
        Parameters(args): Parameters<InventoryArgs>,
    ) -> Result<CallToolResult, McpError> {
        let mut query = Query::new();
        if let Some(class) = args.ent_physical_class {
            query.insert("entPhysicalClass".into(), class.into());
        }
        if let Some(contained_in) = args.ent_physical_contained_in {
            query.insert("entPhysicalContainedIn".into(), contained_in.into());
        }
        let query = (!query.is_empty()).then_some(&query);
        let response = self
            .client
            .get(&format!("inventory/{}", args.hostname), query)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn inventory_device_flat(
        &self,
        Parameters(args): Parameters<HostnameArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("inventory/{}/all", args.hostname), None)
            .await;
        ResponseFormatter::api_response(response)
    }
}
