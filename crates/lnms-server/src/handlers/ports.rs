//! Port and port group tools

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use lnms_infrastructure::{LibreNmsClient, encode_segment};
use serde_json::Value;

use super::check_args;
use crate::args::{
    MacArgs, NoArgs, PortDescriptionUpdateArgs, PortGroupAssignArgs, PortGroupNameArgs,
    PortGroupPayloadArgs, PortIdArgs, PortsListArgs, PortsSearchArgs, PortsSearchFieldArgs,
};
use crate::formatter::ResponseFormatter;

/// Handler for the ports and port groups APIs
#[derive(Clone)]
pub struct PortsHandler {
    client: Arc<LibreNmsClient>,
}

impl PortsHandler {
    pub fn new(client: Arc<LibreNmsClient>) -> Self {
        Self { client }
    }

    pub async fn ports_list(
        &self,
        Parameters(args): Parameters<PortsListArgs>,
    ) -> Result<CallToolResult, McpError> {
        let query = match args.query {
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                return Err(McpError::invalid_params(
                    format!("query must be a JSON object, got {other}"),
                    None,
                ));
            }
            None => None,
        };
        let response = self
            .client
            .get("ports", query.as_ref())
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn ports_search(
        &self,
        Parameters(args): Parameters<PortsSearchArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("ports/search/{}", encode_segment(&args.search)), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn ports_search_field(
        &self,
        Parameters(args): Parameters<PortsSearchFieldArgs>,
    ) -> Result<CallToolResult, McpError> {
        let path = format!(
            "ports/search/{}/{}",
            encode_segment(&args.field),
            encode_segment(&args.search)
        );
        let response = self
            .client
            .get(&path, None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn ports_search_mac(
        &self,
        Parameters(args): Parameters<MacArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("ports/mac/{}", args.mac), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn port_get(
        &self,
        Parameters(args): Parameters<PortIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .get(&format!("ports/{}", args.port_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn port_ip_info(
        &self,
        Parameters(args): Parameters<PortIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .get(&format!("ports/{}/ip", args.port_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn port_transceiver(
        &self,
        Parameters(args): Parameters<PortIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .get(&format!("ports/{}/transceiver", args.port_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn port_description_get(
        &self,
        Parameters(args): Parameters<PortIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .get(&format!("ports/{}/description", args.port_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn port_description_update(
        &self,
        Parameters(args): Parameters<PortDescriptionUpdateArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .patch(
                &format!("ports/{}/description", args.port_id),
                Some(&args.payload),
            )
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn port_groups_list(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("port_groups", None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn port_group_add(
        &self,
        Parameters(args): Parameters<PortGroupPayloadArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post("port_groups", Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn port_group_list_ports(
        &self,
        Parameters(args): Parameters<PortGroupNameArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("port_groups/{}", encode_segment(&args.name)), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn port_group_assign(
        &self,
        Parameters(args): Parameters<PortGroupAssignArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .post(
                &format!("port_groups/{}/assign", args.port_group_id),
                Some(&args.payload),
            )
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn port_group_remove(
        &self,
        Parameters(args): Parameters<PortGroupAssignArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .post(
                &format!("port_groups/{}/remove", args.port_group_id),
                Some(&args.payload),
            )
            .await;
        ResponseFormatter::api_response(response)
    }
}
