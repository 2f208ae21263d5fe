//! Service monitoring tools

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use lnms_infrastructure::{LibreNmsClient, Query};

use super::check_args;
use crate::args::{
    ServiceAddArgs, ServiceEditArgs, ServiceIdArgs, ServicesForDeviceArgs, ServicesListArgs,
};
use crate::formatter::ResponseFormatter;

/// Handler for the services API
#[derive(Clone)]
pub struct ServicesHandler {
    client: Arc<LibreNmsClient>,
}

impl ServicesHandler {
    pub fn new(client: Arc<LibreNmsClient>) -> Self {
        Self { client }
    }

    pub async fn services_list(
        &self,
        Parameters(args): Parameters<ServicesListArgs>,
    ) -> Result<CallToolResult, McpError> {
        let query = service_query(args.state, args.service_type);
        let query = (!query.is_empty()).then_some(&query);
        let response = self
            .client
            .get("services", query)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn services_for_device(
        &self,
        Parameters(args): Parameters<ServicesForDeviceArgs>,
    ) -> Result<CallToolResult, McpError> {
        let query = service_query(args.state, args.service_type);
        let query = (!query.is_empty()).then_some(&query);
        let response = self
            .client
            .get(&format!("services/{}", args.hostname), query)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn service_add(
        &self,
        Parameters(args): Parameters<ServiceAddArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post(&format!("services/{}", args.hostname), Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn service_edit(
        &self,
        Parameters(args): Parameters<ServiceEditArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .patch(&format!("services/{}", args.service_id), Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn service_delete(
        &self,
        Parameters(args): Parameters<ServiceIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let response = self
            .client
            .delete(&format!("services/{}", args.service_id), None)
            .await;
        ResponseFormatter::api_response(response)
    }
}

fn service_query(state: Option<i64>, service_type: Option<String>) -> Query {
    let mut query = Query::new();
    if let Some(state) = state {
        query.insert("state".into(), state.into());
    }
    if let Some(service_type) = service_type {
        query.insert("type".into(), service_type.into());
    }
    query
}
