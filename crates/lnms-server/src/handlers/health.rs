//! Health and sensor tools

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use lnms_infrastructure::{LibreNmsClient, encode_segment};

use super::check_args;
use crate::args::{HealthSensorArgs, HealthTypeArgs, HostnameArgs, NoArgs};
use crate::formatter::ResponseFormatter;

/// Handler for the device health API
#[derive(Clone)]
pub struct HealthHandler {
    client: Arc<LibreNmsClient>,
}

impl HealthHandler {
    pub fn new(client: Arc<LibreNmsClient>) -> Self {
        Self { client }
    }

    pub async fn health_list(
        &self,
        Parameters(args): Parameters<HostnameArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("devices/{}/health", args.hostname), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn health_by_type(
        &self,
        Parameters(args): Parameters<HealthTypeArgs>,
    ) -> Result<CallToolResult, McpError> {
        let path = format!(
            "devices/{}/health/{}",
            args.hostname,
            encode_segment(&args.sensor_type)
        );
        let response = self
            .client
            .get(&path, None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn health_sensor_get(
        &self,
        Parameters(args): Parameters<HealthSensorArgs>,
    ) -> Result<CallToolResult, McpError> {
        check_args(&args)?;
        let path = format!(
            "devices/{}/health/{}/{}",
            args.hostname,
            encode_segment(&args.sensor_type),
            args.sensor_id
        );
        let response = self
            .client
            .get(&path, None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn sensors_list(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("resources/sensors", None)
            .await;
        ResponseFormatter::api_response(response)
    }
}
