//! Location tools
//!
//! Location names go into the URL path, so they are always
//! percent-encoded. Note the API asymmetry: listing is under
//! `resources/locations`, single lookup under `location/{name}`.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use lnms_infrastructure::{LibreNmsClient, encode_segment};

use crate::args::{LocationArgs, LocationEditArgs, LocationPayloadArgs, NoArgs};
use crate::formatter::ResponseFormatter;

/// Handler for the locations API
#[derive(Clone)]
pub struct LocationsHandler {
    client: Arc<LibreNmsClient>,
}

impl LocationsHandler {
    pub fn new(client: Arc<LibreNmsClient>) -> Self {
        Self { client }
    }

    pub async fn locations_list(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("resources/locations", None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn location_add(
        &self,
        Parameters(args): Parameters<LocationPayloadArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post("locations", Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn location_delete(
        &self,
        Parameters(args): Parameters<LocationArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .delete(&format!("locations/{}", encode_segment(&args.location)), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn location_edit(
        &self,
        Parameters(args): Parameters<LocationEditArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .patch(
                &format!("locations/{}", encode_segment(&args.location)),
                Some(&args.payload),
            )
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn location_get(
        &self,
        Parameters(args): Parameters<LocationArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("location/{}", encode_segment(&args.location)), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn location_set_maintenance(
        &self,
        Parameters(args): Parameters<LocationEditArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post(
                &format!("locations/{}/maintenance", encode_segment(&args.location)),
                Some(&args.payload),
            )
            .await;
        ResponseFormatter::api_response(response)
    }
}
