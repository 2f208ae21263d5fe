//! Device and device group tools
//!
//! The largest handler. Covers device CRUD, per-device resources
//! (ports, availability, outages, VLANs, links), maintenance windows,
//! and device group membership.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

use lnms_infrastructure::{LibreNmsClient, Query, encode_segment};
use serde_json::{Value, json};

use crate::args::{
    DeviceEventlogArgs, DeviceMaintenanceArgs, DevicePayloadArgs, DevicePortArgs, DevicePortsArgs,
    DeviceRenameArgs, DeviceUpdateArgs, DevicesListArgs, GroupDevicesArgs, GroupNameArgs,
    GroupNamePayloadArgs, GroupPayloadArgs, HostnameArgs, NoArgs,
};
use crate::formatter::ResponseFormatter;

/// Handler for the device and device group APIs
#[derive(Clone)]
pub struct DevicesHandler {
    client: Arc<LibreNmsClient>,
}

impl DevicesHandler {
    pub fn new(client: Arc<LibreNmsClient>) -> Self {
        Self { client }
    }

    pub async fn devices_list(
        &self,
        Parameters(args): Parameters<DevicesListArgs>,
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
            .get("devices", query.as_ref())
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_add(
        &self,
        Parameters(args): Parameters<DevicePayloadArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post("devices", Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_get(
        &self,
        Parameters(args): Parameters<HostnameArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("devices/{}", args.hostname), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_delete(
        &self,
        Parameters(args): Parameters<HostnameArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .delete(&format!("devices/{}", args.hostname), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    /// The device PATCH endpoint takes `field`/`data` keys, as scalars
    /// for a single field and parallel arrays for several.
    pub async fn device_update(
        &self,
        Parameters(args): Parameters<DeviceUpdateArgs>,
    ) -> Result<CallToolResult, McpError> {
        let Value::Object(fields) = args.payload else {
            return Err(McpError::invalid_params(
                "payload must be a JSON object of device fields",
                None,
            ));
        };
        if fields.is_empty() {
            return Err(McpError::invalid_params(
                "payload must contain at least one field to update",
                None,
            ));
        }
        let body = if fields.len() == 1 {
            let (field, data) = fields
                .into_iter()
                .next()
                .unwrap_or((String::new(), Value::Null));
            json!({"field": field, "data": data})
        } else {
            let (names, values): (Vec<String>, Vec<Value>) = fields.into_iter().unzip();
            json!({"field": names, "data": values})
        };
        let response = self
            .client
            .patch(&format!("devices/{}", args.hostname), Some(&body))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_ports(
        &self,
        Parameters(args): Parameters<DevicePortsArgs>,
    ) -> Result<CallToolResult, McpError> {
        let mut query = Query::new();
        if let Some(columns) = args.columns {
            query.insert("columns".into(), columns.into());
        }
        let query = (!query.is_empty()).then_some(&query);
        let response = self
            .client
            .get(&format!("devices/{}/ports", args.hostname), query)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_ports_get(
        &self,
        Parameters(args): Parameters<DevicePortArgs>,
    ) -> Result<CallToolResult, McpError> {
        // interface names routinely contain slashes
        let path = format!(
            "devices/{}/ports/{}",
            args.hostname,
            encode_segment(&args.ifname)
        );
        let response = self
            .client
            .get(&path, None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_availability(
        &self,
        Parameters(args): Parameters<HostnameArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("devices/{}/availability", args.hostname), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_outages(
        &self,
        Parameters(args): Parameters<HostnameArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("devices/{}/outages", args.hostname), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_set_maintenance(
        &self,
        Parameters(args): Parameters<DeviceMaintenanceArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post(
                &format!("devices/{}/maintenance", args.hostname),
                Some(&args.payload),
            )
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn devicegroups_list(
        &self,
        Parameters(_args): Parameters<NoArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get("devicegroups", None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn devicegroup_add(
        &self,
        Parameters(args): Parameters<GroupPayloadArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post("devicegroups", Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn devicegroup_update(
        &self,
        Parameters(args): Parameters<GroupNamePayloadArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .patch(&format!("devicegroups/{}", args.name), Some(&args.payload))
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn devicegroup_delete(
        &self,
        Parameters(args): Parameters<GroupNameArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .delete(&format!("devicegroups/{}", args.name), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn devicegroup_devices(
        &self,
        Parameters(args): Parameters<GroupDevicesArgs>,
    ) -> Result<CallToolResult, McpError> {
        let mut query = Query::new();
        if args.full == Some(true) {
            query.insert("full".into(), 1.into());
        }
        let query = (!query.is_empty()).then_some(&query);
        let response = self
            .client
            .get(&format!("devicegroups/{}", args.name), query)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn devicegroup_set_maintenance(
        &self,
        Parameters(args): Parameters<GroupNamePayloadArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post(
                &format!("devicegroups/{}/maintenance", args.name),
                Some(&args.payload),
            )
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn devicegroup_add_devices(
        &self,
        Parameters(args): Parameters<GroupNamePayloadArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post(
                &format!("devicegroups/{}/devices", args.name),
                Some(&args.payload),
            )
            .await;
        ResponseFormatter::api_response(response)
    }

    /// Membership removal is a DELETE that carries a JSON body
    pub async fn devicegroup_remove_devices(
        &self,
        Parameters(args): Parameters<GroupNamePayloadArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .delete(
                &format!("devicegroups/{}/devices", args.name),
                Some(&args.payload),
            )
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_discover(
        &self,
        Parameters(args): Parameters<HostnameArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("devices/{}/discover", args.hostname), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_rename(
        &self,
        Parameters(args): Parameters<DeviceRenameArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .patch(
                &format!("devices/{}/rename/{}", args.hostname, args.new_hostname),
                None,
            )
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_maintenance_status(
        &self,
        Parameters(args): Parameters<HostnameArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("devices/{}/maintenance", args.hostname), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_vlans(
        &self,
        Parameters(args): Parameters<HostnameArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("devices/{}/vlans", args.hostname), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_links(
        &self,
        Parameters(args): Parameters<HostnameArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .get(&format!("devices/{}/links", args.hostname), None)
            .await;
        ResponseFormatter::api_response(response)
    }

    pub async fn device_eventlog_add(
        &self,
        Parameters(args): Parameters<DeviceEventlogArgs>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .post(
                &format!("devices/{}/eventlog", args.hostname),
                Some(&args.payload),
            )
            .await;
        ResponseFormatter::api_response(response)
    }
}
