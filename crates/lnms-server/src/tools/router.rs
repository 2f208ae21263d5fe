//! Tool call routing
//!
//! Dispatches a parsed MCP tool call to the matching handler method.
//! Argument types are inferred from the handler signatures, so adding
//! a tool here without a registry entry (or vice versa) is caught by
//! the registry tests.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolRequestParam, CallToolResult};

use crate::handlers::ToolHandlers;

/// Route a tool call request to the appropriate handler
pub async fn route_tool_call(
    request: CallToolRequestParam,
    h: &ToolHandlers,
) -> Result<CallToolResult, McpError> {
    match request.name.as_ref() {
        // Alerts
        "alerts_get" => h.alerts.alerts_get(parse_args(&request)?).await,
        "alert_get_by_id" => h.alerts.alert_get_by_id(parse_args(&request)?).await,
        "alert_acknowledge" => h.alerts.alert_acknowledge(parse_args(&request)?).await,
        "alert_unmute" => h.alerts.alert_unmute(parse_args(&request)?).await,
        "alert_rules_list" => h.alerts.alert_rules_list(parse_args(&request)?).await,
        "alert_rule_get" => h.alerts.alert_rule_get(parse_args(&request)?).await,
        "alert_rule_add" => h.alerts.alert_rule_add(parse_args(&request)?).await,
        "alert_rule_edit" => h.alerts.alert_rule_edit(parse_args(&request)?).await,
        "alert_rule_delete" => h.alerts.alert_rule_delete(parse_args(&request)?).await,
        "alert_templates_list" => h.alerts.alert_templates_list(parse_args(&request)?).await,
        "alert_template_get" => h.alerts.alert_template_get(parse_args(&request)?).await,
        "alert_template_create" => h.alerts.alert_template_create(parse_args(&request)?).await,
        "alert_template_edit" => h.alerts.alert_template_edit(parse_args(&request)?).await,
        "alert_template_delete" => h.alerts.alert_template_delete(parse_args(&request)?).await,
        // Bills
        "bills_list" => h.bills.bills_list(parse_args(&request)?).await,
        "bill_get" => h.bills.bill_get(parse_args(&request)?).await,
        "bill_graph" => h.bills.bill_graph(parse_args(&request)?).await,
        "bill_graph_data" => h.bills.bill_graph_data(parse_args(&request)?).await,
        "bill_history" => h.bills.bill_history(parse_args(&request)?).await,
        "bill_history_graph" => h.bills.bill_history_graph(parse_args(&request)?).await,
        "bill_history_graph_data" => h.bills.bill_history_graph_data(parse_args(&request)?).await,
        "bill_create_or_update" => h.bills.bill_create_or_update(parse_args(&request)?).await,
        "bill_delete" => h.bills.bill_delete(parse_args(&request)?).await,
        // Devices and device groups
        "devices_list" => h.devices.devices_list(parse_args(&request)?).await,
        "device_add" => h.devices.device_add(parse_args(&request)?).await,
        "device_get" => h.devices.device_get(parse_args(&request)?).await,
        "device_delete" => h.devices.device_delete(parse_args(&request)?).await,
        "device_update" => h.devices.device_update(parse_args(&request)?).await,
        "device_ports" => h.devices.device_ports(parse_args(&request)?).await,
        "device_ports_get" => h.devices.device_ports_get(parse_args(&request)?).await,
        "device_availability" => h.devices.device_availability(parse_args(&request)?).await,
        "device_outages" => h.devices.device_outages(parse_args(&request)?).await,
        "device_set_maintenance" => h.devices.device_set_maintenance(parse_args(&request)?).await,
        "devicegroups_list" => h.devices.devicegroups_list(parse_args(&request)?).await,
        "devicegroup_add" => h.devices.devicegroup_add(parse_args(&request)?).await,
        "devicegroup_update" => h.devices.devicegroup_update(parse_args(&request)?).await,
        "devicegroup_delete" => h.devices.devicegroup_delete(parse_args(&request)?).await,
        "devicegroup_devices" => h.devices.devicegroup_devices(parse_args(&request)?).await,
        "devicegroup_set_maintenance" => {
            h.devices
                .devicegroup_set_maintenance(parse_args(&request)?)
                .await
        }
        "devicegroup_add_devices" => {
            h.devices.devicegroup_add_devices(parse_args(&request)?).await
        }
        "devicegroup_remove_devices" => {
            h.devices
                .devicegroup_remove_devices(parse_args(&request)?)
                .await
        }
        "device_discover" => h.devices.device_discover(parse_args(&request)?).await,
        "device_rename" => h.devices.device_rename(parse_args(&request)?).await,
        "device_maintenance_status" => {
            h.devices
                .device_maintenance_status(parse_args(&request)?)
                .await
        }
        "device_vlans" => h.devices.device_vlans(parse_args(&request)?).await,
        "device_links" => h.devices.device_links(parse_args(&request)?).await,
        "device_eventlog_add" => h.devices.device_eventlog_add(parse_args(&request)?).await,
        // Health and sensors
        "health_list" => h.health.health_list(parse_args(&request)?).await,
        "health_by_type" => h.health.health_by_type(parse_args(&request)?).await,
        "health_sensor_get" => h.health.health_sensor_get(parse_args(&request)?).await,
        "sensors_list" => h.health.sensors_list(parse_args(&request)?).await,
        // Inventory
        "inventory_device" => h.inventory.inventory_device(parse_args(&request)?).await,
        "inventory_device_flat" => h.inventory.inventory_device_flat(parse_args(&request)?).await,
        // Locations
        "locations_list" => h.locations.locations_list(parse_args(&request)?).await,
        "location_add" => h.locations.location_add(parse_args(&request)?).await,
        "location_delete" => h.locations.location_delete(parse_args(&request)?).await,
        "location_edit" => h.locations.location_edit(parse_args(&request)?).await,
        "location_get" => h.locations.location_get(parse_args(&request)?).await,
        "location_set_maintenance" => {
            h.locations
                .location_set_maintenance(parse_args(&request)?)
                .await
        }
        // Logs
        "logs_eventlog" => h.logs.logs_eventlog(parse_args(&request)?).await,
        "logs_syslog" => h.logs.logs_syslog(parse_args(&request)?).await,
        "logs_alertlog" => h.logs.logs_alertlog(parse_args(&request)?).await,
        "logs_authlog" => h.logs.logs_authlog(parse_args(&request)?).await,
        "logs_syslogsink" => h.logs.logs_syslogsink(parse_args(&request)?).await,
        // Network
        "arp_search" => h.network.arp_search(parse_args(&request)?).await,
        "bgp_sessions" => h.network.bgp_sessions(parse_args(&request)?).await,
        "bgp_session_get" => h.network.bgp_session_get(parse_args(&request)?).await,
        "bgp_session_edit" => h.network.bgp_session_edit(parse_args(&request)?).await,
        "routing_ip_addresses" => h.network.routing_ip_addresses(parse_args(&request)?).await,
        "switching_vlans" => h.network.switching_vlans(parse_args(&request)?).await,
        "switching_links" => h.network.switching_links(parse_args(&request)?).await,
        "fdb_lookup" => h.network.fdb_lookup(parse_args(&request)?).await,
        "ospf_list" => h.network.ospf_list(parse_args(&request)?).await,
        "ospf_ports" => h.network.ospf_ports(parse_args(&request)?).await,
        "vrf_list" => h.network.vrf_list(parse_args(&request)?).await,
        // Pollers
        "poller_group_get" => h.pollers.poller_group_get(parse_args(&request)?).await,
        // Ports and port groups
        "ports_list" => h.ports.ports_list(parse_args(&request)?).await,
        "ports_search" => h.ports.ports_search(parse_args(&request)?).await,
        "ports_search_field" => h.ports.ports_search_field(parse_args(&request)?).await,
        "ports_search_mac" => h.ports.ports_search_mac(parse_args(&request)?).await,
        "port_get" => h.ports.port_get(parse_args(&request)?).await,
        "port_ip_info" => h.ports.port_ip_info(parse_args(&request)?).await,
        "port_transceiver" => h.ports.port_transceiver(parse_args(&request)?).await,
        "port_description_get" => h.ports.port_description_get(parse_args(&request)?).await,
        "port_description_update" => h.ports.port_description_update(parse_args(&request)?).await,
        "port_groups_list" => h.ports.port_groups_list(parse_args(&request)?).await,
        "port_group_add" => h.ports.port_group_add(parse_args(&request)?).await,
        "port_group_list_ports" => h.ports.port_group_list_ports(parse_args(&request)?).await,
        "port_group_assign" => h.ports.port_group_assign(parse_args(&request)?).await,
        "port_group_remove" => h.ports.port_group_remove(parse_args(&request)?).await,
        // Services
        "services_list" => h.services.services_list(parse_args(&request)?).await,
        "services_for_device" => h.services.services_for_device(parse_args(&request)?).await,
        "service_add" => h.services.service_add(parse_args(&request)?).await,
        "service_edit" => h.services.service_edit(parse_args(&request)?).await,
        "service_delete" => h.services.service_delete(parse_args(&request)?).await,
        // System
        "system_info" => h.system.system_info(parse_args(&request)?).await,
        "ping" => h.system.ping(parse_args(&request)?).await,
        _ => Err(McpError::invalid_params(
            format!("Unknown tool: {}", request.name),
            None,
        )),
    }
}

/// Parse request arguments into the expected handler parameter type
fn parse_args<T: serde::de::DeserializeOwned>(
    request: &CallToolRequestParam,
) -> Result<Parameters<T>, McpError> {
    let args_value = serde_json::Value::Object(request.arguments.clone().unwrap_or_default());
    let args = serde_json::from_value(args_value)
        .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))?;
    Ok(Parameters(args))
}
