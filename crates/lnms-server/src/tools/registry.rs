//! Tool registry
//!
//! The complete tool catalog: one [`ToolSpec`] per LibreNMS API
//! operation, carrying the metadata the access policy needs and a
//! schema function for the MCP tool listing. The router dispatches by
//! the same names, so the two files must stay in sync; the registry
//! tests cross-check them.

use rmcp::ErrorData as McpError;
use rmcp::model::{Tool, ToolAnnotations};
use std::borrow::Cow;
use std::sync::Arc;

use lnms_domain::{TAG_ADMIN, TAG_GLOBAL_READ, TAG_LIBRENMS, TAG_READ_ONLY, ToolHints, ToolMeta};

use crate::access::AccessPolicy;
use crate::args::*;

/// One entry in the tool catalog
#[derive(Clone, Copy)]
pub struct ToolSpec {
    /// Name, description, tags, and hints
    pub meta: ToolMeta,
    schema: fn() -> schemars::Schema,
}

impl ToolSpec {
    /// Render this spec as an MCP tool definition
    pub fn to_tool(&self) -> Result<Tool, McpError> {
        let schema_value = serde_json::to_value((self.schema)())
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let input_schema = schema_value
            .as_object()
            .ok_or_else(|| {
                McpError::internal_error(
                    format!("Schema for {} is not an object", self.meta.name),
                    None,
                )
            })?
            .clone();

        Ok(Tool {
            name: Cow::Borrowed(self.meta.name),
            title: None,
            description: Some(Cow::Borrowed(self.meta.description)),
            input_schema: Arc::new(input_schema),
            output_schema: None,
            annotations: Some(ToolAnnotations {
                title: None,
                read_only_hint: Some(self.meta.hints.read_only),
                destructive_hint: Some(self.meta.hints.destructive),
                idempotent_hint: Some(self.meta.hints.idempotent),
                open_world_hint: None,
            }),
            icons: None,
            meta: Default::default(),
        })
    }
}

fn schema_of<T: schemars::JsonSchema>() -> schemars::Schema {
    schemars::schema_for!(T)
}

fn spec<T: schemars::JsonSchema>(
    name: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    hints: ToolHints,
) -> ToolSpec {
    ToolSpec {
        meta: ToolMeta {
            name,
            description,
            tags,
            hints,
        },
        schema: schema_of::<T>,
    }
}

/// The full tool catalog, grouped by API area
#[allow(clippy::too_many_lines)]
pub fn catalog() -> Vec<ToolSpec> {
    use ToolHints as H;

    vec![
        // Alerts
        spec::<AlertsListArgs>(
            "alerts_get",
            "Get alerts from LibreNMS with optional state, severity, rule, and order filters",
            &[TAG_LIBRENMS, "alert", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<AlertIdArgs>(
            "alert_get_by_id",
            "Get a specific alert from LibreNMS by ID",
            &[TAG_LIBRENMS, "alert", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<AlertAcknowledgeArgs>(
            "alert_acknowledge",
            "Acknowledge an alert in LibreNMS by ID",
            &[TAG_LIBRENMS, "alert", TAG_ADMIN],
            H::write(),
        ),
        spec::<AlertIdArgs>(
            "alert_unmute",
            "Unmute an alert in LibreNMS by ID",
            &[TAG_LIBRENMS, "alert", TAG_ADMIN],
            H::write(),
        ),
        spec::<NoArgs>(
            "alert_rules_list",
            "List all alert rules from LibreNMS",
            &[TAG_LIBRENMS, "alert-rules", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<RuleIdArgs>(
            "alert_rule_get",
            "Get details for a specific alert rule by ID",
            &[TAG_LIBRENMS, "alert-rules", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<RulePayloadArgs>(
            "alert_rule_add",
            "Add a new alert rule to LibreNMS",
            &[TAG_LIBRENMS, "alert-rules", TAG_ADMIN],
            H::create(),
        ),
        spec::<RulePayloadArgs>(
            "alert_rule_edit",
            "Edit an existing alert rule in LibreNMS",
            &[TAG_LIBRENMS, "alert-rules", TAG_ADMIN],
            H::update(),
        ),
        spec::<RuleIdArgs>(
            "alert_rule_delete",
            "Delete an alert rule from LibreNMS by ID",
            &[TAG_LIBRENMS, "alert-rules", TAG_ADMIN],
            H::update(),
        ),
        spec::<NoArgs>(
            "alert_templates_list",
            "List all alert templates from LibreNMS",
            &[TAG_LIBRENMS, "alert-templates", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<TemplateIdArgs>(
            "alert_template_get",
            "Get a specific alert template from LibreNMS by ID",
            &[TAG_LIBRENMS, "alert-templates", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<TemplatePayloadArgs>(
            "alert_template_create",
            "Create a new alert template in LibreNMS",
            &[TAG_LIBRENMS, "alert-templates"],
            H::action(),
        ),
        spec::<TemplatePayloadArgs>(
            "alert_template_edit",
            "Edit an existing alert template in LibreNMS",
            &[TAG_LIBRENMS, "alert-templates"],
            H::update(),
        ),
        spec::<TemplateIdArgs>(
            "alert_template_delete",
            "Delete an alert template from LibreNMS by ID",
            &[TAG_LIBRENMS, "alert-templates"],
            H::update(),
        ),
        // Bills
        spec::<BillsListArgs>(
            "bills_list",
            "List bills from LibreNMS with optional period, reference, and customer filters",
            &[TAG_LIBRENMS, "bills", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<BillGetArgs>(
            "bill_get",
            "Get a specific bill from LibreNMS by ID",
            &[TAG_LIBRENMS, "bills", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<BillGraphArgs>(
            "bill_graph",
            "Get bill graph image from LibreNMS",
            &[TAG_LIBRENMS, "bills", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<BillGraphArgs>(
            "bill_graph_data",
            "Get bill graph data from LibreNMS",
            &[TAG_LIBRENMS, "bills", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<BillIdArgs>(
            "bill_history",
            "Get bill history from LibreNMS",
            &[TAG_LIBRENMS, "bills", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<BillHistoryGraphArgs>(
            "bill_history_graph",
            "Get bill history graph from LibreNMS",
            &[TAG_LIBRENMS, "bills", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<BillHistoryGraphArgs>(
            "bill_history_graph_data",
            "Get bill history graph data from LibreNMS",
            &[TAG_LIBRENMS, "bills", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<BillPayloadArgs>(
            "bill_create_or_update",
            "Create or update a bill in LibreNMS",
            &[TAG_LIBRENMS, "bills", TAG_ADMIN],
            H::create(),
        ),
        spec::<BillIdArgs>(
            "bill_delete",
            "Delete a bill from LibreNMS by ID",
            &[TAG_LIBRENMS, "bills", TAG_ADMIN],
            H::update(),
        ),
        // Devices
        spec::<DevicesListArgs>(
            "devices_list",
            "List devices from LibreNMS with optional filters",
            &[TAG_LIBRENMS, "devices", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<DevicePayloadArgs>(
            "device_add",
            "Add a new device to LibreNMS",
            &[TAG_LIBRENMS, "devices", TAG_ADMIN],
            H::create(),
        ),
        spec::<HostnameArgs>(
            "device_get",
            "Get device details from LibreNMS by hostname",
            &[TAG_LIBRENMS, "devices", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<HostnameArgs>(
            "device_delete",
            "Delete a device from LibreNMS by hostname",
            &[TAG_LIBRENMS, "devices", TAG_ADMIN],
            H::update(),
        ),
        spec::<DeviceUpdateArgs>(
            "device_update",
            "Update device fields in LibreNMS",
            &[TAG_LIBRENMS, "devices", TAG_ADMIN],
            H::update(),
        ),
        spec::<DevicePortsArgs>(
            "device_ports",
            "List ports for a device from LibreNMS",
            &[TAG_LIBRENMS, "devices", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<DevicePortArgs>(
            "device_ports_get",
            "Get port info for a device by interface name",
            &[TAG_LIBRENMS, "devices", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<HostnameArgs>(
            "device_availability",
            "Get device availability from LibreNMS",
            &[TAG_LIBRENMS, "devices", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<HostnameArgs>(
            "device_outages",
            "Get device outages from LibreNMS",
            &[TAG_LIBRENMS, "devices", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<DeviceMaintenanceArgs>(
            "device_set_maintenance",
            "Set device maintenance mode in LibreNMS",
            &[TAG_LIBRENMS, "devices", TAG_ADMIN],
            H::write(),
        ),
        spec::<NoArgs>(
            "devicegroups_list",
            "List all device groups from LibreNMS",
            &[TAG_LIBRENMS, "device-groups", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<GroupPayloadArgs>(
            "devicegroup_add",
            "Add a new device group to LibreNMS",
            &[TAG_LIBRENMS, "device-groups", TAG_ADMIN],
            H::create(),
        ),
        spec::<GroupNamePayloadArgs>(
            "devicegroup_update",
            "Update a device group in LibreNMS",
            &[TAG_LIBRENMS, "device-groups", TAG_ADMIN],
            H::update(),
        ),
        spec::<GroupNameArgs>(
            "devicegroup_delete",
            "Delete a device group from LibreNMS by name",
            &[TAG_LIBRENMS, "device-groups", TAG_ADMIN],
            H::update(),
        ),
        spec::<GroupDevicesArgs>(
            "devicegroup_devices",
            "List devices in a device group from LibreNMS",
            &[TAG_LIBRENMS, "device-groups", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<GroupNamePayloadArgs>(
            "devicegroup_set_maintenance",
            "Set maintenance mode for a device group in LibreNMS",
            &[TAG_LIBRENMS, "device-groups", TAG_ADMIN],
            H::update(),
        ),
        spec::<GroupNamePayloadArgs>(
            "devicegroup_add_devices",
            "Add devices to a device group in LibreNMS",
            &[TAG_LIBRENMS, "device-groups", TAG_ADMIN],
            H::create(),
        ),
        spec::<GroupNamePayloadArgs>(
            "devicegroup_remove_devices",
            "Remove devices from a device group in LibreNMS",
            &[TAG_LIBRENMS, "device-groups", TAG_ADMIN],
            H::create(),
        ),
        spec::<HostnameArgs>(
            "device_discover",
            "Trigger device rediscovery in LibreNMS",
            &[TAG_LIBRENMS, "devices"],
            H::action(),
        ),
        spec::<DeviceRenameArgs>(
            "device_rename",
            "Rename a device in LibreNMS",
            &[TAG_LIBRENMS, "devices"],
            H::update(),
        ),
        spec::<HostnameArgs>(
            "device_maintenance_status",
            "Check if a device is currently in maintenance mode",
            &[TAG_LIBRENMS, "devices", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<HostnameArgs>(
            "device_vlans",
            "Get VLANs configured on a specific device",
            &[TAG_LIBRENMS, "devices", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<HostnameArgs>(
            "device_links",
            "Get network links for a specific device",
            &[TAG_LIBRENMS, "devices", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<DeviceEventlogArgs>(
            "device_eventlog_add",
            "Add a custom event log entry for a device",
            &[TAG_LIBRENMS, "devices"],
            H::action(),
        ),
        // Health and sensors
        spec::<HostnameArgs>(
            "health_list",
            "List available health graphs for a device",
            &[TAG_LIBRENMS, "health", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<HealthTypeArgs>(
            "health_by_type",
            "Get health data by sensor type for a device",
            &[TAG_LIBRENMS, "health", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<HealthSensorArgs>(
            "health_sensor_get",
            "Get a specific sensor by ID for a device",
            &[TAG_LIBRENMS, "health", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<NoArgs>(
            "sensors_list",
            "List all sensors across all devices",
            &[TAG_LIBRENMS, "sensors", TAG_READ_ONLY],
            H::read(),
        ),
        // Inventory
        spec::<InventoryArgs>(
            "inventory_device",
            "Get hardware inventory for a device from LibreNMS",
            &[TAG_LIBRENMS, "inventory", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<HostnameArgs>(
            "inventory_device_flat",
            "Get flattened hardware inventory for a device from LibreNMS",
            &[TAG_LIBRENMS, "inventory", TAG_READ_ONLY],
            H::read(),
        ),
        // Locations
        spec::<NoArgs>(
            "locations_list",
            "List locations from LibreNMS",
            &[TAG_LIBRENMS, "locations", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<LocationPayloadArgs>(
            "location_add",
            "Add a new location to LibreNMS",
            &[TAG_LIBRENMS, "locations", TAG_ADMIN],
            H::create(),
        ),
        spec::<LocationArgs>(
            "location_delete",
            "Delete a location from LibreNMS by identifier",
            &[TAG_LIBRENMS, "locations", TAG_ADMIN],
            H::update(),
        ),
        spec::<LocationEditArgs>(
            "location_edit",
            "Edit a location in LibreNMS",
            &[TAG_LIBRENMS, "locations", TAG_ADMIN],
            H::update(),
        ),
        spec::<LocationArgs>(
            "location_get",
            "Get a specific location from LibreNMS by identifier",
            &[TAG_LIBRENMS, "locations", TAG_READ_ONLY, TAG_ADMIN],
            H::read(),
        ),
        spec::<LocationEditArgs>(
            "location_set_maintenance",
            "Set maintenance mode for all devices in a location",
            &[TAG_LIBRENMS, "locations", TAG_ADMIN],
            H::write(),
        ),
        // Logs
        spec::<DeviceLogArgs>(
            "logs_eventlog",
            "Get event logs for a device from LibreNMS",
            &[TAG_LIBRENMS, "logs", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<DeviceLogArgs>(
            "logs_syslog",
            "Get syslogs for a device from LibreNMS",
            &[TAG_LIBRENMS, "logs", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<DeviceLogArgs>(
            "logs_alertlog",
            "Get alert logs for a device from LibreNMS",
            &[TAG_LIBRENMS, "logs", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<AuthLogArgs>(
            "logs_authlog",
            "Get authentication logs from LibreNMS",
            &[TAG_LIBRENMS, "logs", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<SyslogSinkArgs>(
            "logs_syslogsink",
            "Add a syslog entry to LibreNMS via the API sink",
            &[TAG_LIBRENMS, "logs", TAG_ADMIN],
            H::action(),
        ),
        // Network
        spec::<ArpSearchArgs>(
            "arp_search",
            "Retrieve ARP entries from LibreNMS by IP, MAC, CIDR, or \"all\"",
            &[TAG_LIBRENMS, "arp", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<BgpSessionsArgs>(
            "bgp_sessions",
            "List BGP sessions from LibreNMS with optional filters",
            &[TAG_LIBRENMS, "routing", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<BgpIdArgs>(
            "bgp_session_get",
            "Get BGP session from LibreNMS by ID",
            &[TAG_LIBRENMS, "routing", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<BgpEditArgs>(
            "bgp_session_edit",
            "Edit BGP session in LibreNMS by ID",
            &[TAG_LIBRENMS, "routing", TAG_ADMIN],
            H::update(),
        ),
        spec::<NoArgs>(
            "routing_ip_addresses",
            "List all IP addresses from LibreNMS",
            &[TAG_LIBRENMS, "routing", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<NoArgs>(
            "switching_vlans",
            "List all VLANs from LibreNMS",
            &[TAG_LIBRENMS, "switching", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<NoArgs>(
            "switching_links",
            "List all links from LibreNMS",
            &[TAG_LIBRENMS, "switching", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<MacArgs>(
            "fdb_lookup",
            "Look up a MAC address in the forwarding database",
            &[TAG_LIBRENMS, "fdb", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<NoArgs>(
            "ospf_list",
            "List all OSPF instances from LibreNMS",
            &[TAG_LIBRENMS, "routing", "ospf", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<NoArgs>(
            "ospf_ports",
            "List all OSPF ports and interfaces from LibreNMS",
            &[TAG_LIBRENMS, "routing", "ospf", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<NoArgs>(
            "vrf_list",
            "List all VRF instances from LibreNMS",
            &[TAG_LIBRENMS, "routing", "vrf", TAG_READ_ONLY],
            H::read(),
        ),
        // Pollers
        spec::<PollerGroupArgs>(
            "poller_group_get",
            "Get poller group(s) from LibreNMS",
            &[TAG_LIBRENMS, "poller-groups", TAG_READ_ONLY, TAG_ADMIN],
            H::read(),
        ),
        // Ports and port groups
        spec::<PortsListArgs>(
            "ports_list",
            "Get all ports from LibreNMS with optional filters",
            &[TAG_LIBRENMS, "ports", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<PortsSearchArgs>(
            "ports_search",
            "Search ports in LibreNMS across ifAlias, ifDescr, and ifName",
            &[TAG_LIBRENMS, "ports", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<PortsSearchFieldArgs>(
            "ports_search_field",
            "Search ports in LibreNMS by a specific field",
            &[TAG_LIBRENMS, "ports", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<MacArgs>(
            "ports_search_mac",
            "Search ports in LibreNMS by MAC address",
            &[TAG_LIBRENMS, "ports", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<PortIdArgs>(
            "port_get",
            "Get port info from LibreNMS by port ID",
            &[TAG_LIBRENMS, "ports", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<PortIdArgs>(
            "port_ip_info",
            "Get port IP info from LibreNMS by port ID",
            &[TAG_LIBRENMS, "ports", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<PortIdArgs>(
            "port_transceiver",
            "Get port transceiver info from LibreNMS by port ID",
            &[TAG_LIBRENMS, "ports", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<PortIdArgs>(
            "port_description_get",
            "Get port description from LibreNMS by port ID",
            &[TAG_LIBRENMS, "ports", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<PortDescriptionUpdateArgs>(
            "port_description_update",
            "Update port description in LibreNMS by port ID",
            &[TAG_LIBRENMS, "ports"],
            H::update(),
        ),
        spec::<NoArgs>(
            "port_groups_list",
            "List port groups from LibreNMS",
            &[TAG_LIBRENMS, "port-groups", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<PortGroupPayloadArgs>(
            "port_group_add",
            "Add a port group to LibreNMS",
            &[TAG_LIBRENMS, "port-groups", TAG_ADMIN],
            H::create(),
        ),
        spec::<PortGroupNameArgs>(
            "port_group_list_ports",
            "List ports in a port group from LibreNMS",
            &[TAG_LIBRENMS, "port-groups", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<PortGroupAssignArgs>(
            "port_group_assign",
            "Assign ports to a port group in LibreNMS",
            &[TAG_LIBRENMS, "port-groups", TAG_ADMIN],
            H::action(),
        ),
        spec::<PortGroupAssignArgs>(
            "port_group_remove",
            "Remove ports from a port group in LibreNMS",
            &[TAG_LIBRENMS, "port-groups", TAG_ADMIN],
            H::action(),
        ),
        // Services
        spec::<ServicesListArgs>(
            "services_list",
            "List all services from LibreNMS with optional filters",
            &[TAG_LIBRENMS, "services", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<ServicesForDeviceArgs>(
            "services_for_device",
            "Get services for a device from LibreNMS",
            &[TAG_LIBRENMS, "services", TAG_READ_ONLY, TAG_GLOBAL_READ],
            H::read(),
        ),
        spec::<ServiceAddArgs>(
            "service_add",
            "Add a monitored service for a device in LibreNMS",
            &[TAG_LIBRENMS, "services", TAG_ADMIN],
            H::create(),
        ),
        spec::<ServiceEditArgs>(
            "service_edit",
            "Edit a service in LibreNMS by service ID",
            &[TAG_LIBRENMS, "services", TAG_ADMIN],
            H::update(),
        ),
        spec::<ServiceIdArgs>(
            "service_delete",
            "Delete a service from LibreNMS by service ID",
            &[TAG_LIBRENMS, "services", TAG_ADMIN],
            H::update(),
        ),
        // System
        spec::<NoArgs>(
            "system_info",
            "Get system info from LibreNMS",
            &[TAG_LIBRENMS, "system", TAG_READ_ONLY],
            H::read(),
        ),
        spec::<NoArgs>(
            "ping",
            "Ping the LibreNMS API as a health check",
            &[TAG_LIBRENMS, "system", TAG_READ_ONLY],
            H::read(),
        ),
    ]
}

/// Look up a tool's metadata by name
pub fn find_spec(name: &str) -> Option<ToolSpec> {
    catalog().into_iter().find(|spec| spec.meta.name == name)
}

/// Create the tool list for the MCP `tools/list` response
///
/// Tools hidden by the access policy's disabled tags are omitted.
pub fn create_tool_list(policy: &AccessPolicy) -> Result<Vec<Tool>, McpError> {
    catalog()
        .iter()
        .filter(|spec| policy.is_listed(&spec.meta))
        .map(ToolSpec::to_tool)
        .collect()
}
