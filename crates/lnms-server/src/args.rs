//! Tool argument types
//!
//! Deserialization targets for MCP tool call arguments. Doc comments
//! become schema descriptions, so they are written for the MCP client,
//! not for the Rust reader. Structurally identical tools share a
//! struct.

use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

/// No arguments
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NoArgs {}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

/// Alert list filters
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct AlertsListArgs {
    /// Filter the alerts by state: 0 = ok, 1 = alert, 2 = ack
    pub state: Option<i64>,
    /// Filter the alerts by severity: ok, warning, critical
    pub severity: Option<String>,
    /// Filter alerts by alert rule ID
    pub alert_rule: Option<i64>,
    /// Output ordering, by timestamp descending unless appended with ASC or DESC
    pub order: Option<String>,
}

/// Alert selector
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct AlertIdArgs {
    /// Alert ID
    #[validate(range(min = 1))]
    pub alert_id: u64,
}

/// Alert acknowledgement
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct AlertAcknowledgeArgs {
    /// Alert ID to acknowledge
    #[validate(range(min = 1))]
    pub alert_id: u64,
    /// Note to attach to the acknowledgement
    pub note: Option<String>,
    /// If true, acknowledge until the alert clears instead of only this instance
    pub until_clear: Option<bool>,
}

/// Alert rule selector
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct RuleIdArgs {
    /// Alert rule ID
    #[validate(range(min = 1))]
    pub rule_id: u64,
}

/// Alert rule definition
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RulePayloadArgs {
    /// Alert rule payload: name, builder (rule builder JSON), devices
    /// (device IDs or [-1] for all), severity (ok, warning, critical),
    /// plus optional count, delay, interval, mute, invert, notes,
    /// disabled. Edits must include rule_id.
    pub payload: serde_json::Value,
}

/// Alert template selector
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct TemplateIdArgs {
    /// Alert template ID
    #[validate(range(min = 1))]
    pub template_id: u64,
}

/// Alert template definition
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TemplatePayloadArgs {
    /// Alert template payload: name and template (Laravel Blade body),
    /// plus optional title, title_rec, and rules (alert rule IDs).
    /// Edits must include id.
    pub payload: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Bills
// ---------------------------------------------------------------------------

/// Bill list filters
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct BillsListArgs {
    /// Set to "previous" to list previous period bills
    pub period: Option<String>,
    /// Bill reference filter
    #[serde(rename = "ref")]
    pub bill_ref: Option<String>,
    /// Customer ID filter
    pub custid: Option<String>,
}

/// Bill selector with optional period
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct BillGetArgs {
    /// Bill ID
    #[validate(range(min = 1))]
    pub bill_id: u64,
    /// Set to "previous" for the previous billing period
    pub period: Option<String>,
}

/// Bill selector
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct BillIdArgs {
    /// Bill ID
    #[validate(range(min = 1))]
    pub bill_id: u64,
}

/// Bill graph request
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct BillGraphArgs {
    /// Bill ID
    #[validate(range(min = 1))]
    pub bill_id: u64,
    /// Graph type: bits, monthly, hour, or day
    pub graph_type: String,
}

/// Bill history graph request
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct BillHistoryGraphArgs {
    /// Bill ID
    #[validate(range(min = 1))]
    pub bill_id: u64,
    /// Bill history ID
    #[validate(range(min = 1))]
    pub history_id: u64,
    /// Graph type: bits, monthly, hour, or day
    pub graph_type: String,
}

/// Bill definition
#[derive(Debug, Deserialize, JsonSchema)]
pub struct BillPayloadArgs {
    /// Bill payload: bill_name and ports (port IDs) for creation,
    /// bill_type ("quota" or "cdr") with bill_quota or bill_cdr, plus
    /// optional bill_day, bill_custid, bill_ref, bill_notes. Updates
    /// include bill_id.
    pub payload: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Devices and device groups
// ---------------------------------------------------------------------------

/// Device list filters
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct DevicesListArgs {
    /// Query parameters for filtering devices, e.g.
    /// {"type": "hostname", "query": "router"} or {"type": "down"}.
    /// Valid type values include: all, active, ignored, up, down,
    /// disabled, os, mac, ipv4, ipv6, location, location_id, hostname,
    /// sysName, display, device_id, type, serial, version, hardware,
    /// features. Can also carry "limit" and "order".
    pub query: Option<serde_json::Value>,
}

/// Device selector
#[derive(Debug, Deserialize, JsonSchema)]
pub struct HostnameArgs {
    /// Device hostname or ID
    pub hostname: String,
}

/// Device creation
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DevicePayloadArgs {
    /// Device add payload: hostname (required) plus SNMP settings
    /// (version, community, v3 credentials, port, transport),
    /// poller_group, force_add, ping_fallback.
    pub payload: serde_json::Value,
}

/// Device field update
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeviceUpdateArgs {
    /// Device hostname or ID
    pub hostname: String,
    /// Patchable device fields: notes, purpose, override_sysLocation,
    /// location_id, poller_group, ignore, disabled, snmp_disable,
    /// display, type
    pub payload: serde_json::Value,
}

/// Device port listing
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DevicePortsArgs {
    /// Device hostname or ID
    pub hostname: String,
    /// Comma-separated list of columns to return (e.g. "port_id,ifName,ifOperStatus")
    pub columns: Option<String>,
}

/// Device port by interface name
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DevicePortArgs {
    /// Device hostname or ID
    pub hostname: String,
    /// Interface name
    pub ifname: String,
}

/// Device maintenance window
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeviceMaintenanceArgs {
    /// Device hostname or ID
    pub hostname: String,
    /// Maintenance payload: duration in "H:i" format (required), plus
    /// optional title, notes, and start ("Y-m-d H:i:00", default now)
    pub payload: serde_json::Value,
}

/// Device rename
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeviceRenameArgs {
    /// Current device hostname or ID
    pub hostname: String,
    /// New hostname for the device
    pub new_hostname: String,
}

/// Device event log entry
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeviceEventlogArgs {
    /// Device hostname or ID
    pub hostname: String,
    /// Event log entry: text (required), plus optional type and severity (1-5)
    pub payload: serde_json::Value,
}

/// Device group selector
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GroupNameArgs {
    /// Device group name
    pub name: String,
}

/// Device group definition
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GroupPayloadArgs {
    /// Device group payload: name, type ("static" or "dynamic"),
    /// optional desc, rules (for dynamic groups) or devices (device IDs
    /// for static groups)
    pub payload: serde_json::Value,
}

/// Device group update or membership change
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GroupNamePayloadArgs {
    /// Device group name
    pub name: String,
    /// Payload for the operation; membership changes use
    /// {"devices": [1, 2, 3]}, maintenance uses duration/title/notes/start
    pub payload: serde_json::Value,
}

/// Device group member listing
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GroupDevicesArgs {
    /// Device group name
    pub name: String,
    /// Set to true to get complete device data instead of just IDs
    pub full: Option<bool>,
}

// ---------------------------------------------------------------------------
// Health and sensors
// ---------------------------------------------------------------------------

/// Device sensor class request
#[derive(Debug, Deserialize, JsonSchema)]
pub struct HealthTypeArgs {
    /// Device hostname or ID
    pub hostname: String,
    /// Sensor type (e.g. temperature, voltage, fanspeed)
    #[serde(rename = "type")]
    pub sensor_type: String,
}

/// Specific sensor request
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct HealthSensorArgs {
    /// Device hostname or ID
    pub hostname: String,
    /// Sensor type (e.g. temperature, voltage, fanspeed)
    #[serde(rename = "type")]
    pub sensor_type: String,
    /// Sensor ID
    #[validate(range(min = 1))]
    pub sensor_id: u64,
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

/// Device inventory filters
#[derive(Debug, Deserialize, JsonSchema)]
pub struct InventoryArgs {
    /// Device hostname or ID
    pub hostname: String,
    /// Filter by entity physical class (chassis, module, port, powerSupply, fan, sensor)
    pub ent_physical_class: Option<String>,
    /// Filter by parent entity index
    pub ent_physical_contained_in: Option<i64>,
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// Location selector
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LocationArgs {
    /// Location identifier or name
    pub location: String,
}

/// Location creation
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LocationPayloadArgs {
    /// Location payload: location (name), lat and lng in decimal
    /// degrees, optional fixed_coordinates (0 = update from device, 1 = fixed)
    pub payload: serde_json::Value,
}

/// Location update or maintenance
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LocationEditArgs {
    /// Location identifier or name
    pub location: String,
    /// Fields to update (lat, lng) or a maintenance payload with duration
    pub payload: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Logs
// ---------------------------------------------------------------------------

/// Per-device log query
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeviceLogArgs {
    /// Device hostname or ID
    pub hostname: String,
    /// Page number for pagination
    pub start: Option<u64>,
    /// Maximum number of results to return
    pub limit: Option<u64>,
    /// Start timestamp filter (Unix timestamp or datetime string)
    pub from_ts: Option<String>,
    /// End timestamp filter (Unix timestamp or datetime string)
    pub to_ts: Option<String>,
    /// Sort order: ASC or DESC
    pub sortorder: Option<String>,
}

/// Authentication log query
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct AuthLogArgs {
    /// Page number for pagination
    pub start: Option<u64>,
    /// Maximum number of results to return
    pub limit: Option<u64>,
    /// Start timestamp filter (Unix timestamp or datetime string)
    pub from_ts: Option<String>,
    /// End timestamp filter (Unix timestamp or datetime string)
    pub to_ts: Option<String>,
    /// Sort order: ASC or DESC
    pub sortorder: Option<String>,
}

/// Syslog ingestion
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SyslogSinkArgs {
    /// JSON syslog message(s) to ingest; a single object or an array of objects
    pub payload: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// ARP table search
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ArpSearchArgs {
    /// IP address, MAC address, CIDR notation, or "all"
    pub query: String,
}

/// BGP session filters
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct BgpSessionsArgs {
    /// Filter by device hostname
    pub hostname: Option<String>,
    /// Filter by local ASN
    pub asn: Option<i64>,
    /// Filter by remote ASN
    pub remote_asn: Option<i64>,
    /// Filter by remote IP address
    pub remote_address: Option<String>,
    /// Filter by local IP address
    pub local_address: Option<String>,
    /// Filter by BGP description (SQL LIKE)
    pub bgp_descr: Option<String>,
    /// Filter by BGP state (e.g. established)
    pub bgp_state: Option<String>,
    /// Filter by admin state (start, stop, running)
    pub bgp_adminstate: Option<String>,
    /// Filter by address family: 4 (IPv4) or 6 (IPv6)
    pub bgp_family: Option<i64>,
}

/// BGP session selector
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct BgpIdArgs {
    /// BGP session ID
    #[validate(range(min = 1))]
    pub bgp_id: u64,
}

/// BGP session update
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct BgpEditArgs {
    /// BGP session ID
    #[validate(range(min = 1))]
    pub bgp_id: u64,
    /// BGP fields to update, e.g. {"bgp_descr": "description"}
    pub payload: serde_json::Value,
}

/// MAC address lookup
#[derive(Debug, Deserialize, JsonSchema)]
pub struct MacArgs {
    /// MAC address in any common format (aa:bb:cc:dd:ee:ff, aabb.ccdd.eeff, aabbccddeeff)
    pub mac: String,
}

// ---------------------------------------------------------------------------
// Pollers
// ---------------------------------------------------------------------------

/// Poller group selector
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PollerGroupArgs {
    /// Poller group identifier or "all"
    pub poller_group: String,
}

// ---------------------------------------------------------------------------
// Ports and port groups
// ---------------------------------------------------------------------------

/// Port list filters
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct PortsListArgs {
    /// Query parameters for filtering ports: columns (comma-separated
    /// fields), device_id, limit
    pub query: Option<serde_json::Value>,
}

/// Free-text port search
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PortsSearchArgs {
    /// Search term matched against ifAlias, ifDescr, and ifName
    pub search: String,
}

/// Field-scoped port search
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PortsSearchFieldArgs {
    /// Field to search: ifAlias, ifDescr, ifName, ifType, etc.
    pub field: String,
    /// Search term
    pub search: String,
}

/// Port selector
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct PortIdArgs {
    /// Port ID
    #[validate(range(min = 1))]
    pub port_id: u64,
}

/// Port description update
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct PortDescriptionUpdateArgs {
    /// Port ID
    #[validate(range(min = 1))]
    pub port_id: u64,
    /// New description as {"description": "..."}
    pub payload: serde_json::Value,
}

/// Port group selector
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PortGroupNameArgs {
    /// Port group name
    pub name: String,
}

/// Port group creation
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PortGroupPayloadArgs {
    /// Port group payload: name (required), optional desc
    pub payload: serde_json::Value,
}

/// Port group membership change
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct PortGroupAssignArgs {
    /// Port group ID
    #[validate(range(min = 1))]
    pub port_group_id: u64,
    /// Port IDs as {"port_ids": [1, 2, 3]}
    pub payload: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// Service list filters
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ServicesListArgs {
    /// Filter by state: 0 = Ok, 1 = Warning, 2 = Critical
    pub state: Option<i64>,
    /// Filter by service type (SQL LIKE pattern)
    #[serde(rename = "type")]
    pub service_type: Option<String>,
}

/// Per-device service list filters
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ServicesForDeviceArgs {
    /// Device hostname or ID
    pub hostname: String,
    /// Filter by state: 0 = Ok, 1 = Warning, 2 = Critical
    pub state: Option<i64>,
    /// Filter by service type (SQL LIKE pattern)
    #[serde(rename = "type")]
    pub service_type: Option<String>,
}

/// Service creation
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ServiceAddArgs {
    /// Device hostname or ID
    pub hostname: String,
    /// Service payload: type (http, dns, ping, ...), optional ip, desc,
    /// param, ignore
    pub payload: serde_json::Value,
}

/// Service selector
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct ServiceIdArgs {
    /// Service ID
    #[validate(range(min = 1))]
    pub service_id: u64,
}

/// Service update
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct ServiceEditArgs {
    /// Service ID
    #[validate(range(min = 1))]
    pub service_id: u64,
    /// Patchable fields: service_ip, service_desc, service_param,
    /// service_disabled, service_ignore
    pub payload: serde_json::Value,
}
