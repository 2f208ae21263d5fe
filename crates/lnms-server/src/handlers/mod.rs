//! Tool handlers, one module per LibreNMS API area
//!
//! Each handler owns a shared API client and exposes one async method
//! per tool. The router dispatches to them by tool name; the HTTP
//! transport reuses the same handlers for its JSON-RPC surface.

mod alerts;
mod bills;
mod devices;
mod health;
mod inventory;
mod locations;
mod logs;
mod network;
mod pollers;
mod ports;
mod services;
mod system;

pub use alerts::AlertsHandler;
pub use bills::BillsHandler;
pub use devices::DevicesHandler;
pub use health::HealthHandler;
pub use inventory::InventoryHandler;
pub use locations::LocationsHandler;
pub use logs::LogsHandler;
pub use network::NetworkHandler;
pub use pollers::PollersHandler;
pub use ports::PortsHandler;
pub use services::ServicesHandler;
pub use system::SystemHandler;

use lnms_infrastructure::LibreNmsClient;
use rmcp::ErrorData as McpError;
use std::sync::Arc;
use validator::Validate;

/// Run validator checks on tool arguments
pub(crate) fn check_args(args: &impl Validate) -> Result<(), McpError> {
    args.validate()
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// All tool handlers over one shared API client
#[derive(Clone)]
pub struct ToolHandlers {
    pub alerts: AlertsHandler,
    pub bills: BillsHandler,
    pub devices: DevicesHandler,
    pub health: HealthHandler,
    pub inventory: InventoryHandler,
    pub locations: LocationsHandler,
    pub logs: LogsHandler,
    pub network: NetworkHandler,
    pub pollers: PollersHandler,
    pub ports: PortsHandler,
    pub services: ServicesHandler,
    pub system: SystemHandler,
}

impl ToolHandlers {
    pub fn new(client: Arc<LibreNmsClient>) -> Self {
        Self {
            alerts: AlertsHandler::new(client.clone()),
            bills: BillsHandler::new(client.clone()),
            devices: DevicesHandler::new(client.clone()),
            health: HealthHandler::new(client.clone()),
            inventory: InventoryHandler::new(client.clone()),
            locations: LocationsHandler::new(client.clone()),
            logs: LogsHandler::new(client.clone()),
            network: NetworkHandler::new(client.clone()),
            pollers: PollersHandler::new(client.clone()),
            ports: PortsHandler::new(client.clone()),
            services: ServicesHandler::new(client.clone()),
            system: SystemHandler::new(client),
        }
    }
}
