//! Tool catalog and routing

pub mod registry;
pub mod router;

pub use registry::{ToolSpec, catalog, create_tool_list, find_spec};
pub use router::route_tool_call;
