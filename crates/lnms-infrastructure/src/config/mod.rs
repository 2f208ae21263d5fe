//! Configuration types and loading
//!
//! All configuration lives in [`AppConfig`], merged from serialized
//! defaults, an optional TOML file, and prefixed environment
//! variables.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccessConfig, AppConfig, LibreNmsConfig, LoggingConfig, RateLimitConfig, ServerConfig,
    TelemetryConfig, TransportMode,
};
