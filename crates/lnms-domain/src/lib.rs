//! # LibreNMS MCP Domain Layer
//!
//! Core types shared by the infrastructure and server layers:
//! the error taxonomy and the tool metadata value objects
//! (tags and MCP behavior hints).
//!
//! This crate is deliberately free of I/O and protocol dependencies.

pub mod error;
pub mod tool;

pub use error::{Error, Result};
pub use tool::{TAG_ADMIN, TAG_GLOBAL_READ, TAG_LIBRENMS, TAG_READ_ONLY, ToolHints, ToolMeta};
