//! Unit test suite for lnms-infrastructure
//!
//! Run with: `cargo test -p lnms-infrastructure --test unit`

#[path = "unit/client_tests.rs"]
mod client_tests;

#[path = "unit/config_tests.rs"]
mod config_tests;

#[path = "unit/logging_tests.rs"]
mod logging_tests;
