//! Unit test harness
//!
//! Aggregates the unit test modules under `tests/unit/`.

#[path = "unit/registry_tests.rs"]
mod registry_tests;

#[path = "unit/router_tests.rs"]
mod router_tests;

#[path = "unit/policy_tests.rs"]
mod policy_tests;

#[path = "unit/handler_tests.rs"]
mod handler_tests;

#[path = "unit/builder_tests.rs"]
mod builder_tests;
