//! Integration tests for rbac-registry
//!
//! These tests drive the public API the way a presentation layer would.

pub mod config_tests;
pub mod registry_tests;
