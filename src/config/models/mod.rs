//! Configuration data models
//!
//! This module defines the configuration structures used by the registry.

pub mod rbac;

// Re-export all configuration types
pub use rbac::*;

/// Default for boolean switches that are on unless disabled
pub fn default_true() -> bool {
    true
}
