//! Logging utilities
//!
//! The crate logs through `tracing` macros; this module only installs a
//! subscriber for embedders that do not bring their own.

use crate::utils::error::{RegistryError, Result};
use tracing::Level;

/// Install a formatted `tracing` subscriber at `level`.
///
/// Fails instead of panicking when a global subscriber already exists.
pub fn init_logging(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .try_init()
        .map_err(|e| RegistryError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Install a subscriber filtered by `RUST_LOG`, falling back to `default_directive`.
pub fn init_logging_from_env(default_directive: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_directive))
        .map_err(|e| RegistryError::Config(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| RegistryError::Config(format!("Failed to initialize logging: {}", e)))
}
