//! Configuration management for the registry
//!
//! This module handles loading, validation, and conversion of the seed
//! configuration into runtime objects.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::auth::rbac::{Actor, RoleCatalog};
use crate::core::user_management::UserRegistry;
use crate::utils::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Roles, users and registry policy
    #[serde(default)]
    pub rbac: RbacConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        Self::from_yaml_str(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Get RBAC configuration
    pub fn rbac(&self) -> &RbacConfig {
        &self.rbac
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        Validate::validate(&self.rbac)
            .map_err(|e| RegistryError::Config(format!("RBAC config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Build the registry described by this configuration
    pub fn build_registry(&self) -> Result<UserRegistry> {
        UserRegistry::from_config(&self.rbac)
    }

    /// Build the role catalog described by this configuration
    pub fn build_roles(&self) -> Result<RoleCatalog> {
        RoleCatalog::new(self.rbac.roles.clone())
    }

    /// Snapshot the configured acting user
    pub fn actor(&self) -> Result<Actor> {
        self.rbac
            .users
            .iter()
            .find(|u| u.id == self.rbac.actor_id)
            .map(Actor::from_user)
            .ok_or_else(|| {
                RegistryError::Config(format!(
                    "Actor id {} does not name a configured user",
                    self.rbac.actor_id
                ))
            })
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RegistryError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
