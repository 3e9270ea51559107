//! Error types for the registry

use crate::auth::rbac::Permission;
use crate::core::user_management::RegistryAction;
use thiserror::Error;

/// Result type alias for the registry
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Main error type for the registry
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The actor lacks the permission the action requires
    #[error("Permission denied: {action} requires '{required}'")]
    PermissionDenied {
        required: Permission,
        action: RegistryAction,
    },

    /// Target record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input rejected before any state was touched
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
