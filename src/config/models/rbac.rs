//! RBAC configuration

use super::default_true;
use crate::auth::rbac::{Role, RoleCatalog};
use crate::core::user_management::{User, UserId, UserRegistry};
use serde::{Deserialize, Serialize};

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Reject user role labels that name no configured role
    #[serde(default = "default_true")]
    pub validate_role_labels: bool,
    /// User the session acts as
    #[serde(default = "default_actor_id")]
    pub actor_id: UserId,
    /// Role reference data
    #[serde(default = "RoleCatalog::default_roles")]
    pub roles: Vec<Role>,
    /// Initial user records
    #[serde(default = "UserRegistry::default_users")]
    pub users: Vec<User>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            validate_role_labels: true,
            actor_id: default_actor_id(),
            roles: RoleCatalog::default_roles(),
            users: UserRegistry::default_users(),
        }
    }
}

fn default_actor_id() -> UserId {
    UserId(1)
}
