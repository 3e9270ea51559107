//! Role catalog core functionality

use crate::utils::error::{RegistryError, Result};
use std::collections::HashSet;
use tracing::{debug, info};

use super::types::{Permission, PermissionSet, Role, RoleId, RoleName};

/// Static role reference data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCatalog {
    /// Role definitions in seed order
    pub(super) roles: Vec<Role>,
}

impl RoleCatalog {
    /// Build a catalog from seed roles, rejecting duplicate ids or names
    pub fn new(roles: Vec<Role>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for role in &roles {
            if !ids.insert(role.id) {
                return Err(RegistryError::validation(format!(
                    "Duplicate role id: {}",
                    role.id
                )));
            }
            if !names.insert(role.name.as_str()) {
                return Err(RegistryError::validation(format!(
                    "Duplicate role name: '{}'",
                    role.name
                )));
            }
        }

        debug!("Initialized {} roles", roles.len());
        Ok(Self { roles })
    }

    /// Catalog with the built-in roles
    pub fn with_default_roles() -> Self {
        info!("Initializing default roles");

        Self {
            roles: Self::default_roles(),
        }
    }

    /// Built-in roles: Super Admin and Editor
    pub fn default_roles() -> Vec<Role> {
        vec![
            // Super Admin - full access
            Role {
                id: RoleId(1),
                name: RoleName::new("Super Admin"),
                permissions: PermissionSet::from([Permission::FullAccess]),
            },
            // Editor - read and edit descriptive fields
            Role {
                id: RoleId(2),
                name: RoleName::new("Editor"),
                permissions: PermissionSet::from([Permission::Read, Permission::Update]),
            },
        ]
    }

    /// List all roles
    pub fn list_roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::with_default_roles()
    }
}
