//! Role lookup methods

use super::system::RoleCatalog;
use super::types::{Role, RoleId, RoleName};

impl RoleCatalog {
    /// Get role by name
    pub fn get_role(&self, role_name: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.name.as_str() == role_name)
    }

    /// Get role by id
    pub fn get_role_by_id(&self, role_id: RoleId) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == role_id)
    }

    /// Whether a user's role label names a known role
    pub fn contains_name(&self, role_name: &RoleName) -> bool {
        self.get_role(role_name.as_str()).is_some()
    }

    /// Role names in catalog order, for role pickers
    pub fn role_names(&self) -> Vec<&RoleName> {
        self.roles.iter().map(|r| &r.name).collect()
    }
}
