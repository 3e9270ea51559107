//! RBAC configuration validators

use super::trait_def::Validate;
use crate::auth::rbac::RoleCatalog;
use crate::config::models::*;
use crate::core::user_management::validate_seed_users;
use tracing::debug;

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating RBAC configuration");

        let roles = RoleCatalog::new(self.roles.clone()).map_err(|e| e.to_string())?;

        validate_seed_users(&roles, &self.users, self.validate_role_labels)
            .map_err(|e| e.to_string())?;

        if !self.users.iter().any(|u| u.id == self.actor_id) {
            return Err(format!(
                "Actor id {} does not name a configured user",
                self.actor_id
            ));
        }

        Ok(())
    }
}
