//! Permission checking
//!
//! [`is_authorized`] is the only place an allow/deny decision is made. Every
//! other check in the crate, including registry gating and capability
//! exposure, calls through it.

use crate::core::user_management::RegistryAction;
use crate::utils::error::{RegistryError, Result};
use tracing::debug;

use super::types::{Permission, PermissionCheck, PermissionSet};

/// Decide whether a holder of `actor_permissions` may exercise `required`.
///
/// Pure and total: every input yields a boolean.
pub fn is_authorized(actor_permissions: &PermissionSet, required: Permission) -> bool {
    actor_permissions.contains(Permission::FullAccess) || actor_permissions.contains(required)
}

/// Fallible form of [`is_authorized`] used in front of every mutation.
pub fn authorize(
    actor_permissions: &PermissionSet,
    required: Permission,
    action: RegistryAction,
) -> Result<()> {
    if is_authorized(actor_permissions, required) {
        debug!("Authorized {} (requires {})", action, required);
        Ok(())
    } else {
        Err(RegistryError::permission_denied(required, action))
    }
}

/// Detailed permission check
pub fn check_permission_detailed(
    actor_permissions: &PermissionSet,
    required: Permission,
) -> PermissionCheck {
    if !is_authorized(actor_permissions, required) {
        return PermissionCheck {
            granted: false,
            granted_by: None,
            denial_reason: Some(format!("Missing permission: {}", required)),
        };
    }

    // Prefer naming the exact permission when it is held directly
    let granted_by = if actor_permissions.contains(required) {
        required
    } else {
        Permission::FullAccess
    };

    PermissionCheck {
        granted: true,
        granted_by: Some(granted_by),
        denial_reason: None,
    }
}

/// Check if the holder has all of the required permissions
pub fn check_all(actor_permissions: &PermissionSet, required: &[Permission]) -> bool {
    required
        .iter()
        .all(|perm| is_authorized(actor_permissions, *perm))
}

/// Check if the holder has any of the required permissions
pub fn check_any(actor_permissions: &PermissionSet, required: &[Permission]) -> bool {
    required
        .iter()
        .any(|perm| is_authorized(actor_permissions, *perm))
}
