//! Helper functions for creating and inspecting specific error types

use super::notice::DenialNotice;
use super::types::RegistryError;
use crate::auth::rbac::Permission;
use crate::core::user_management::RegistryAction;

impl RegistryError {
    pub fn permission_denied(required: Permission, action: RegistryAction) -> Self {
        Self::PermissionDenied { required, action }
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` if this is an authorization denial.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// The permission whose absence caused a denial, if any.
    pub fn required_permission(&self) -> Option<Permission> {
        match self {
            Self::PermissionDenied { required, .. } => Some(*required),
            _ => None,
        }
    }

    /// User-facing notice for a denial. `None` for every other error kind.
    pub fn denial_notice(&self) -> Option<DenialNotice> {
        match self {
            Self::PermissionDenied { action, .. } => Some(DenialNotice::for_action(*action)),
            _ => None,
        }
    }
}
