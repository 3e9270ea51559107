//! Core entity types for user management

use crate::auth::rbac::{Permission, PermissionSet, RoleName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric user identifier, unique for the registry's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,
    /// Login name, never empty
    pub username: String,
    /// Email address, format not checked
    pub email: String,
    /// Role label; expected to name a known role
    pub role: RoleName,
    /// Account status
    #[serde(default)]
    pub status: UserStatus,
    /// What this user may do when acting
    #[serde(default)]
    pub permissions: PermissionSet,
}

/// Everything needed to create a user except its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub role: RoleName,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl UserDraft {
    /// Active user with no permissions
    pub fn new<U, E, R>(username: U, email: E, role: R) -> Self
    where
        U: Into<String>,
        E: Into<String>,
        R: Into<RoleName>,
    {
        Self {
            username: username.into(),
            email: email.into(),
            role: role.into(),
            status: UserStatus::Active,
            permissions: PermissionSet::new(),
        }
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permissions.insert(permission);
        self
    }

    pub fn with_permissions<I: IntoIterator<Item = Permission>>(mut self, permissions: I) -> Self {
        self.permissions.extend(permissions);
        self
    }

    pub(super) fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            role: self.role,
            status: self.status,
            permissions: self.permissions,
        }
    }
}

/// Replacement values for a user's descriptive fields.
///
/// Permissions are deliberately absent: they change only through
/// `toggle_user_permission`, which requires `full_access`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub username: String,
    pub email: String,
    pub role: RoleName,
    pub status: UserStatus,
}

impl UserPatch {
    /// Patch pre-filled with the user's current values, for edit forms
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            status: user.status,
        }
    }

    pub(super) fn apply_to(self, user: &mut User) {
        user.username = self.username;
        user.email = self.email;
        user.role = self.role;
        user.status = self.status;
    }
}
