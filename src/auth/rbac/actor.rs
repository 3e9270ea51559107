//! The acting identity

use crate::core::user_management::{User, UserId};
use serde::{Deserialize, Serialize};

use super::permissions::is_authorized;
use super::types::{Permission, PermissionSet};

/// Identity every authorization check is evaluated against.
///
/// The permission set is a snapshot taken when the actor is built and never
/// changes afterwards, even if the backing user record is edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    user_id: Option<UserId>,
    username: String,
    permissions: PermissionSet,
}

impl Actor {
    /// Snapshot an actor from a registry user
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: Some(user.id),
            username: user.username.clone(),
            permissions: user.permissions.clone(),
        }
    }

    /// Actor with no backing user record
    pub fn synthetic<S, I>(username: S, permissions: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Permission>,
    {
        Self {
            user_id: None,
            username: username.into(),
            permissions: permissions.into_iter().collect(),
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Whether this actor may exercise `required`
    pub fn can(&self, required: Permission) -> bool {
        is_authorized(&self.permissions, required)
    }
}
