//! Thread-safe registry handle

use super::actions::Capabilities;
use super::manager::UserRegistry;
use super::types::{User, UserDraft, UserId, UserPatch};
use crate::auth::rbac::{Actor, Permission, Role};
use crate::utils::error::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle for embedding the registry in a concurrent service.
///
/// Each mutation holds the write lock across its permission check and its
/// effect, so no other mutation can land in between. Readers share the read
/// lock and never observe a half-applied change. The edit session is
/// registry-wide, so all handles share one staged user.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<UserRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: UserRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Snapshot of users in storage order
    pub fn list_users(&self) -> Vec<User> {
        self.inner.read().list_users().to_vec()
    }

    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.inner.read().get_user(id).cloned()
    }

    pub fn list_roles(&self) -> Vec<Role> {
        self.inner.read().list_roles().to_vec()
    }

    pub fn capabilities(&self, actor: &Actor) -> Capabilities {
        self.inner.read().capabilities(actor)
    }

    pub fn actor_for(&self, id: UserId) -> Result<Actor> {
        self.inner.read().actor_for(id)
    }

    pub fn add_user(&self, actor: &Actor, draft: UserDraft) -> Result<User> {
        self.inner.write().add_user(actor, draft)
    }

    pub fn update_user(&self, actor: &Actor, id: UserId, patch: UserPatch) -> Result<User> {
        self.inner.write().update_user(actor, id, patch)
    }

    pub fn delete_user(&self, actor: &Actor, id: UserId) -> Result<User> {
        self.inner.write().delete_user(actor, id)
    }

    pub fn toggle_user_permission(
        &self,
        actor: &Actor,
        id: UserId,
        permission: Permission,
    ) -> Result<bool> {
        self.inner.write().toggle_user_permission(actor, id, permission)
    }

    pub fn begin_edit(&self, actor: &Actor, id: UserId) -> Result<User> {
        self.inner.write().begin_edit(actor, id)
    }

    pub fn end_edit(&self) -> Option<UserId> {
        self.inner.write().end_edit()
    }

    pub fn staged_user(&self) -> Option<User> {
        self.inner.read().staged_user().cloned()
    }

    pub fn begin_delete(&self, actor: &Actor, id: UserId) -> Result<User> {
        self.inner.read().begin_delete(actor, id)
    }
}

impl From<UserRegistry> for SharedRegistry {
    fn from(registry: UserRegistry) -> Self {
        Self::new(registry)
    }
}
