//! Permission-gated user operations

use super::actions::RegistryAction;
use super::manager::UserRegistry;
use super::types::{User, UserDraft, UserId, UserPatch};
use crate::auth::rbac::{Actor, Permission, authorize};
use crate::utils::error::{RegistryError, Result};
use tracing::{debug, info, warn};

impl UserRegistry {
    /// Create a new user. Requires `create`.
    ///
    /// The new id is one past the highest id ever assigned, so ids of
    /// deleted users are never handed out again.
    pub fn add_user(&mut self, actor: &Actor, draft: UserDraft) -> Result<User> {
        gate(actor, RegistryAction::AddUser)?;
        self.check_fields(&draft.username, &draft.role)?;

        let next = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| RegistryError::validation("User id space exhausted"))?;
        let id = UserId(next);
        let user = draft.into_user(id);

        self.last_id = next;
        self.users.push(user.clone());

        info!("User created: {} ({})", user.username, user.id);
        Ok(user)
    }

    /// Replace a user's descriptive fields. Requires `update`.
    ///
    /// Saving the staged user closes its edit session.
    pub fn update_user(&mut self, actor: &Actor, id: UserId, patch: UserPatch) -> Result<User> {
        gate(actor, RegistryAction::EditUser)?;
        let index = self.position(id)?;
        self.check_fields(&patch.username, &patch.role)?;

        let user = &mut self.users[index];
        patch.apply_to(user);
        let updated = user.clone();

        if self.staged == Some(id) {
            self.staged = None;
        }

        info!("User updated: {}", id);
        Ok(updated)
    }

    /// Remove a user and return it. Requires `delete`.
    pub fn delete_user(&mut self, actor: &Actor, id: UserId) -> Result<User> {
        gate(actor, RegistryAction::DeleteUser)?;
        let index = self.position(id)?;

        let removed = self.users.remove(index);
        if self.staged == Some(id) {
            self.staged = None;
        }

        info!("User deleted: {} ({})", removed.username, id);
        Ok(removed)
    }

    /// Flip one permission on the staged user. Requires `full_access`.
    ///
    /// `id` must be the user opened with [`begin_edit`](Self::begin_edit).
    /// Returns whether the user holds `permission` afterwards.
    pub fn toggle_user_permission(
        &mut self,
        actor: &Actor,
        id: UserId,
        permission: Permission,
    ) -> Result<bool> {
        gate(actor, RegistryAction::EditPermissions)?;
        let index = self.position(id)?;
        if self.staged != Some(id) {
            return Err(RegistryError::validation(format!(
                "User {} is not staged for editing",
                id
            )));
        }

        let user = &mut self.users[index];
        let held = user.permissions.toggle(permission);

        info!(
            "Permission '{}' {} user {}",
            permission,
            if held { "granted to" } else { "revoked from" },
            id
        );
        Ok(held)
    }

    /// Open a user for editing and return it. Requires `update`.
    ///
    /// Replaces any earlier staged user. User records are not touched.
    pub fn begin_edit(&mut self, actor: &Actor, id: UserId) -> Result<User> {
        gate(actor, RegistryAction::EditUser)?;
        let index = self.position(id)?;

        self.staged = Some(id);
        debug!("User {} staged for editing", id);
        Ok(self.users[index].clone())
    }

    /// Close the edit session without saving. Returns the id that was staged.
    pub fn end_edit(&mut self) -> Option<UserId> {
        self.staged.take()
    }

    /// Preflight for a delete confirmation. Requires `delete`.
    pub fn begin_delete(&self, actor: &Actor, id: UserId) -> Result<User> {
        gate(actor, RegistryAction::DeleteUser)?;
        let index = self.position(id)?;
        Ok(self.users[index].clone())
    }
}

fn gate(actor: &Actor, action: RegistryAction) -> Result<()> {
    authorize(actor.permissions(), action.required_permission(), action).inspect_err(|_| {
        warn!(
            "Permission denied: '{}' attempted {} without '{}'",
            actor.username(),
            action,
            action.required_permission()
        );
    })
}
