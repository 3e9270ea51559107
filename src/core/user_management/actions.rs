//! Registry actions and capability exposure

use crate::auth::rbac::{Actor, Permission};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A permission-gated registry action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryAction {
    AddUser,
    EditUser,
    DeleteUser,
    EditPermissions,
}

impl RegistryAction {
    /// Permission the actor must hold
    pub fn required_permission(&self) -> Permission {
        match self {
            RegistryAction::AddUser => Permission::Create,
            RegistryAction::EditUser => Permission::Update,
            RegistryAction::DeleteUser => Permission::Delete,
            // granting powers is stricter than editing fields
            RegistryAction::EditPermissions => Permission::FullAccess,
        }
    }

    /// Text shown to the end user when the action is refused
    pub fn denial_description(&self) -> &'static str {
        match self {
            RegistryAction::AddUser => "You do not have permission to add users.",
            RegistryAction::EditUser => "You do not have permission to edit users.",
            RegistryAction::DeleteUser => "You do not have permission to delete users.",
            RegistryAction::EditPermissions => {
                "You do not have permission to modify user permissions."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryAction::AddUser => "add_user",
            RegistryAction::EditUser => "edit_user",
            RegistryAction::DeleteUser => "delete_user",
            RegistryAction::EditPermissions => "edit_permissions",
        }
    }
}

impl fmt::Display for RegistryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which actions to offer an actor.
///
/// Only the decision lives here; whether a refused action is hidden or shown
/// disabled is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub can_add: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_edit_permissions: bool,
}

impl Capabilities {
    pub fn for_actor(actor: &Actor) -> Self {
        let allows = |action: RegistryAction| actor.can(action.required_permission());
        Self {
            can_add: allows(RegistryAction::AddUser),
            can_edit: allows(RegistryAction::EditUser),
            can_delete: allows(RegistryAction::DeleteUser),
            can_edit_permissions: allows(RegistryAction::EditPermissions),
        }
    }

    pub fn allows(&self, action: RegistryAction) -> bool {
        match action {
            RegistryAction::AddUser => self.can_add,
            RegistryAction::EditUser => self.can_edit,
            RegistryAction::DeleteUser => self.can_delete,
            RegistryAction::EditPermissions => self.can_edit_permissions,
        }
    }
}
