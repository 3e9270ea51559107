//! User registry - state, construction and queries

use super::types::{User, UserId};
use crate::auth::rbac::{Actor, Permission, PermissionSet, Role, RoleCatalog, RoleName};
use crate::config::RbacConfig;
use crate::utils::error::{RegistryError, Result};
use std::collections::HashSet;
use tracing::{debug, info};

use super::actions::Capabilities;

/// Authoritative in-memory collection of users and roles.
///
/// Every mutation takes the acting identity explicitly and is gated by the
/// authorization engine before any state is touched.
#[derive(Debug, Clone)]
pub struct UserRegistry {
    /// Users in storage order
    pub(super) users: Vec<User>,
    /// Role reference data
    pub(super) roles: RoleCatalog,
    /// Highest id ever assigned, including deleted users
    pub(super) last_id: u64,
    /// Reject role labels that name no known role
    pub(super) validate_role_labels: bool,
    /// User opened for editing by `begin_edit`; the only valid toggle target
    pub(super) staged: Option<UserId>,
}

impl UserRegistry {
    /// Create a registry from seed data
    pub fn new(roles: RoleCatalog, users: Vec<User>, validate_role_labels: bool) -> Result<Self> {
        validate_seed_users(&roles, &users, validate_role_labels)?;

        let last_id = users.iter().map(|u| u.id.0).max().unwrap_or(0);
        debug!(
            "Seeded registry with {} users and {} roles",
            users.len(),
            roles.len()
        );

        Ok(Self {
            users,
            roles,
            last_id,
            validate_role_labels,
            staged: None,
        })
    }

    /// Create a registry from configuration
    pub fn from_config(config: &RbacConfig) -> Result<Self> {
        info!("Initializing user registry");

        let roles = RoleCatalog::new(config.roles.clone())?;
        let registry = Self::new(roles, config.users.clone(), config.validate_role_labels)?;

        info!("User registry initialized successfully");
        Ok(registry)
    }

    /// Registry holding the built-in roles and users
    pub fn with_defaults() -> Self {
        Self {
            users: Self::default_users(),
            roles: RoleCatalog::with_default_roles(),
            last_id: 2,
            validate_role_labels: true,
            staged: None,
        }
    }

    /// Built-in users: an administrator and an editor
    pub fn default_users() -> Vec<User> {
        vec![
            User {
                id: UserId(1),
                username: "admin".to_string(),
                email: "admin@example.com".to_string(),
                role: RoleName::new("Super Admin"),
                status: Default::default(),
                permissions: PermissionSet::from([Permission::FullAccess]),
            },
            User {
                id: UserId(2),
                username: "john_doe".to_string(),
                email: "john@example.com".to_string(),
                role: RoleName::new("Editor"),
                status: Default::default(),
                permissions: PermissionSet::from([Permission::Read, Permission::Update]),
            },
        ]
    }

    /// List users in storage order. Never gated.
    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    /// Get user by ID
    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// List roles in catalog order
    pub fn list_roles(&self) -> &[Role] {
        self.roles.list_roles()
    }

    /// Get role by name
    pub fn role_by_name(&self, name: &str) -> Option<&Role> {
        self.roles.get_role(name)
    }

    /// The user currently open for editing, if any
    pub fn staged_user(&self) -> Option<&User> {
        self.staged.and_then(|id| self.get_user(id))
    }

    pub fn roles(&self) -> &RoleCatalog {
        &self.roles
    }

    /// Actions the presentation layer may offer this actor
    pub fn capabilities(&self, actor: &Actor) -> Capabilities {
        Capabilities::for_actor(actor)
    }

    /// Snapshot an actor from a registered user
    pub fn actor_for(&self, id: UserId) -> Result<Actor> {
        self.get_user(id)
            .map(Actor::from_user)
            .ok_or_else(|| RegistryError::not_found(format!("User {} not found", id)))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub(super) fn position(&self, id: UserId) -> Result<usize> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| RegistryError::not_found(format!("User {} not found", id)))
    }

    pub(super) fn check_fields(&self, username: &str, role: &RoleName) -> Result<()> {
        check_user_fields(&self.roles, username, role, self.validate_role_labels)
    }
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Check seed users: unique ids plus the per-user field rules
pub(crate) fn validate_seed_users(
    roles: &RoleCatalog,
    users: &[User],
    validate_role_labels: bool,
) -> Result<()> {
    let mut ids = HashSet::new();
    for user in users {
        if !ids.insert(user.id) {
            return Err(RegistryError::validation(format!(
                "Duplicate user id: {}",
                user.id
            )));
        }
        check_user_fields(roles, &user.username, &user.role, validate_role_labels)?;
    }
    Ok(())
}

fn check_user_fields(
    roles: &RoleCatalog,
    username: &str,
    role: &RoleName,
    validate_role_labels: bool,
) -> Result<()> {
    if username.trim().is_empty() {
        return Err(RegistryError::validation("Username cannot be empty"));
    }
    if validate_role_labels && !roles.contains_name(role) {
        return Err(RegistryError::validation(format!("Unknown role: '{}'", role)));
    }
    Ok(())
}
