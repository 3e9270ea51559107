//! # rbac-registry
//!
//! A role-based access control core that gates create/read/update/delete
//! operations on an in-memory user registry.
//!
//! ## Features
//!
//! - **Single decision point**: [`is_authorized`] is the only place an
//!   allow/deny decision is made; `full_access` authorizes everything
//! - **Gated mutations**: every registry mutation checks the actor first and
//!   either applies in full or returns [`RegistryError::PermissionDenied`]
//! - **Explicit actors**: the acting identity is passed to every call, never
//!   read from ambient state
//! - **Privilege-escalation guard**: editing a user's permissions needs
//!   `full_access`, not `update`
//!
//! ## Quick Start
//!
//! ```rust
//! use rbac_registry::{Actor, Permission, RegistryError, UserDraft, UserId, UserRegistry};
//!
//! let mut registry = UserRegistry::with_defaults();
//! let admin = registry.actor_for(UserId(1))?;
//!
//! let bob = registry.add_user(&admin, UserDraft::new("bob", "b@x.com", "Editor"))?;
//! assert_eq!(bob.id, UserId(3));
//!
//! let editor = Actor::synthetic("editor", [Permission::Read, Permission::Update]);
//! let denied = registry.delete_user(&editor, bob.id).unwrap_err();
//! assert_eq!(denied.required_permission(), Some(Permission::Delete));
//! # Ok::<(), RegistryError>(())
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    Actor, Permission, PermissionCheck, PermissionSet, Role, RoleCatalog, RoleId, RoleName,
    authorize, check_all, check_any, check_permission_detailed, is_authorized,
};
pub use config::{Config, RbacConfig};
pub use core::user_management::{
    Capabilities, RegistryAction, SharedRegistry, User, UserDraft, UserId, UserPatch,
    UserRegistry, UserStatus,
};
pub use utils::error::{DenialNotice, RegistryError, Result};
pub use utils::logging::init_logging;
