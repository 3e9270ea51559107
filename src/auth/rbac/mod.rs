//! Role-Based Access Control (RBAC) system
//!
//! This module holds the authorization engine: the closed permission
//! taxonomy, role definitions, and the single decision function every
//! permission check in the crate goes through.

mod actor;
mod permissions;
mod roles;
mod system;
mod types;

// Re-export public types and functions
pub use actor::Actor;
pub use permissions::{authorize, check_all, check_any, check_permission_detailed, is_authorized};
pub use system::RoleCatalog;
pub use types::{Permission, PermissionCheck, PermissionSet, Role, RoleId, RoleName};
