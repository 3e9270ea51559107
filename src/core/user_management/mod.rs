//! User registry controller
//!
//! Owns the user records and role definitions. Every mutating operation
//! consults the authorization engine first and either applies its effect in
//! full or returns a denial with the registry untouched.

mod actions;
mod manager;
mod shared;
mod types;
mod user_ops;

pub use actions::{Capabilities, RegistryAction};
pub(crate) use manager::validate_seed_users;
pub use manager::UserRegistry;
pub use shared::SharedRegistry;
pub use types::{User, UserDraft, UserId, UserPatch, UserStatus};
