//! Common test utilities for rbac-registry
//!
//! - Actor and draft factories
//! - Registry assertions


pub use fixtures::{ActorFactory, DraftFactory};
