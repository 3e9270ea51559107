//! Error handling for the registry
//!
//! This module defines all error types used throughout the crate.

mod helpers;
mod notice;
mod types;

pub use notice::DenialNotice;
pub use types::{RegistryError, Result};
