//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `rbac_validators`: Role and user seed validators
//! - `tests`: Test suite for all validators

mod rbac_validators;
mod trait_def;

pub use trait_def::Validate;
