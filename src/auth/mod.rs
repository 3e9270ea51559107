//! Authorization
//!
//! This module provides the permission taxonomy and decision engine.

pub mod rbac;
