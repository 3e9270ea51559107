//! Utility modules
//!
//! - **error**: Error type, result alias and denial notices
//! - **logging**: Subscriber installation for `tracing`

pub mod error;
pub mod logging;
