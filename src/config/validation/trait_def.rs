//! Validation trait for seed configuration

/// Checks a configuration section before any runtime object is built from it.
///
/// Errors are plain messages; [`crate::Config::validate`] wraps them into
/// `RegistryError::Config` with the section name.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;

    /// Convenience form for callers that only need a yes/no answer
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
