//! Denial notices surfaced to the presentation layer

use crate::core::user_management::RegistryAction;
use serde::Serialize;

/// Title shared by every denial notice
pub const DENIAL_TITLE: &str = "Permission Denied";

/// What the caller should show when an action is refused.
///
/// The core picks the wording; how it is rendered (toast, dialog, disabled
/// control) is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenialNotice {
    pub title: &'static str,
    pub description: &'static str,
}

impl DenialNotice {
    pub fn for_action(action: RegistryAction) -> Self {
        Self {
            title: DENIAL_TITLE,
            description: action.denial_description(),
        }
    }
}
