//! User service for managing user information.
//!
//! Currently returns a constant profile, but designed to support future
//! enhancements like per-user configuration and stored preferences.

use super::model::UserProfile;
use crate::responder::Locale;

/// Service for managing user information.
///
/// This trait abstracts user-related operations, allowing different
/// implementations for various scenarios (single-user, multi-user,
/// configuration-based, etc.).
pub trait UserProfileService: Send + Sync {
    /// Returns the complete user profile.
    fn profile(&self) -> UserProfile;

    /// Returns the locale the assistant should answer in by default.
    fn preferred_locale(&self) -> Locale {
        self.profile().locale
    }
}

/// Default implementation that returns a constant profile.
///
/// Suitable for single-user scenarios and development environments.
#[derive(Debug, Clone, Default)]
pub struct DefaultUserProfileService;

impl UserProfileService for DefaultUserProfileService {
    fn profile(&self) -> UserProfile {
        UserProfile::default()
    }
}
