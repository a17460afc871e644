//! User profile domain model.

use serde::{Deserialize, Serialize};

use crate::responder::Locale;

/// Profile of the journaling user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name shown in the dashboard header.
    pub display_name: String,
    /// Language the assistant answers in unless a call overrides it.
    pub locale: Locale,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            display_name: "Dream Explorer".to_string(),
            locale: Locale::En,
        }
    }
}
