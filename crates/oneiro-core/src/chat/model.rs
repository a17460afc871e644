//! Chat session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::Message;

/// One conversation thread between the user and the assistant.
///
/// `messages` is append-only in practice: insertion order is
/// chronological order and messages are never reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Human-readable session title
    pub title: String,
    /// Ordered conversation turns
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    /// Bumped whenever a message is appended
    pub last_activity: DateTime<Utc>,
}
