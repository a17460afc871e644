//! Chat message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the AI assistant.
    Assistant,
}

/// One turn in a chat session.
///
/// A message may carry a weak `dream_id` reference to the journal entry
/// it discusses; the referenced dream is not guaranteed to still exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message identifier (UUID format)
    pub id: String,
    pub content: String,
    pub role: MessageRole,
    pub timestamp: DateTime<Utc>,
    /// Weak reference to a journal entry, if the message is about one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dream_id: Option<String>,
    /// Transient typing-indicator flag; carries no persistence semantics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_typing: Option<bool>,
}

impl Message {
    /// Creates a message with a fresh id and the current timestamp.
    pub fn new(content: impl Into<String>, role: MessageRole, dream_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            role,
            timestamp: Utc::now(),
            dream_id,
            is_typing: None,
        }
    }
}
