//! Insight service trait.
//!
//! Defines the interface for assistant reply generation backends.

use async_trait::async_trait;

use super::replies::Locale;
use crate::error::Result;

/// An abstract service that turns a user message into an assistant reply.
///
/// This trait decouples the chat layer from the specific reply backend.
/// The in-tree implementation answers from the canned reply table; a real
/// model-backed service could be substituted without touching the stores.
#[async_trait]
pub trait InsightService: Send + Sync {
    /// Produces the assistant reply for a user message.
    ///
    /// # Arguments
    ///
    /// * `message` - The user's message content
    /// * `locale` - The language the reply should be in
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The reply text
    /// - `Err(_)`: Error occurred while generating the reply
    async fn send_message(&self, message: &str, locale: Locale) -> Result<String>;
}
