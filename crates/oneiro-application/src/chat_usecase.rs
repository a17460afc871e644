//! Chat use case: the chat store wired to the user profile and insight
//! backend.

use std::sync::Arc;

use oneiro_core::chat::{ChatSession, ChatStore};
use oneiro_core::error::Result;
use oneiro_core::responder::{InsightService, Locale};
use oneiro_core::user::{DefaultUserProfileService, UserProfileService};
use oneiro_infrastructure::MockInsightService;

/// Coordinates the [`ChatStore`] with the user profile (for the default
/// reply language) and an [`InsightService`] backend.
pub struct ChatUseCase {
    store: ChatStore,
    profiles: Arc<dyn UserProfileService>,
    insights: Arc<dyn InsightService>,
}

impl ChatUseCase {
    /// Creates a use case with the default profile and the canned insight
    /// backend.
    pub fn new() -> Self {
        Self::with_components(
            ChatStore::new(),
            Arc::new(DefaultUserProfileService),
            Arc::new(MockInsightService::new()),
        )
    }

    /// Creates a use case from explicit components.
    pub fn with_components(
        store: ChatStore,
        profiles: Arc<dyn UserProfileService>,
        insights: Arc<dyn InsightService>,
    ) -> Self {
        Self {
            store,
            profiles,
            insights,
        }
    }

    /// The store presentation components read from.
    pub fn store(&self) -> &ChatStore {
        &self.store
    }

    /// Starts a new conversation and makes it current.
    pub async fn start_session(&self, title: Option<String>) -> ChatSession {
        self.store.create_session(title).await
    }

    /// Sends a user message through the store's full reply turn.
    ///
    /// `locale_tag` is resolved with [`Locale::from_tag`] (unknown tags
    /// fall back to English); when absent, the user's preferred locale
    /// applies.
    pub async fn converse(&self, content: &str, dream_id: Option<String>, locale_tag: Option<&str>) {
        let locale = self.resolve_locale(locale_tag);
        tracing::debug!(locale = locale.as_tag(), "conversation turn");
        self.store.send_message(content, dream_id, Some(locale)).await;
    }

    /// Asks the insight backend directly, outside any session.
    pub async fn request_insight(&self, message: &str, locale_tag: Option<&str>) -> Result<String> {
        let locale = self.resolve_locale(locale_tag);
        self.insights.send_message(message, locale).await
    }

    /// Sessions ordered by recency.
    pub async fn recent_sessions(&self, limit: Option<usize>) -> Vec<ChatSession> {
        self.store.recent_sessions(limit).await
    }

    fn resolve_locale(&self, locale_tag: Option<&str>) -> Locale {
        locale_tag
            .map(Locale::from_tag)
            .unwrap_or_else(|| self.profiles.preferred_locale())
    }
}

impl Default for ChatUseCase {
    fn default() -> Self {
        Self::new()
    }
}
