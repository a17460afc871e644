//! Canned insight service implementation.

use async_trait::async_trait;

use oneiro_core::config::ChatConfig;
use oneiro_core::error::Result;
use oneiro_core::responder::{InsightService, Locale, classify, response_text};

/// [`InsightService`] that answers from the canned reply table after a
/// simulated thinking delay.
///
/// Shares its delay window with the chat store config, so production and
/// backend-driven replies pace identically.
#[derive(Clone, Default)]
pub struct MockInsightService {
    config: ChatConfig,
}

impl MockInsightService {
    /// Creates a service with the production delay window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with a custom config.
    pub fn with_config(config: ChatConfig) -> Self {
        Self { config }
    }

    /// Creates a service with no simulated delay.
    pub fn instant() -> Self {
        Self::with_config(ChatConfig::instant())
    }
}

#[async_trait]
impl InsightService for MockInsightService {
    async fn send_message(&self, message: &str, locale: Locale) -> Result<String> {
        let delay = self.config.sample_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let category = classify(message);
        tracing::debug!(?category, locale = locale.as_tag(), "insight generated");
        Ok(response_text(locale, category).to_string())
    }
}
