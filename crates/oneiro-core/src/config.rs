//! Chat behavior configuration.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::responder::Locale;

/// Tunables for the chat assistant.
///
/// The defaults reproduce the production behavior (a 1000-3000 ms
/// simulated thinking delay, English replies). Tests construct stores
/// with [`ChatConfig::instant`] so nothing actually sleeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Lower bound of the simulated assistant delay, in milliseconds.
    pub min_response_delay_ms: u64,
    /// Upper bound of the simulated assistant delay, in milliseconds.
    pub max_response_delay_ms: u64,
    /// Locale used when a caller does not supply one.
    pub default_locale: Locale,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            min_response_delay_ms: 1000,
            max_response_delay_ms: 3000,
            default_locale: Locale::En,
        }
    }
}

impl ChatConfig {
    /// A config with no simulated delay.
    pub fn instant() -> Self {
        Self {
            min_response_delay_ms: 0,
            max_response_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Samples a delay from the configured window.
    pub fn sample_delay(&self) -> Duration {
        let min = self.min_response_delay_ms.min(self.max_response_delay_ms);
        let max = self.min_response_delay_ms.max(self.max_response_delay_ms);
        let millis = if min == max {
            min
        } else {
            rand::thread_rng().gen_range(min..=max)
        };
        Duration::from_millis(millis)
    }
}
