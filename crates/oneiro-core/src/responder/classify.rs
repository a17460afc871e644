//! Keyword classification for incoming chat messages.

use serde::{Deserialize, Serialize};

/// The reply categories the assistant can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyCategory {
    /// Flying and soaring themes.
    Flying,
    /// Water, sea and rain themes.
    Water,
    /// Being chased or running.
    Chase,
    /// Animal encounters.
    Animals,
    /// Fallback when no keyword matches.
    Generic,
}

/// Ordered classification rules: first matching group wins.
///
/// Keyword tokens cover both English and Turkish content. Matching is a
/// plain case-insensitive substring scan, so "flying" is caught by "fly"
/// and "koşuyordum" by "koş".
const RULES: &[(ReplyCategory, &[&str])] = &[
    (ReplyCategory::Flying, &["fly", "uç"]),
    (ReplyCategory::Water, &["water", "su"]),
    (ReplyCategory::Chase, &["chase", "koval", "koş", "run"]),
    (
        ReplyCategory::Animals,
        &["animal", "hayvan", "kedi", "köpek", "cat", "dog"],
    ),
];

/// Classifies message content into a [`ReplyCategory`].
///
/// The rule groups are evaluated in a fixed priority order (flying, then
/// water, then chase, then animals); content matching none of them falls
/// through to [`ReplyCategory::Generic`].
pub fn classify(content: &str) -> ReplyCategory {
    let lowered = content.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(ReplyCategory::Generic)
}
