//! Dream domain model.
//!
//! This module contains the core Dream entity plus the creation and
//! partial-update inputs the journal store accepts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Emotional tone attached to a journaled dream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
    Nostalgic,
    Anxious,
}

impl Mood {
    /// Numeric weight used by the journal statistics.
    pub fn weight(&self) -> u8 {
        match self {
            Mood::Positive => 5,
            Mood::Nostalgic => 4,
            Mood::Neutral => 3,
            Mood::Anxious => 2,
            Mood::Negative => 1,
        }
    }
}

/// Mood filter applied to the journal list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodFilter {
    /// Show every entry regardless of mood.
    #[default]
    All,
    /// Show only entries with exactly this mood.
    Only(Mood),
}

/// A journaled dream entry.
///
/// `id` and `created_at` are assigned by the store at creation time and
/// never change afterwards; `updated_at` is refreshed on every mutation.
/// `tags` and `symbols` preserve insertion order and may contain
/// duplicates. `clarity` is a 1-5 self-rating by convention, but the
/// store performs no range validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dream {
    /// Unique dream identifier (UUID format)
    pub id: String,
    pub title: String,
    pub content: String,
    /// Calendar date the dream occurred (ISO date on the wire)
    pub date: NaiveDate,
    pub mood: Mood,
    pub tags: Vec<String>,
    pub symbols: Vec<String>,
    /// Self-rated vividness/recall quality, 1-5
    pub clarity: u8,
    pub lucid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a dream: every [`Dream`] field except the
/// store-assigned id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDream {
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub mood: Mood,
    pub tags: Vec<String>,
    pub symbols: Vec<String>,
    pub clarity: u8,
    pub lucid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<String>,
}

/// Partial update for a dream: supplied fields are merged over the
/// existing record, absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub date: Option<NaiveDate>,
    pub mood: Option<Mood>,
    pub tags: Option<Vec<String>>,
    pub symbols: Option<Vec<String>>,
    pub clarity: Option<u8>,
    pub lucid: Option<bool>,
    pub ai_insight: Option<String>,
}

impl DreamPatch {
    /// Merges this patch into `dream`, field by field.
    ///
    /// Does not touch `id`, `created_at` or `updated_at`; the store bumps
    /// `updated_at` itself after a successful merge.
    pub fn apply_to(&self, dream: &mut Dream) {
        if let Some(title) = &self.title {
            dream.title = title.clone();
        }
        if let Some(content) = &self.content {
            dream.content = content.clone();
        }
        if let Some(date) = self.date {
            dream.date = date;
        }
        if let Some(mood) = self.mood {
            dream.mood = mood;
        }
        if let Some(tags) = &self.tags {
            dream.tags = tags.clone();
        }
        if let Some(symbols) = &self.symbols {
            dream.symbols = symbols.clone();
        }
        if let Some(clarity) = self.clarity {
            dream.clarity = clarity;
        }
        if let Some(lucid) = self.lucid {
            dream.lucid = lucid;
        }
        if let Some(ai_insight) = &self.ai_insight {
            dream.ai_insight = Some(ai_insight.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_dream() -> Dream {
        Dream {
            id: "dream-1".to_string(),
            title: "Flying Over Mountains".to_string(),
            content: "Soaring above snow-capped peaks.".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            mood: Mood::Positive,
            tags: vec!["freedom".to_string(), "flying".to_string()],
            symbols: vec!["flying".to_string(), "mountains".to_string()],
            clarity: 5,
            lucid: true,
            ai_insight: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_mood_weights() {
        assert_eq!(Mood::Positive.weight(), 5);
        assert_eq!(Mood::Nostalgic.weight(), 4);
        assert_eq!(Mood::Neutral.weight(), 3);
        assert_eq!(Mood::Anxious.weight(), 2);
        assert_eq!(Mood::Negative.weight(), 1);
    }

    #[test]
    fn test_patch_merges_only_supplied_fields() {
        let mut dream = sample_dream();
        let original_title = dream.title.clone();

        let patch = DreamPatch {
            mood: Some(Mood::Anxious),
            clarity: Some(2),
            ..DreamPatch::default()
        };
        patch.apply_to(&mut dream);

        assert_eq!(dream.mood, Mood::Anxious);
        assert_eq!(dream.clarity, 2);
        assert_eq!(dream.title, original_title);
        assert!(dream.lucid);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let mut dream = sample_dream();
        let before = dream.clone();
        DreamPatch::default().apply_to(&mut dream);
        assert_eq!(dream, before);
    }

    #[test]
    fn test_mood_serde_tags() {
        let json = serde_json::to_string(&Mood::Nostalgic).unwrap();
        assert_eq!(json, "\"nostalgic\"");
        let back: Mood = serde_json::from_str("\"anxious\"").unwrap();
        assert_eq!(back, Mood::Anxious);
    }
}
