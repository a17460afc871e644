//! Dream journal store.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{Dream, DreamPatch, MoodFilter, NewDream};
use super::stats::{DreamStats, SymbolCount, compute_stats, symbol_distribution};

/// Internal mutable state guarded by the store lock.
#[derive(Debug, Default)]
struct DreamState {
    /// Journal entries, most recent first.
    dreams: Vec<Dream>,
    /// The entry currently opened in the editor, if any.
    current: Option<Dream>,
    /// Transient text filter applied to the list view.
    search_term: String,
    /// Transient mood filter applied to the list view.
    selected_mood: MoodFilter,
}

/// The authoritative in-process collection of dream records.
///
/// `DreamStore` owns the journal plus its transient view state (current
/// selection, search term, mood filter). All mutation goes through named
/// operations; callers never touch fields directly, so the store can be
/// unit tested without any UI.
///
/// Lookups by an id that does not exist are silent no-ops: the journal is
/// left untouched and no error is signaled.
#[derive(Clone, Default)]
pub struct DreamStore {
    state: Arc<RwLock<DreamState>>,
}

impl DreamStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new dream to the journal.
    ///
    /// The store assigns a fresh unique id and stamps both `created_at`
    /// and `updated_at` with the current time. The entry is inserted at
    /// the head of the collection (most-recent-first ordering). Field
    /// values are taken as-is; `clarity` is not range checked.
    pub async fn add_dream(&self, new: NewDream) -> Dream {
        let now = Utc::now();
        let dream = Dream {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            content: new.content,
            date: new.date,
            mood: new.mood,
            tags: new.tags,
            symbols: new.symbols,
            clarity: new.clarity,
            lucid: new.lucid,
            ai_insight: new.ai_insight,
            created_at: now,
            updated_at: now,
        };

        let mut state = self.state.write().await;
        state.dreams.insert(0, dream.clone());
        tracing::debug!(dream_id = %dream.id, "dream added to journal");
        dream
    }

    /// Merges a partial patch into the dream with the given id and bumps
    /// its `updated_at`. Silent no-op if the id is unknown.
    pub async fn update_dream(&self, id: &str, patch: DreamPatch) {
        let mut state = self.state.write().await;
        if let Some(dream) = state.dreams.iter_mut().find(|d| d.id == id) {
            patch.apply_to(dream);
            dream.updated_at = Utc::now();
            tracing::debug!(dream_id = %id, "dream updated");
        }
    }

    /// Removes the dream with the given id. If it was the current
    /// selection, the selection is cleared. No-op if the id is unknown.
    pub async fn delete_dream(&self, id: &str) {
        let mut state = self.state.write().await;
        let before = state.dreams.len();
        state.dreams.retain(|d| d.id != id);
        if state.dreams.len() != before {
            if state.current.as_ref().is_some_and(|d| d.id == id) {
                state.current = None;
            }
            tracing::debug!(dream_id = %id, "dream deleted");
        }
    }

    /// Replaces the whole journal with records from a backend.
    ///
    /// Existing entries, ids and timestamps in `dreams` are kept as
    /// supplied; the transient view state is untouched.
    pub async fn hydrate(&self, dreams: Vec<Dream>) {
        let mut state = self.state.write().await;
        tracing::debug!(count = dreams.len(), "journal hydrated from backend");
        state.dreams = dreams;
    }

    /// Head-inserts a record whose identity was assigned elsewhere
    /// (e.g. by a backend repository).
    pub async fn adopt_dream(&self, dream: Dream) {
        let mut state = self.state.write().await;
        state.dreams.insert(0, dream);
    }

    /// Sets or clears the current selection.
    pub async fn set_current_dream(&self, dream: Option<Dream>) {
        self.state.write().await.current = dream;
    }

    /// Sets the transient text filter.
    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.state.write().await.search_term = term.into();
    }

    /// Sets the transient mood filter.
    pub async fn set_selected_mood(&self, filter: MoodFilter) {
        self.state.write().await.selected_mood = filter;
    }

    /// Returns the entries passing the current filters.
    ///
    /// An entry passes when the search term is empty or matches
    /// case-insensitively against its title, content or any tag, AND the
    /// mood filter is [`MoodFilter::All`] or equals its mood exactly.
    pub async fn filtered_dreams(&self) -> Vec<Dream> {
        let state = self.state.read().await;
        let needle = state.search_term.to_lowercase();

        state
            .dreams
            .iter()
            .filter(|d| {
                let matches_search = needle.is_empty()
                    || d.title.to_lowercase().contains(&needle)
                    || d.content.to_lowercase().contains(&needle)
                    || d.tags.iter().any(|t| t.to_lowercase().contains(&needle));
                let matches_mood = match state.selected_mood {
                    MoodFilter::All => true,
                    MoodFilter::Only(mood) => d.mood == mood,
                };
                matches_search && matches_mood
            })
            .cloned()
            .collect()
    }

    /// Linear lookup by id.
    pub async fn dream_by_id(&self, id: &str) -> Option<Dream> {
        let state = self.state.read().await;
        state.dreams.iter().find(|d| d.id == id).cloned()
    }

    /// Computes the dashboard statistics as of today.
    pub async fn stats(&self) -> DreamStats {
        let state = self.state.read().await;
        compute_stats(&state.dreams, Utc::now().date_naive())
    }

    /// Counts symbol occurrences across the journal, most frequent first.
    pub async fn symbol_distribution(&self, limit: usize) -> Vec<SymbolCount> {
        let state = self.state.read().await;
        symbol_distribution(&state.dreams, limit)
    }

    /// Returns all journal entries, most recent first.
    pub async fn dreams(&self) -> Vec<Dream> {
        self.state.read().await.dreams.clone()
    }

    /// Returns the current selection, if any.
    pub async fn current_dream(&self) -> Option<Dream> {
        self.state.read().await.current.clone()
    }

    /// Returns the transient text filter.
    pub async fn search_term(&self) -> String {
        self.state.read().await.search_term.clone()
    }

    /// Returns the transient mood filter.
    pub async fn selected_mood(&self) -> MoodFilter {
        self.state.read().await.selected_mood
    }
}
