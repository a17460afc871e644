//! Journal use case: the dream store wired to a persistence backend.

use std::sync::Arc;

use oneiro_core::dream::{Dream, DreamPatch, DreamRepository, DreamStore, NewDream};
use oneiro_core::error::Result;
use oneiro_infrastructure::MockDreamRepository;

/// Coordinates the in-process [`DreamStore`] with a [`DreamRepository`]
/// backend.
///
/// The store stays the authoritative copy the UI reads from; the use case
/// hydrates it from the backend on startup and writes journal changes
/// through to both.
pub struct JournalUseCase {
    store: DreamStore,
    repository: Arc<dyn DreamRepository>,
}

impl JournalUseCase {
    /// Creates a use case backed by the seeded mock repository.
    pub fn new() -> Self {
        Self::with_repository(Arc::new(MockDreamRepository::seeded()))
    }

    /// Creates a use case with a custom backend.
    pub fn with_repository(repository: Arc<dyn DreamRepository>) -> Self {
        Self {
            store: DreamStore::new(),
            repository,
        }
    }

    /// The store presentation components read from.
    pub fn store(&self) -> &DreamStore {
        &self.store
    }

    /// Hydrates the store with the user's journal from the backend.
    ///
    /// # Returns
    ///
    /// The number of records loaded.
    pub async fn load_user_dreams(&self, user_id: &str) -> Result<usize> {
        let dreams = self.repository.find_all(user_id).await?;
        let count = dreams.len();
        self.store.hydrate(dreams).await;
        tracing::info!(user_id = %user_id, count, "journal loaded");
        Ok(count)
    }

    /// Records a new dream in the backend and mirrors it into the store.
    ///
    /// The backend assigns id and timestamps, so both copies agree.
    pub async fn record_dream(&self, new: NewDream) -> Result<Dream> {
        let dream = self.repository.add(new).await?;
        self.store.adopt_dream(dream.clone()).await;
        Ok(dream)
    }

    /// Applies a partial update in the backend and the store.
    ///
    /// # Returns
    ///
    /// The backend's updated record, or `None` when the id is unknown
    /// (in which case the store is left untouched as well).
    pub async fn revise_dream(&self, id: &str, patch: DreamPatch) -> Result<Option<Dream>> {
        let updated = self.repository.update(id, patch.clone()).await?;
        if updated.is_some() {
            self.store.update_dream(id, patch).await;
        }
        Ok(updated)
    }

    /// Deletes a dream from the backend and the store.
    ///
    /// # Returns
    ///
    /// Whether the backend removed a record.
    pub async fn discard_dream(&self, id: &str) -> Result<bool> {
        let removed = self.repository.delete(id).await?;
        if removed {
            self.store.delete_dream(id).await;
        }
        Ok(removed)
    }

    /// Full-journal search against the backend (matches symbols too,
    /// unlike the store's view filter).
    pub async fn search_backend(&self, query: &str) -> Result<Vec<Dream>> {
        self.repository.search(query).await
    }
}

impl Default for JournalUseCase {
    fn default() -> Self {
        Self::new()
    }
}
