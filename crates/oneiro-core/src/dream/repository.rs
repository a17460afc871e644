//! Dream repository trait.
//!
//! Defines the interface for dream persistence backends.

use async_trait::async_trait;

use super::model::{Dream, DreamPatch, NewDream};
use crate::error::Result;

/// An abstract repository for dream records.
///
/// This trait decouples the journal from the specific storage mechanism.
/// The store keeps its own in-memory copy of the journal; a repository is
/// the optional backend it can be hydrated from and written through to.
#[async_trait]
pub trait DreamRepository: Send + Sync {
    /// Returns all dreams for a user, most recent first.
    async fn find_all(&self, user_id: &str) -> Result<Vec<Dream>>;

    /// Stores a new dream, assigning id and timestamps.
    async fn add(&self, new: NewDream) -> Result<Dream>;

    /// Applies a partial update.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Dream))`: The updated record
    /// - `Ok(None)`: No record with that id
    /// - `Err(_)`: Error occurred during the update
    async fn update(&self, id: &str, patch: DreamPatch) -> Result<Option<Dream>>;

    /// Deletes a dream.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: A record was removed
    /// - `Ok(false)`: No record with that id
    /// - `Err(_)`: Error occurred during deletion
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Case-insensitive search over title, content, tags and symbols.
    async fn search(&self, query: &str) -> Result<Vec<Dream>>;
}
