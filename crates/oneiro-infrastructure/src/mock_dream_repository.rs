//! In-memory dream repository implementation.
//!
//! Stands in for a real persistence backend: keeps records in memory,
//! simulates network latency on every call, and seeds itself with the
//! sample journal so the dashboard has data on first launch.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use oneiro_core::dream::{Dream, DreamPatch, DreamRepository, NewDream};
use oneiro_core::error::Result;

use crate::seed::sample_dreams;

/// Insight placeholder attached to entries created without one.
const PENDING_INSIGHT: &str = "AI analysis will be available shortly...";

/// In-memory [`DreamRepository`] with simulated latency.
#[derive(Clone)]
pub struct MockDreamRepository {
    dreams: Arc<RwLock<Vec<Dream>>>,
    latency: Duration,
}

impl MockDreamRepository {
    /// Creates a repository seeded with the sample journal.
    pub fn seeded() -> Self {
        Self {
            dreams: Arc::new(RwLock::new(sample_dreams())),
            latency: Duration::from_millis(300),
        }
    }

    /// Creates an empty repository.
    pub fn empty() -> Self {
        Self {
            dreams: Arc::new(RwLock::new(Vec::new())),
            latency: Duration::from_millis(300),
        }
    }

    /// Overrides the simulated per-call latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MockDreamRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl DreamRepository for MockDreamRepository {
    async fn find_all(&self, user_id: &str) -> Result<Vec<Dream>> {
        self.simulate_latency().await;
        tracing::debug!(user_id = %user_id, "listing dreams");

        let dreams = self.dreams.read().await;
        let mut all = dreams.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn add(&self, new: NewDream) -> Result<Dream> {
        self.simulate_latency().await;

        let now = Utc::now();
        let dream = Dream {
            id: format!("dream-{}", Uuid::new_v4()),
            title: new.title,
            content: new.content,
            date: new.date,
            mood: new.mood,
            tags: new.tags,
            symbols: new.symbols,
            clarity: new.clarity,
            lucid: new.lucid,
            ai_insight: new.ai_insight.or_else(|| Some(PENDING_INSIGHT.to_string())),
            created_at: now,
            updated_at: now,
        };

        let mut dreams = self.dreams.write().await;
        dreams.insert(0, dream.clone());
        tracing::debug!(dream_id = %dream.id, "dream stored");
        Ok(dream)
    }

    async fn update(&self, id: &str, patch: DreamPatch) -> Result<Option<Dream>> {
        self.simulate_latency().await;

        let mut dreams = self.dreams.write().await;
        let Some(index) = dreams.iter().position(|d| d.id == id) else {
            return Ok(None);
        };
        let dream = &mut dreams[index];
        patch.apply_to(dream);
        dream.updated_at = Utc::now();
        tracing::debug!(dream_id = %id, "dream updated in backend");
        Ok(Some(dream.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        self.simulate_latency().await;

        let mut dreams = self.dreams.write().await;
        let before = dreams.len();
        dreams.retain(|d| d.id != id);
        let removed = dreams.len() != before;
        if removed {
            tracing::debug!(dream_id = %id, "dream removed from backend");
        }
        Ok(removed)
    }

    async fn search(&self, query: &str) -> Result<Vec<Dream>> {
        self.simulate_latency().await;

        let needle = query.to_lowercase();
        let dreams = self.dreams.read().await;
        Ok(dreams
            .iter()
            .filter(|d| {
                d.title.to_lowercase().contains(&needle)
                    || d.content.to_lowercase().contains(&needle)
                    || d.tags.iter().any(|t| t.to_lowercase().contains(&needle))
                    || d.symbols.iter().any(|s| s.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}
