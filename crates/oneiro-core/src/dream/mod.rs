//! Dream journal domain module.
//!
//! # Module Structure
//!
//! - `model`: the [`Dream`] entity and its inputs ([`NewDream`], [`DreamPatch`])
//! - `store`: the state-owning [`DreamStore`] service
//! - `stats`: aggregate statistics over the journal
//! - `repository`: repository trait for optional persistence backends

mod model;
mod repository;
mod stats;
mod store;

// Re-export public API
pub use model::{Dream, DreamPatch, Mood, MoodFilter, NewDream};
pub use repository::DreamRepository;
pub use stats::{DreamStats, SymbolCount, compute_stats, symbol_distribution};
pub use store::DreamStore;
