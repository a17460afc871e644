//! Infrastructure layer for Oneiro.
//!
//! This crate provides the mock backend collaborators the stores can be
//! wired to: an in-memory dream repository seeded with sample journal
//! entries and an insight service answering from the canned reply table,
//! both with simulated network latency.

pub mod mock_dream_repository;
pub mod mock_insight_service;
pub mod seed;

pub use mock_dream_repository::MockDreamRepository;
pub use mock_insight_service::MockInsightService;
