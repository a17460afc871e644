//! Canned-response engine for the chat assistant.
//!
//! The assistant does no real language understanding: incoming text is
//! classified by an ordered keyword scan and answered from a static,
//! locale-keyed reply table. Classification and text lookup are separate
//! functions so each can be tested on its own.
//!
//! # Module Structure
//!
//! - `classify`: keyword rules and [`classify`]
//! - `replies`: locale-keyed reply and welcome texts
//! - `service`: the [`InsightService`] trait for pluggable backends

mod classify;
mod replies;
mod service;

// Re-export public API
pub use classify::{ReplyCategory, classify};
pub use replies::{Locale, response_text, welcome_text};
pub use service::InsightService;
