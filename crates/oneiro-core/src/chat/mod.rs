//! Chat domain module.
//!
//! # Module Structure
//!
//! - `message`: conversation turn types ([`MessageRole`], [`Message`])
//! - `model`: the [`ChatSession`] entity
//! - `store`: the state-owning [`ChatStore`] service

mod message;
mod model;
mod store;

// Re-export public API
pub use message::{Message, MessageRole};
pub use model::ChatSession;
pub use store::ChatStore;
