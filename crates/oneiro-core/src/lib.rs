//! Core domain layer for Oneiro.
//!
//! This crate owns the two state containers the dashboard is built on:
//! the dream journal ([`dream::DreamStore`]) and the chat sessions
//! ([`chat::ChatStore`]), together with the canned-response engine that
//! stands in for a real interpretation backend.

pub mod chat;
pub mod config;
pub mod dream;
pub mod error;
pub mod responder;
pub mod user;

// Re-export common error type
pub use error::OneiroError;
