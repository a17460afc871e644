//! Error types for the Oneiro application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Oneiro application.
///
/// The stores themselves treat missing ids as silent no-ops; this type is
/// the error surface of the repository and service traits, where an
/// operation can actually fail.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum OneiroError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound { entity_type: String, id: String },

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OneiroError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

impl From<serde_json::Error> for OneiroError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (transitional, should be removed eventually)
impl From<anyhow::Error> for OneiroError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Conversion from String (for error messages)
impl From<String> for OneiroError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, OneiroError>`.
pub type Result<T> = std::result::Result<T, OneiroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = OneiroError::not_found("dream", "dream-42");
        assert_eq!(err.to_string(), "Entity not found: dream 'dream-42'");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_string() {
        let err: OneiroError = "boom".to_string().into();
        assert!(matches!(err, OneiroError::Internal(_)));
    }
}
