//! Error types for registry operations
//!
//! Every error is non-fatal and reported synchronously to the caller;
//! a failed operation leaves the registry unchanged.

use thiserror::Error;

use crate::core::types::IdeaId;

/// Errors produced by registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Validation error: {field} {message}")]
    Validation { field: String, message: String },

    #[error("No idea with id {id}")]
    NotFound { id: IdeaId },
}

impl RegistryError {
    /// Create a new validation error for a draft field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new not-found error for an unknown idea id
    pub fn not_found(id: IdeaId) -> Self {
        Self::NotFound { id }
    }
}
