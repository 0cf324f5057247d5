//! Domain-level error types.

use std::time::Duration;

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - what the application service reports to its callers.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Failed to {action}: {source}")]
    Persistence {
        action: String,
        #[source]
        source: RepoError,
    },

    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

impl DomainError {
    pub fn persistence(action: impl Into<String>, source: RepoError) -> Self {
        Self::Persistence {
            action: action.into(),
            source,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Post with id {0} not found")]
    NotFound(Uuid),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
