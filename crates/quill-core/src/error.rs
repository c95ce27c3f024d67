//! Domain-level error types.

use thiserror::Error;

/// Domain errors - lifecycle failures.
///
/// `Validation`, `NotFound` and `Conflict` are business outcomes the caller
/// is expected to handle. `Generation`, `Provider` and `Store` are faults.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{0}")]
    Conflict(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Store(#[from] RepoError),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// True for failures caused by the request rather than by a collaborator.
    pub fn is_business(&self) -> bool {
        matches!(
            self,
            DomainError::Validation(_) | DomainError::NotFound { .. } | DomainError::Conflict(_)
        )
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// AI provider errors.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No valid AI provider configuration found")]
    NotConfigured,

    #[error("{provider} request failed: {message}")]
    Request { provider: String, message: String },

    #[error("{provider} responded with status {status}: {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("{provider} returned an unreadable response: {message}")]
    Decode { provider: String, message: String },
}
