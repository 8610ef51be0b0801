//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was empty/missing or a value failed validation.
    ///
    /// Displays the message verbatim (e.g. "'email' should not be empty") so
    /// callers see the exact field-level diagnostic.
    #[error("{0}")]
    Validation(String),

    /// A conflict occurred (stale version / optimistic concurrency).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A command reached a dispatcher with no handler for it.
    #[error("unsupported command: {0}")]
    UnsupportedCommand(String),

    /// The identity provider rejected a user provisioning request.
    #[error("identity provider rejected provisioning: {0}")]
    Provisioning(String),

    /// The identity provider rejected a group membership change.
    #[error("identity provider rejected membership change: {0}")]
    Membership(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Validation error for a required field that arrived empty/blank.
    pub fn empty_field(field: &str) -> Self {
        Self::Validation(format!("'{field}' should not be empty"))
    }

    /// Validation error for a required field that arrived missing/null.
    pub fn null_field(field: &str) -> Self {
        Self::Validation(format!("'{field}' should not be null"))
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unsupported_command(msg: impl Into<String>) -> Self {
        Self::UnsupportedCommand(msg.into())
    }

    pub fn provisioning(msg: impl Into<String>) -> Self {
        Self::Provisioning(msg.into())
    }

    pub fn membership(msg: impl Into<String>) -> Self {
        Self::Membership(msg.into())
    }
}
