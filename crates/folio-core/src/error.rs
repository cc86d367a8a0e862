//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A profile was not found.
    #[error("profile not found: {0}")]
    ProfileNotFound(Uuid),

    /// The email address is already taken by another profile.
    #[error("email already in use: {0}")]
    DuplicateEmail(String),

    /// A store/persistence error.
    #[error("store error: {0}")]
    Store(String),
}
