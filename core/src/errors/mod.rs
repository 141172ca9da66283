//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, DuplicateField, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// The credential store failed to answer a query
    #[error("Store error: {message}")]
    Store { message: String },

    /// The credential store failed to insert a record, for a reason other
    /// than a uniqueness violation
    #[error("Store write error: {message}")]
    StoreWrite { message: String },

    /// Hashing, token encoding, or another local failure
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
