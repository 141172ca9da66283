//! Error types for account authentication, session tokens and input validation
//!
//! The `Display` text of client-facing variants is the exact message the
//! router returns, so the presentation layer can forward it unchanged.

use std::fmt;

use thiserror::Error;

use crate::domain::entities::account::AccountKind;

/// Unique field that collided with an existing account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Email,
    ServiceId,
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateField::Email => f.write_str("email"),
            DuplicateField::ServiceId => f.write_str("service ID"),
        }
    }
}

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Signup collided with an existing account of the same kind
    #[error("{}", already_exists_message(.kind, .field))]
    AccountAlreadyExists {
        kind: AccountKind,
        /// `None` when the store could not say which constraint fired
        field: Option<DuplicateField>,
    },

    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,
}

fn already_exists_message(kind: &AccountKind, field: &Option<DuplicateField>) -> String {
    match field {
        Some(field) => format!("{} with this {} already exists", kind.display_name(), field),
        None => format!("{} already exists", kind.display_name()),
    }
}

/// Session token failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Token signature mismatch")]
    SignatureMismatch,

    #[error("Token expired")]
    Expired,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required: {fields}")]
    AllFieldsRequired { fields: String },

    #[error("Email and password are required")]
    CredentialsRequired,

    #[error("Field too long: {field} (max: {max})")]
    TooLong { field: String, max: usize },

    #[error("Malformed request body")]
    MalformedBody,
}
