//! # Prown Core
//!
//! Core business logic and domain layer for the Prown auth backend.
//! This crate contains the account entities, the credential store interface,
//! password hashing, session token issuance, and the account service that
//! orchestrates signup, signin and profile lookup.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::entities::{Account, AccountId, AccountKind, AccountProfile, SessionClaims};
pub use domain::value_objects::{SigninCredentials, SigninResult, SignupReceipt, SignupRequest};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{AccountRepository, MockAccountRepository};
pub use services::{AccountService, PasswordService, TokenService, TokenServiceConfig};
