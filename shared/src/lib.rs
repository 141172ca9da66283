//! Shared utilities and common types for the Prown auth server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types resolved from the environment
//! - Outward response bodies and the fixed client-facing messages
//! - Small validation helpers

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    PasswordConfig, ServerConfig,
};
pub use errors::{error_messages, ErrorResponse, MessageResponse};
pub use utils::validation;
