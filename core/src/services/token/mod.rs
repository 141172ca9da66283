//! Token service module for session JWTs
//!
//! This module handles:
//! - Signing session tokens that embed the account identity
//! - Verifying presented tokens and classifying failures as malformed,
//!   signature mismatch, or expired

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
