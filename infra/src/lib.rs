//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Prown auth backend.
//! It provides concrete implementations for the interfaces declared in
//! `prown_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL connection pool, table bootstrap, and the MySQL
//!   credential store using SQLx

// Re-export core types for convenience
pub use prown_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Configuration consumed by infrastructure services
pub mod config {
    pub use prown_shared::config::DatabaseConfig;
}

pub use database::{DatabasePool, MySqlAccountRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
