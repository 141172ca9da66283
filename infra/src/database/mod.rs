//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Idempotent bootstrap of the account tables
//! - The MySQL credential store

pub mod connection;
pub mod mysql;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::MySqlAccountRepository;
