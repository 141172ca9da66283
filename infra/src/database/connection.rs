//! Database connection pool management
//!
//! Wraps a SQLx MySQL pool configured from [`DatabaseConfig`], with the
//! startup bootstrap of the account tables.

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    ConnectOptions, MySqlPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::config::DatabaseConfig;
use crate::database::schema;
use crate::InfrastructureError;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx MySQL connection pool
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Database pool or error
    ///
    /// # Example
    /// ```no_run
    /// use prown_infra::config::DatabaseConfig;
    /// use prown_infra::database::connection::DatabasePool;
    ///
    /// async fn create_pool() -> Result<DatabasePool, Box<dyn std::error::Error>> {
    ///     let config = DatabaseConfig::new("mysql://root@localhost:3306/prowndatabase");
    ///     let pool = DatabasePool::new(config).await?;
    ///     Ok(pool)
    /// }
    /// ```
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            "Creating database connection pool with max_connections: {}",
            config.max_connections
        );

        let connect_options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(
                LevelFilter::Warn,
                Duration::from_millis(config.slow_query_threshold),
            );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create database pool: {}", e);
                InfrastructureError::Database(e)
            })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Create the account tables if they do not exist
    ///
    /// Safe to run on every startup; existing tables and rows are left as
    /// they are.
    pub async fn ensure_schema(&self) -> Result<(), InfrastructureError> {
        tracing::info!("Ensuring account tables exist");

        for statement in schema::BOOTSTRAP {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to create account table: {}", e);
                    InfrastructureError::Database(e)
                })?;
        }

        tracing::info!("Account tables ready");
        Ok(())
    }

    /// Close all connections in the pool
    ///
    /// This should be called during application shutdown.
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
