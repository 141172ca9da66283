//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Session token signing and password hashing
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server bind address

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, PasswordConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first when present;
    /// variables already set in the process environment take precedence.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Whether this configuration may be used to start the server.
    ///
    /// Production refuses to run with the built-in development secret.
    pub fn check(&self) -> Result<(), String> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err("JWT_SECRET must be set in production".to_string());
        }
        if self.auth.jwt.secret.is_empty() {
            return Err("JWT_SECRET must not be empty".to_string());
        }
        Ok(())
    }
}
