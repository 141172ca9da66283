//! Authentication configuration: session token signing and password hashing

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// JWT session token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Session token expiry time in seconds
    pub expiry_seconds: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            expiry_seconds: 3600, // 1 hour
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let expiry_seconds = std::env::var("JWT_EXPIRY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v: &i64| *v > 0)
            .unwrap_or(3600);

        Self {
            secret,
            expiry_seconds,
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 10 }
    }
}

impl PasswordConfig {
    /// Create from environment variables.
    ///
    /// Values outside bcrypt's accepted range (4..=31) fall back to the default.
    pub fn from_env() -> Self {
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|c: &u32| (4..=31).contains(c))
            .unwrap_or(10);

        Self { bcrypt_cost }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            password: PasswordConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_defaults() {
        let config = JwtConfig::default();
        assert_eq!(config.expiry_seconds, 3600);
        assert!(config.is_using_default_secret());
        assert!(!JwtConfig::new("other").is_using_default_secret());
    }

    #[test]
    fn test_password_default_cost() {
        assert_eq!(PasswordConfig::default().bcrypt_cost, 10);
    }
}
