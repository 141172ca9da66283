//! Configuration for the token service

use jsonwebtoken::Algorithm;
use prown_shared::config::JwtConfig;

use crate::domain::entities::token::SESSION_TOKEN_EXPIRY_SECONDS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Session token expiry in seconds
    pub expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            algorithm: Algorithm::HS256,
            expiry_seconds: if config.expiry_seconds > 0 {
                config.expiry_seconds
            } else {
                SESSION_TOKEN_EXPIRY_SECONDS
            },
        }
    }
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            expiry_seconds: SESSION_TOKEN_EXPIRY_SECONDS,
        }
    }

    pub fn with_expiry_seconds(mut self, seconds: i64) -> Self {
        self.expiry_seconds = seconds;
        self
    }
}
