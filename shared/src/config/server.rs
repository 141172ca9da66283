//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Origins allowed by CORS outside development; empty allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// CORS preflight cache lifetime in seconds
    #[serde(default = "default_cors_max_age")]
    pub cors_max_age: usize,
}

fn default_cors_max_age() -> usize {
    3600
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 5000,
            workers: 0,
            allowed_origins: Vec::new(),
            cors_max_age: default_cors_max_age(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);
        let workers = std::env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_default();
        let cors_max_age = std::env::var("CORS_MAX_AGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.cors_max_age);

        Self {
            host,
            port,
            workers,
            allowed_origins,
            cors_max_age,
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma-separated origin list, dropping blanks
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        assert_eq!(ServerConfig::default().bind_address(), "127.0.0.1:5000");
        assert_eq!(ServerConfig::new("0.0.0.0", 8080).bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("https://a.com, ,https://b.com "),
            vec!["https://a.com".to_string(), "https://b.com".to_string()]
        );
        assert!(parse_origins("").is_empty());
    }
}
