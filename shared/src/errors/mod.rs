//! Outward response bodies and the fixed client-facing messages

use serde::{Deserialize, Serialize};

/// Response body for client errors and acknowledgments: `{ "message": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for server-side failures: `{ "error": ... }`
///
/// The text is one of the fixed [`error_messages`]; internal error details
/// are logged, never placed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Client-facing messages shared by the router and its tests
pub mod error_messages {
    pub const DATABASE_QUERY_FAILED: &str = "Database query failed";
    pub const DATABASE_INSERTION_FAILED: &str = "Database insertion failed";
    pub const SERVER_ERROR: &str = "Server error";
    pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
    pub const CREDENTIALS_REQUIRED: &str = "Email and password are required";
    pub const ACCESS_TOKEN_REQUIRED: &str = "Access token required";
    pub const INVALID_OR_EXPIRED_TOKEN: &str = "Invalid or expired token";
    pub const USER_NOT_FOUND: &str = "User not found";
    pub const NOT_FOUND: &str = "The requested resource was not found";
    pub const WELCOME: &str = "Welcome to the Authentication API! Available endpoints: \
/service-provider/signup, /service-provider/signin, /customer/signup, /customer/signin";
}
