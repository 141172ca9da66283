//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod credentials;

// Re-export commonly used types
pub use auth_response::{SigninResult, SignupReceipt};
pub use credentials::{CustomerSignup, ServiceProviderSignup, SigninCredentials, SignupRequest};
