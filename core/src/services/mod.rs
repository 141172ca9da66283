//! Business services containing domain logic and use cases.

pub mod account;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use account::AccountService;
pub use password::PasswordService;
pub use token::{TokenService, TokenServiceConfig};
