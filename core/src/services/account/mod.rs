//! Account service module
//!
//! This module provides the account flows for both account kinds:
//! - Signup with uniqueness checks and password hashing
//! - Signin issuing a session token
//! - Profile lookup for an authenticated session

mod service;

#[cfg(test)]
mod tests;

pub use service::AccountService;
