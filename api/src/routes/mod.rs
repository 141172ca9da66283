//! Account route handlers
//!
//! - Signup for service providers and customers
//! - Signin issuing a session token
//! - Profile of the authenticated account

pub mod profile;
pub mod signin;
pub mod signup;

use actix_web::HttpRequest;
use std::sync::Arc;
use uuid::Uuid;

use prown_core::repositories::AccountRepository;
use prown_core::services::account::AccountService;

/// Request header carrying a caller-supplied correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Application state that holds shared services
pub struct AppState<R: AccountRepository> {
    pub account_service: Arc<AccountService<R>>,
}

impl<R: AccountRepository> AppState<R> {
    pub fn new(account_service: Arc<AccountService<R>>) -> Self {
        Self { account_service }
    }
}

/// Correlation id for log lines: the caller's `x-request-id`, or a fresh v4 UUID
pub fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
