//! Results returned by the account service.

use serde::{Deserialize, Serialize};

use crate::domain::entities::account::{AccountId, AccountKind, AccountProfile};

/// Acknowledgment of a successful signup; never carries the password or hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupReceipt {
    pub id: AccountId,
    pub kind: AccountKind,
}

/// Successful signin: the session token and the sanitized account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninResult {
    /// Signed session token
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,

    /// Account view without the password hash
    pub account: AccountProfile,
}
