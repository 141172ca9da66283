//! Credential store interface for account persistence.
//!
//! The store owns identifier assignment and the uniqueness constraints on
//! identifying fields. The account service never locks; it relies on the
//! store to reject a duplicate that slipped past its own pre-check.

use async_trait::async_trait;

use crate::domain::entities::account::{Account, AccountId, AccountKind, NewAccount};
use crate::errors::DomainError;

/// Repository trait for account persistence operations
///
/// Every operation is scoped to one [`AccountKind`]; implementations map the
/// kind to a fixed storage location and never derive it from request data.
///
/// Failures of the underlying store are reported as [`DomainError::Store`],
/// or [`DomainError::StoreWrite`] for a failed insert.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account of `kind` by email
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account of that kind uses the email
    /// * `Err(DomainError)` - Store failure
    async fn find_by_email(
        &self,
        kind: AccountKind,
        email: &str,
    ) -> Result<Option<Account>, DomainError>;

    /// Find an account of `kind` by its store-assigned id
    async fn find_by_id(&self, kind: AccountKind, id: AccountId) -> Result<Option<Account>, DomainError>;

    /// Find an existing account that shares a unique field with `candidate`
    ///
    /// Service providers collide on email or service ID, customers on email.
    /// When several rows collide, the one matching the email is preferred.
    async fn find_conflict(&self, candidate: &NewAccount) -> Result<Option<Account>, DomainError>;

    /// Insert a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account with its assigned id
    /// * `Err(DomainError::Auth(AuthError::AccountAlreadyExists { .. }))` - A
    ///   uniqueness constraint rejected the insert
    /// * `Err(DomainError::StoreWrite { .. })` - Any other store failure
    ///
    /// [`AuthError::AccountAlreadyExists`]: crate::errors::AuthError::AccountAlreadyExists
    async fn create(&self, account: NewAccount) -> Result<Account, DomainError>;
}
