//! Repository doubles for account service tests

use async_trait::async_trait;

use crate::domain::entities::account::{Account, AccountId, AccountKind, NewAccount};
use crate::errors::DomainError;
use crate::repositories::{AccountRepository, MockAccountRepository};

/// Store whose every call fails, like an unreachable database
pub struct FailingAccountRepository;

fn store_down() -> DomainError {
    DomainError::Store {
        message: "connection refused".to_string(),
    }
}

#[async_trait]
impl AccountRepository for FailingAccountRepository {
    async fn find_by_email(&self, _: AccountKind, _: &str) -> Result<Option<Account>, DomainError> {
        Err(store_down())
    }

    async fn find_by_id(&self, _: AccountKind, _: AccountId) -> Result<Option<Account>, DomainError> {
        Err(store_down())
    }

    async fn find_conflict(&self, _: &NewAccount) -> Result<Option<Account>, DomainError> {
        Err(store_down())
    }

    async fn create(&self, _: NewAccount) -> Result<Account, DomainError> {
        Err(DomainError::StoreWrite {
            message: "connection refused".to_string(),
        })
    }
}

/// Store that answers queries but fails every insert
pub struct ReadOnlyAccountRepository;

#[async_trait]
impl AccountRepository for ReadOnlyAccountRepository {
    async fn find_by_email(&self, _: AccountKind, _: &str) -> Result<Option<Account>, DomainError> {
        Ok(None)
    }

    async fn find_by_id(&self, _: AccountKind, _: AccountId) -> Result<Option<Account>, DomainError> {
        Ok(None)
    }

    async fn find_conflict(&self, _: &NewAccount) -> Result<Option<Account>, DomainError> {
        Ok(None)
    }

    async fn create(&self, _: NewAccount) -> Result<Account, DomainError> {
        Err(DomainError::StoreWrite {
            message: "table is read only".to_string(),
        })
    }
}

/// Store whose pre-check never sees a conflict, as when a concurrent signup
/// commits between the check and the insert
pub struct RacingAccountRepository {
    pub inner: MockAccountRepository,
}

#[async_trait]
impl AccountRepository for RacingAccountRepository {
    async fn find_by_email(
        &self,
        kind: AccountKind,
        email: &str,
    ) -> Result<Option<Account>, DomainError> {
        self.inner.find_by_email(kind, email).await
    }

    async fn find_by_id(&self, kind: AccountKind, id: AccountId) -> Result<Option<Account>, DomainError> {
        self.inner.find_by_id(kind, id).await
    }

    async fn find_conflict(&self, _: &NewAccount) -> Result<Option<Account>, DomainError> {
        Ok(None)
    }

    async fn create(&self, account: NewAccount) -> Result<Account, DomainError> {
        self.inner.create(account).await
    }
}

/// Store holding one service provider whose unique columns compare
/// case-insensitively, like MySQL's default collation
pub struct CaseFoldingAccountRepository {
    pub existing: Account,
}

impl CaseFoldingAccountRepository {
    fn collides(&self, candidate: &NewAccount) -> bool {
        if self.existing.kind() != candidate.kind() {
            return false;
        }
        let same_service_id = match (self.existing.service_id(), candidate.service_id()) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        };
        same_service_id || self.existing.email().eq_ignore_ascii_case(candidate.email())
    }
}

#[async_trait]
impl AccountRepository for CaseFoldingAccountRepository {
    async fn find_by_email(&self, kind: AccountKind, email: &str) -> Result<Option<Account>, DomainError> {
        Ok(Some(self.existing.clone())
            .filter(|a| a.kind() == kind && a.email().eq_ignore_ascii_case(email)))
    }

    async fn find_by_id(&self, kind: AccountKind, id: AccountId) -> Result<Option<Account>, DomainError> {
        Ok(Some(self.existing.clone()).filter(|a| a.kind() == kind && a.id() == id))
    }

    async fn find_conflict(&self, candidate: &NewAccount) -> Result<Option<Account>, DomainError> {
        Ok(Some(self.existing.clone()).filter(|_| self.collides(candidate)))
    }

    async fn create(&self, _: NewAccount) -> Result<Account, DomainError> {
        Err(DomainError::StoreWrite {
            message: "Duplicate entry".to_string(),
        })
    }
}
