//! In-memory implementation of AccountRepository for tests and local runs

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::{Account, AccountId, AccountKind, NewAccount};
use crate::errors::{AuthError, DomainError, DuplicateField};

use super::trait_::AccountRepository;

/// In-memory account store enforcing the same uniqueness rules as the database
#[derive(Clone, Default)]
pub struct MockAccountRepository {
    state: Arc<RwLock<State>>,
}

#[derive(Default)]
struct State {
    accounts: Vec<Account>,
    /// Last id handed out per kind, like a per-table auto-increment
    last_ids: HashMap<AccountKind, AccountId>,
}

impl MockAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts of `kind`
    pub async fn count(&self, kind: AccountKind) -> usize {
        let state = self.state.read().await;
        state.accounts.iter().filter(|a| a.kind() == kind).count()
    }

    /// Remove an account, as an administrator would
    pub async fn remove(&self, kind: AccountKind, id: AccountId) -> bool {
        let mut state = self.state.write().await;
        let before = state.accounts.len();
        state.accounts.retain(|a| !(a.kind() == kind && a.id() == id));
        state.accounts.len() != before
    }

    fn collision(existing: &Account, candidate: &NewAccount) -> Option<DuplicateField> {
        if existing.kind() != candidate.kind() {
            return None;
        }
        if existing.email() == candidate.email() {
            return Some(DuplicateField::Email);
        }
        match (existing.service_id(), candidate.service_id()) {
            (Some(a), Some(b)) if a == b => Some(DuplicateField::ServiceId),
            _ => None,
        }
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_email(
        &self,
        kind: AccountKind,
        email: &str,
    ) -> Result<Option<Account>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .accounts
            .iter()
            .find(|a| a.kind() == kind && a.email() == email)
            .cloned())
    }

    async fn find_by_id(&self, kind: AccountKind, id: AccountId) -> Result<Option<Account>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .accounts
            .iter()
            .find(|a| a.kind() == kind && a.id() == id)
            .cloned())
    }

    async fn find_conflict(&self, candidate: &NewAccount) -> Result<Option<Account>, DomainError> {
        let state = self.state.read().await;
        let mut conflict = None;
        for account in state.accounts.iter() {
            match Self::collision(account, candidate) {
                Some(DuplicateField::Email) => return Ok(Some(account.clone())),
                Some(DuplicateField::ServiceId) if conflict.is_none() => {
                    conflict = Some(account.clone());
                }
                _ => {}
            }
        }
        Ok(conflict)
    }

    async fn create(&self, account: NewAccount) -> Result<Account, DomainError> {
        let mut state = self.state.write().await;
        let kind = account.kind();

        if let Some(field) = state.accounts.iter().find_map(|a| Self::collision(a, &account)) {
            return Err(DomainError::Auth(AuthError::AccountAlreadyExists {
                kind,
                field: Some(field),
            }));
        }

        // Ids are never reused, even after removal.
        let last_id = state.last_ids.entry(kind).or_insert(0);
        *last_id += 1;
        let next_id = *last_id;

        let stored = account.into_account(next_id, Utc::now());
        state.accounts.push(stored.clone());
        Ok(stored)
    }
}
