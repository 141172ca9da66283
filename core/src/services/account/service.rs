//! Main account service implementation

use std::sync::Arc;

use crate::domain::entities::account::{Account, AccountKind, AccountProfile, NewAccount};
use crate::domain::entities::token::{SessionClaims, SessionSubject};
use crate::domain::value_objects::{SigninCredentials, SigninResult, SignupReceipt, SignupRequest};
use crate::errors::{AuthError, DomainError, DomainResult, DuplicateField, TokenError};
use crate::repositories::AccountRepository;
use crate::services::password::PasswordService;
use crate::services::token::TokenService;

/// Account service for signup, signin and profile lookup
pub struct AccountService<R: AccountRepository> {
    /// Credential store
    repository: Arc<R>,
    /// Password hasher
    password_service: Arc<PasswordService>,
    /// Session token issuer and verifier
    token_service: Arc<TokenService>,
}

impl<R: AccountRepository> AccountService<R> {
    /// Create a new account service
    ///
    /// # Arguments
    ///
    /// * `repository` - Credential store
    /// * `password_service` - Password hasher
    /// * `token_service` - Session token service
    pub fn new(
        repository: Arc<R>,
        password_service: Arc<PasswordService>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            repository,
            password_service,
            token_service,
        }
    }

    pub fn token_service(&self) -> &Arc<TokenService> {
        &self.token_service
    }

    /// Register a new account
    ///
    /// This method:
    /// 1. Checks that every field of the kind is present and non-blank
    /// 2. Rejects an email (or service ID) already used by the same kind
    /// 3. Hashes the password
    /// 4. Stores the account; a duplicate that raced past step 2 is still
    ///    reported as already existing
    ///
    /// # Returns
    ///
    /// * `Ok(SignupReceipt)` - Account created
    /// * `Err(DomainError::Validation)` - Missing fields
    /// * `Err(DomainError::Auth(AuthError::AccountAlreadyExists))` - Duplicate
    /// * `Err(DomainError::Store)` - Credential store query failure
    /// * `Err(DomainError::StoreWrite)` - Credential store insert failure
    /// * `Err(DomainError::Internal)` - Hashing failure
    pub async fn signup(&self, request: SignupRequest) -> DomainResult<SignupReceipt> {
        request.validate()?;
        let kind = request.kind();

        let candidate = request.to_new_account(String::new());
        if let Some(existing) = self.repository.find_conflict(&candidate).await? {
            let field = conflicting_field(&existing, &candidate);
            tracing::warn!(kind = %kind, field = %field, "Signup rejected, account already exists");
            return Err(AuthError::AccountAlreadyExists {
                kind,
                field: Some(field),
            }
            .into());
        }

        let password_hash = self.password_service.hash(request.password()).await?;
        let account = self
            .repository
            .create(request.to_new_account(password_hash))
            .await?;

        tracing::info!(kind = %kind, account_id = account.id(), email = %account.email(), "Account registered");

        Ok(SignupReceipt {
            id: account.id(),
            kind,
        })
    }

    /// Authenticate with email and password and issue a session token
    ///
    /// An unknown email and a wrong password produce the same
    /// `AuthError::InvalidCredentials`.
    pub async fn signin(
        &self,
        kind: AccountKind,
        credentials: SigninCredentials,
    ) -> DomainResult<SigninResult> {
        credentials.validate()?;

        let account = match self.repository.find_by_email(kind, &credentials.email).await? {
            Some(account) => account,
            None => {
                tracing::warn!(kind = %kind, email = %credentials.email, "Signin failed, no such account");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self
            .password_service
            .verify(&credentials.password, account.password_hash())
            .await
        {
            tracing::warn!(kind = %kind, email = %credentials.email, "Signin failed, wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue(&SessionSubject::from_account(&account))?;

        tracing::info!(kind = %kind, account_id = account.id(), "Signin succeeded");

        Ok(SigninResult {
            token,
            expires_in: self.token_service.session_ttl().num_seconds(),
            account: account.to_profile(),
        })
    }

    /// Verify a presented session token
    pub fn authenticate(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.token_service.verify(token)
    }

    /// Current account view for an authenticated session
    ///
    /// The account is looked up by the kind and id in the claims, so a token
    /// of one kind never resolves to an account of the other.
    ///
    /// # Returns
    ///
    /// * `Ok(AccountProfile)` - Account without its password hash
    /// * `Err(DomainError::NotFound)` - The account no longer exists
    /// * `Err(DomainError::Store)` - Credential store failure
    pub async fn profile(&self, claims: &SessionClaims) -> DomainResult<AccountProfile> {
        self.repository
            .find_by_id(claims.kind, claims.id)
            .await?
            .map(|account| account.to_profile())
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("{} {}", claims.kind, claims.id),
            })
    }
}

/// Email collisions win over service ID collisions.
///
/// Both columns compare under the store's collation, so any conflict that is
/// not on email is on the provider's service ID.
fn conflicting_field(existing: &Account, candidate: &NewAccount) -> DuplicateField {
    if existing.email().eq_ignore_ascii_case(candidate.email()) {
        return DuplicateField::Email;
    }
    match candidate.service_id() {
        Some(_) => DuplicateField::ServiceId,
        None => DuplicateField::Email,
    }
}
