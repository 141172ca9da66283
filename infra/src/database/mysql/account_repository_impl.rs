//! MySQL implementation of the AccountRepository trait.
//!
//! Each account kind lives in its own table. Uniqueness of email (and of
//! service ID for providers) is enforced by unique keys; a rejected insert is
//! reported as `AuthError::AccountAlreadyExists`.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sqlx::mysql::{MySqlDatabaseError, MySqlRow};
use sqlx::{MySqlPool, Row};

use prown_core::domain::entities::account::{
    Account, AccountId, AccountKind, CustomerAccount, NewAccount, ServiceProviderAccount,
};
use prown_core::errors::{AuthError, DomainError, DuplicateField};
use prown_core::repositories::AccountRepository;

/// MySQL server error number for a duplicate unique key
const ER_DUP_ENTRY: u16 = 1062;

const SELECT_PROVIDER_BY_EMAIL: &str = r#"
    SELECT id, service_id, email, phone_number, password, created_at
    FROM service_providers
    WHERE email = ?
    LIMIT 1
"#;

const SELECT_PROVIDER_BY_ID: &str = r#"
    SELECT id, service_id, email, phone_number, password, created_at
    FROM service_providers
    WHERE id = ?
    LIMIT 1
"#;

const SELECT_PROVIDER_CONFLICT: &str = r#"
    SELECT id, service_id, email, phone_number, password, created_at
    FROM service_providers
    WHERE email = ? OR service_id = ?
    ORDER BY (email = ?) DESC
    LIMIT 1
"#;

const INSERT_PROVIDER: &str = r#"
    INSERT INTO service_providers (service_id, email, phone_number, password, created_at)
    VALUES (?, ?, ?, ?, ?)
"#;

const SELECT_CUSTOMER_BY_EMAIL: &str = r#"
    SELECT id, name, email, phone, password, created_at
    FROM customers
    WHERE email = ?
    LIMIT 1
"#;

const SELECT_CUSTOMER_BY_ID: &str = r#"
    SELECT id, name, email, phone, password, created_at
    FROM customers
    WHERE id = ?
    LIMIT 1
"#;

const INSERT_CUSTOMER: &str = r#"
    INSERT INTO customers (name, email, phone, password, created_at)
    VALUES (?, ?, ?, ?, ?)
"#;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
    where
        T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
    {
        row.try_get(name).map_err(|e| DomainError::Store {
            message: format!("Failed to get {}: {}", name, e),
        })
    }

    /// Convert database row to Account entity
    fn row_to_account(kind: AccountKind, row: &MySqlRow) -> Result<Account, DomainError> {
        let id: AccountId = Self::column(row, "id")?;
        let created_at: DateTime<Utc> = Self::column(row, "created_at")?;

        Ok(match kind {
            AccountKind::ServiceProvider => Account::ServiceProvider(ServiceProviderAccount {
                id,
                service_id: Self::column(row, "service_id")?,
                email: Self::column(row, "email")?,
                phone_number: Self::column(row, "phone_number")?,
                password_hash: Self::column(row, "password")?,
                created_at,
            }),
            AccountKind::Customer => Account::Customer(CustomerAccount {
                id,
                name: Self::column(row, "name")?,
                email: Self::column(row, "email")?,
                phone: Self::column(row, "phone")?,
                password_hash: Self::column(row, "password")?,
                created_at,
            }),
        })
    }

    fn query_failed(e: sqlx::Error) -> DomainError {
        tracing::error!(error = %e, "Account query failed");
        DomainError::Store {
            message: format!("Database query failed: {}", e),
        }
    }

    /// Map an insert failure, recognizing duplicate-key rejections
    fn insert_failed(kind: AccountKind, e: sqlx::Error) -> DomainError {
        let duplicate_key = e
            .as_database_error()
            .and_then(|db| db.try_downcast_ref::<MySqlDatabaseError>())
            .filter(|db| db.number() == ER_DUP_ENTRY)
            .map(|db| duplicate_field(db.message()));

        match duplicate_key {
            Some(field) => {
                tracing::info!(kind = %kind, "Insert rejected by unique key");
                DomainError::Auth(AuthError::AccountAlreadyExists { kind, field })
            }
            None => {
                tracing::error!(kind = %kind, error = %e, "Account insert failed");
                DomainError::StoreWrite {
                    message: format!("Database insertion failed: {}", e),
                }
            }
        }
    }

    async fn fetch_one_of(
        &self,
        kind: AccountKind,
        query: sqlx::query::Query<'_, sqlx::MySql, sqlx::mysql::MySqlArguments>,
    ) -> Result<Option<Account>, DomainError> {
        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::query_failed)?;

        row.map(|row| Self::row_to_account(kind, &row)).transpose()
    }
}

/// Recover the violated unique field from a duplicate-entry message such as
/// `Duplicate entry 'a@x.com' for key 'service_providers.email'`
fn duplicate_field(message: &str) -> Option<DuplicateField> {
    let key = message.rsplit("for key '").next()?.trim_end_matches('\'');
    let key = key.rsplit('.').next().unwrap_or(key);

    match key {
        "email" => Some(DuplicateField::Email),
        "service_id" => Some(DuplicateField::ServiceId),
        _ => None,
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(
        &self,
        kind: AccountKind,
        email: &str,
    ) -> Result<Option<Account>, DomainError> {
        let query = match kind {
            AccountKind::ServiceProvider => SELECT_PROVIDER_BY_EMAIL,
            AccountKind::Customer => SELECT_CUSTOMER_BY_EMAIL,
        };

        self.fetch_one_of(kind, sqlx::query(query).bind(email)).await
    }

    async fn find_by_id(&self, kind: AccountKind, id: AccountId) -> Result<Option<Account>, DomainError> {
        let query = match kind {
            AccountKind::ServiceProvider => SELECT_PROVIDER_BY_ID,
            AccountKind::Customer => SELECT_CUSTOMER_BY_ID,
        };

        self.fetch_one_of(kind, sqlx::query(query).bind(id)).await
    }

    async fn find_conflict(&self, candidate: &NewAccount) -> Result<Option<Account>, DomainError> {
        match candidate {
            NewAccount::ServiceProvider(p) => {
                let query = sqlx::query(SELECT_PROVIDER_CONFLICT)
                    .bind(&p.email)
                    .bind(&p.service_id)
                    .bind(&p.email);
                self.fetch_one_of(AccountKind::ServiceProvider, query).await
            }
            NewAccount::Customer(c) => {
                let query = sqlx::query(SELECT_CUSTOMER_BY_EMAIL).bind(&c.email);
                self.fetch_one_of(AccountKind::Customer, query).await
            }
        }
    }

    async fn create(&self, account: NewAccount) -> Result<Account, DomainError> {
        let kind = account.kind();
        let created_at = row_timestamp(Utc::now());

        let query = match &account {
            NewAccount::ServiceProvider(p) => sqlx::query(INSERT_PROVIDER)
                .bind(&p.service_id)
                .bind(&p.email)
                .bind(&p.phone_number)
                .bind(&p.password_hash)
                .bind(created_at),
            NewAccount::Customer(c) => sqlx::query(INSERT_CUSTOMER)
                .bind(&c.name)
                .bind(&c.email)
                .bind(&c.phone)
                .bind(&c.password_hash)
                .bind(created_at),
        };

        let result = query
            .execute(&self.pool)
            .await
            .map_err(|e| Self::insert_failed(kind, e))?;
        let id = result.last_insert_id();

        tracing::debug!(kind = %kind, account_id = id, "Inserted account row");

        Ok(account.into_account(id, created_at))
    }
}

/// `TIMESTAMP` columns keep whole seconds
fn row_timestamp(now: DateTime<Utc>) -> DateTime<Utc> {
    now.trunc_subsecs(0)
}
