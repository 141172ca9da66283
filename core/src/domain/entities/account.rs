//! Account entities for the two closed account kinds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned account identifier
pub type AccountId = u64;

/// The closed set of account categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// A business offering services
    ServiceProvider,
    /// An individual consuming services
    Customer,
}

impl AccountKind {
    /// Wire name used in tokens and responses
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::ServiceProvider => "service_provider",
            AccountKind::Customer => "customer",
        }
    }

    /// Human-readable name used at the start of client messages
    pub fn display_name(&self) -> &'static str {
        match self {
            AccountKind::ServiceProvider => "Service provider",
            AccountKind::Customer => "Customer",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service_provider" => Ok(AccountKind::ServiceProvider),
            "customer" => Ok(AccountKind::Customer),
            _ => Err(format!("Invalid account kind: {}", s)),
        }
    }
}

/// A registered service provider
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceProviderAccount {
    pub id: AccountId,
    /// Business identifier, unique across service providers
    pub service_id: String,
    /// Unique across service providers
    pub email: String,
    pub phone_number: String,
    /// bcrypt digest of the password
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A registered customer
#[derive(Clone, PartialEq, Eq)]
pub struct CustomerAccount {
    pub id: AccountId,
    pub name: String,
    /// Unique across customers
    pub email: String,
    pub phone: String,
    /// bcrypt digest of the password
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

// Hashes stay out of logs.
impl fmt::Debug for ServiceProviderAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceProviderAccount")
            .field("id", &self.id)
            .field("service_id", &self.service_id)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl fmt::Debug for CustomerAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerAccount")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// A stored account of either kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    ServiceProvider(ServiceProviderAccount),
    Customer(CustomerAccount),
}

impl Account {
    pub fn kind(&self) -> AccountKind {
        match self {
            Account::ServiceProvider(_) => AccountKind::ServiceProvider,
            Account::Customer(_) => AccountKind::Customer,
        }
    }

    pub fn id(&self) -> AccountId {
        match self {
            Account::ServiceProvider(a) => a.id,
            Account::Customer(a) => a.id,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Account::ServiceProvider(a) => &a.email,
            Account::Customer(a) => &a.email,
        }
    }

    /// Business identifier; only service providers carry one
    pub fn service_id(&self) -> Option<&str> {
        match self {
            Account::ServiceProvider(a) => Some(&a.service_id),
            Account::Customer(_) => None,
        }
    }

    pub fn password_hash(&self) -> &str {
        match self {
            Account::ServiceProvider(a) => &a.password_hash,
            Account::Customer(a) => &a.password_hash,
        }
    }

    /// Sanitized view of the account, without the password hash
    pub fn to_profile(&self) -> AccountProfile {
        match self {
            Account::ServiceProvider(a) => AccountProfile::ServiceProvider {
                id: a.id,
                service_id: a.service_id.clone(),
                email: a.email.clone(),
                phone_number: a.phone_number.clone(),
                created_at: a.created_at,
            },
            Account::Customer(a) => AccountProfile::Customer {
                id: a.id,
                name: a.name.clone(),
                email: a.email.clone(),
                phone: a.phone.clone(),
                created_at: a.created_at,
            },
        }
    }
}

/// Account view returned to clients.
///
/// Serializes with a `type` tag carrying the account kind:
/// `{"type":"customer","id":1,"name":...,"email":...,"phone":...,"created_at":...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountProfile {
    ServiceProvider {
        id: AccountId,
        service_id: String,
        email: String,
        phone_number: String,
        created_at: DateTime<Utc>,
    },
    Customer {
        id: AccountId,
        name: String,
        email: String,
        phone: String,
        created_at: DateTime<Utc>,
    },
}

impl AccountProfile {
    pub fn id(&self) -> AccountId {
        match self {
            AccountProfile::ServiceProvider { id, .. } | AccountProfile::Customer { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> AccountKind {
        match self {
            AccountProfile::ServiceProvider { .. } => AccountKind::ServiceProvider,
            AccountProfile::Customer { .. } => AccountKind::Customer,
        }
    }
}

/// Service provider record awaiting insertion
#[derive(Clone, PartialEq, Eq)]
pub struct NewServiceProvider {
    pub service_id: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
}

/// Customer record awaiting insertion
#[derive(Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
}

/// An account record awaiting insertion; the store assigns `id` and `created_at`
#[derive(Clone, PartialEq, Eq)]
pub enum NewAccount {
    ServiceProvider(NewServiceProvider),
    Customer(NewCustomer),
}

impl NewAccount {
    pub fn kind(&self) -> AccountKind {
        match self {
            NewAccount::ServiceProvider(_) => AccountKind::ServiceProvider,
            NewAccount::Customer(_) => AccountKind::Customer,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            NewAccount::ServiceProvider(a) => &a.email,
            NewAccount::Customer(a) => &a.email,
        }
    }

    pub fn service_id(&self) -> Option<&str> {
        match self {
            NewAccount::ServiceProvider(a) => Some(&a.service_id),
            NewAccount::Customer(_) => None,
        }
    }

    /// Attach store-assigned fields, producing the stored account
    pub fn into_account(self, id: AccountId, created_at: DateTime<Utc>) -> Account {
        match self {
            NewAccount::ServiceProvider(a) => Account::ServiceProvider(ServiceProviderAccount {
                id,
                service_id: a.service_id,
                email: a.email,
                phone_number: a.phone_number,
                password_hash: a.password_hash,
                created_at,
            }),
            NewAccount::Customer(a) => Account::Customer(CustomerAccount {
                id,
                name: a.name,
                email: a.email,
                phone: a.phone,
                password_hash: a.password_hash,
                created_at,
            }),
        }
    }
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("kind", &self.kind())
            .field("email", &self.email())
            .field("service_id", &self.service_id())
            .finish_non_exhaustive()
    }
}
