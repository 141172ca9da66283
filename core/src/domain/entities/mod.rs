//! Domain entities representing core business objects.

pub mod account;
pub mod token;

// Re-export commonly used types
pub use account::{
    Account, AccountId, AccountKind, AccountProfile, CustomerAccount, NewAccount, NewCustomer,
    NewServiceProvider, ServiceProviderAccount,
};
pub use token::{SessionClaims, SessionSubject, SESSION_TOKEN_EXPIRY_SECONDS};
