//! Signup and signin inputs as delivered by the request router.

use std::fmt;

use prown_shared::validation::{blank_fields, not_blank};

use crate::domain::entities::account::{AccountKind, NewAccount, NewCustomer, NewServiceProvider};
use crate::errors::ValidationError;

/// Service provider signup fields
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ServiceProviderSignup {
    pub service_id: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

/// Customer signup fields
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CustomerSignup {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Signup request for one of the account kinds
#[derive(Clone, PartialEq, Eq)]
pub enum SignupRequest {
    ServiceProvider(ServiceProviderSignup),
    Customer(CustomerSignup),
}

impl SignupRequest {
    pub fn kind(&self) -> AccountKind {
        match self {
            SignupRequest::ServiceProvider(_) => AccountKind::ServiceProvider,
            SignupRequest::Customer(_) => AccountKind::Customer,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            SignupRequest::ServiceProvider(r) => &r.email,
            SignupRequest::Customer(r) => &r.email,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            SignupRequest::ServiceProvider(r) => &r.password,
            SignupRequest::Customer(r) => &r.password,
        }
    }

    /// Every field of the kind must be present and non-blank.
    ///
    /// The error lists all required fields of the kind, not only the
    /// missing ones.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields: Vec<(&str, &str)> = match self {
            SignupRequest::ServiceProvider(r) => vec![
                ("service_id", r.service_id.as_str()),
                ("email", r.email.as_str()),
                ("phone_number", r.phone_number.as_str()),
                ("password", r.password.as_str()),
            ],
            SignupRequest::Customer(r) => vec![
                ("name", r.name.as_str()),
                ("email", r.email.as_str()),
                ("phone", r.phone.as_str()),
                ("password", r.password.as_str()),
            ],
        };

        if blank_fields(&fields).is_empty() {
            return Ok(());
        }

        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        Err(ValidationError::AllFieldsRequired {
            fields: names.join(", "),
        })
    }

    /// Record to insert, carrying `password_hash` in place of the password
    pub fn to_new_account(&self, password_hash: String) -> NewAccount {
        match self {
            SignupRequest::ServiceProvider(r) => NewAccount::ServiceProvider(NewServiceProvider {
                service_id: r.service_id.clone(),
                email: r.email.clone(),
                phone_number: r.phone_number.clone(),
                password_hash,
            }),
            SignupRequest::Customer(r) => NewAccount::Customer(NewCustomer {
                name: r.name.clone(),
                email: r.email.clone(),
                phone: r.phone.clone(),
                password_hash,
            }),
        }
    }
}

/// Email and password submitted at signin
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SigninCredentials {
    pub email: String,
    pub password: String,
}

impl SigninCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if not_blank(&self.email) && not_blank(&self.password) {
            Ok(())
        } else {
            Err(ValidationError::CredentialsRequired)
        }
    }
}

// Passwords never reach logs.
impl fmt::Debug for ServiceProviderSignup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceProviderSignup")
            .field("service_id", &self.service_id)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for CustomerSignup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerSignup")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignupRequest::ServiceProvider(r) => r.fmt(f),
            SignupRequest::Customer(r) => r.fmt(f),
        }
    }
}

impl fmt::Debug for SigninCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigninCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> ServiceProviderSignup {
        ServiceProviderSignup {
            service_id: "SP1".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "555".to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn test_complete_signup_is_valid() {
        assert!(SignupRequest::ServiceProvider(provider()).validate().is_ok());
    }

    #[test]
    fn test_missing_field_lists_all_required_fields() {
        let request = SignupRequest::ServiceProvider(ServiceProviderSignup {
            phone_number: String::new(),
            ..provider()
        });
        let err = request.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "All fields are required: service_id, email, phone_number, password"
        );
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let request = SignupRequest::Customer(CustomerSignup {
            name: "   ".to_string(),
            email: "c@x.com".to_string(),
            phone: "1".to_string(),
            password: "pw".to_string(),
        });
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "All fields are required: name, email, phone, password");
    }

    #[test]
    fn test_new_account_carries_hash_not_password() {
        let record = SignupRequest::ServiceProvider(provider()).to_new_account("hashed".to_string());
        match record {
            NewAccount::ServiceProvider(r) => {
                assert_eq!(r.service_id, "SP1");
                assert_eq!(r.password_hash, "hashed");
            }
            NewAccount::Customer(_) => panic!("expected a service provider record"),
        }
    }

    #[test]
    fn test_signin_credentials_validation() {
        assert!(SigninCredentials::new("a@x.com", "pw").validate().is_ok());
        assert!(matches!(
            SigninCredentials::new("", "pw").validate(),
            Err(ValidationError::CredentialsRequired)
        ));
        assert!(SigninCredentials::new("a@x.com", "").validate().is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", SignupRequest::ServiceProvider(provider()));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("\"pw\""));

        let debug = format!("{:?}", SigninCredentials::new("a@x.com", "secret-pw"));
        assert!(!debug.contains("secret-pw"));
    }
}
