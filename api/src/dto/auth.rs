//! Request and response bodies for the account endpoints
//!
//! Missing request fields deserialize as empty strings so the account
//! service can report every required field at once.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use prown_core::domain::entities::account::AccountProfile;
use prown_core::domain::value_objects::{
    CustomerSignup, ServiceProviderSignup, SigninCredentials, SignupRequest,
};
use prown_core::errors::ValidationError;

/// Widest value the `VARCHAR(255)` columns accept
const MAX_TEXT: u64 = 255;

#[derive(Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ServiceProviderSignupRequest {
    #[validate(length(max = 255))]
    pub service_id: String,

    #[validate(length(max = 255))]
    pub email: String,

    #[validate(length(max = 20))]
    pub phone_number: String,

    pub password: String,
}

impl From<ServiceProviderSignupRequest> for SignupRequest {
    fn from(body: ServiceProviderSignupRequest) -> Self {
        SignupRequest::ServiceProvider(ServiceProviderSignup {
            service_id: body.service_id,
            email: body.email,
            phone_number: body.phone_number,
            password: body.password,
        })
    }
}

#[derive(Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CustomerSignupRequest {
    #[validate(length(max = 255))]
    pub name: String,

    #[validate(length(max = 255))]
    pub email: String,

    #[validate(length(max = 20))]
    pub phone: String,

    pub password: String,
}

impl From<CustomerSignupRequest> for SignupRequest {
    fn from(body: CustomerSignupRequest) -> Self {
        SignupRequest::Customer(CustomerSignup {
            name: body.name,
            email: body.email,
            phone: body.phone,
            password: body.password,
        })
    }
}

#[derive(Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SigninRequest {
    #[validate(length(max = 255))]
    pub email: String,

    pub password: String,
}

impl From<SigninRequest> for SigninCredentials {
    fn from(body: SigninRequest) -> Self {
        SigninCredentials::new(body.email, body.password)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninResponse {
    pub message: String,
    pub token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    pub user: AccountProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: AccountProfile,
}

/// Turn a length violation into the domain validation error
///
/// Fields are inspected in name order so the reported field is stable.
pub fn length_violation(errors: &ValidationErrors) -> ValidationError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(name, _)| *name);

    fields
        .into_iter()
        .find_map(|(name, errs)| {
            errs.iter().find(|e| e.code == "length").map(|e| ValidationError::TooLong {
                field: name.to_string(),
                max: e
                    .params
                    .get("max")
                    .and_then(|v| v.as_u64())
                    .unwrap_or(MAX_TEXT) as usize,
            })
        })
        .unwrap_or(ValidationError::MalformedBody)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let body: CustomerSignupRequest =
            serde_json::from_str(r#"{"email": "c@x.com"}"#).unwrap();
        assert_eq!(body.email, "c@x.com");
        assert!(body.name.is_empty());
        assert!(body.phone.is_empty());
    }

    #[test]
    fn test_phone_length_limit() {
        let body = ServiceProviderSignupRequest {
            service_id: "SP1".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "1".repeat(21),
            password: "pw".to_string(),
        };

        let errors = body.validate().unwrap_err();
        assert_eq!(
            length_violation(&errors),
            ValidationError::TooLong {
                field: "phone_number".to_string(),
                max: 20,
            }
        );
    }

    #[test]
    fn test_values_within_limits_pass() {
        let body = SigninRequest {
            email: "a".repeat(255),
            password: "p".repeat(500),
        };
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_conversion_into_domain_request() {
        let body = CustomerSignupRequest {
            name: "Ann".to_string(),
            email: "c@x.com".to_string(),
            phone: "123".to_string(),
            password: "pw".to_string(),
        };
        let request: SignupRequest = body.into();
        assert_eq!(request.email(), "c@x.com");
        assert!(request.validate().is_ok());
    }
}
