//! Session token claims for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::account::{Account, AccountId, AccountKind};

/// Session token expiration time (1 hour)
pub const SESSION_TOKEN_EXPIRY_SECONDS: i64 = 3600;

/// Identity embedded into a session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSubject {
    pub id: AccountId,
    pub email: String,
    pub kind: AccountKind,
    /// Present only for service providers
    pub service_id: Option<String>,
}

impl SessionSubject {
    pub fn from_account(account: &Account) -> Self {
        Self {
            id: account.id(),
            email: account.email().to_string(),
            kind: account.kind(),
            service_id: account.service_id().map(str::to_string),
        }
    }
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account ID
    pub id: AccountId,

    /// Account email at issuance
    pub email: String,

    /// Account kind
    #[serde(rename = "type")]
    pub kind: AccountKind,

    /// Service identifier (service providers only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl SessionClaims {
    /// Creates claims for `subject`, valid from `issued_at` for `ttl`
    pub fn new(subject: &SessionSubject, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            id: subject.id,
            email: subject.email.clone(),
            kind: subject.kind,
            service_id: subject.service_id.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(kind: AccountKind) -> SessionSubject {
        SessionSubject {
            id: 42,
            email: "a@x.com".to_string(),
            kind,
            service_id: match kind {
                AccountKind::ServiceProvider => Some("SP1".to_string()),
                AccountKind::Customer => None,
            },
        }
    }

    #[test]
    fn test_claims_expiry_window() {
        let now = Utc::now();
        let claims = SessionClaims::new(
            &subject(AccountKind::Customer),
            now,
            Duration::seconds(SESSION_TOKEN_EXPIRY_SECONDS),
        );

        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(claims.exp, now.timestamp() + 3600);
    }

    #[test]
    fn test_claims_payload_field_names() {
        let claims = SessionClaims::new(
            &subject(AccountKind::ServiceProvider),
            Utc::now(),
            Duration::hours(1),
        );
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["id"], 42);
        assert_eq!(json["type"], "service_provider");
        assert_eq!(json["service_id"], "SP1");

        let customer = SessionClaims::new(&subject(AccountKind::Customer), Utc::now(), Duration::hours(1));
        let json = serde_json::to_value(&customer).unwrap();
        assert!(json.get("service_id").is_none());
    }
}
