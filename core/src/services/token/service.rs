//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{SessionClaims, SessionSubject};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Issues and verifies signed session tokens
///
/// Tokens are self-contained: nothing is stored server side, so a token
/// stays valid until it expires.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Internal` when the secret is
    /// empty or the lifetime is not positive
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::Internal {
                message: "JWT secret must not be empty".to_string(),
            });
        }
        if config.expiry_seconds <= 0 {
            return Err(DomainError::Internal {
                message: "Session token lifetime must be positive".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_required_spec_claims(&["exp"]);
        validation.validate_exp = true;
        // Expiry is exact; no clock skew allowance.
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Lifetime of newly issued session tokens
    pub fn session_ttl(&self) -> Duration {
        Duration::seconds(self.config.expiry_seconds)
    }

    /// Issues a session token for `subject`, valid from now
    pub fn issue(&self, subject: &SessionSubject) -> Result<String, DomainError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issues a session token for `subject` as if signed at `issued_at`
    pub fn issue_at(
        &self,
        subject: &SessionSubject,
        issued_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = SessionClaims::new(subject, issued_at, self.session_ttl());
        self.encode_jwt(&claims)
    }

    fn encode_jwt(&self, claims: &SessionClaims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign session token");
            DomainError::Token(TokenError::GenerationFailed)
        })
    }

    /// Verifies a session token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(SessionClaims)` - Signature valid and not expired
    /// * `Err(TokenError::SignatureMismatch)` - Signed with a different key
    /// * `Err(TokenError::Expired)` - Past its expiry instant
    /// * `Err(TokenError::Malformed)` - Anything else, including garbage input
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                _ => TokenError::Malformed,
            })
    }
}
