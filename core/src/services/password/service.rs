//! bcrypt-backed password hasher

use prown_shared::config::PasswordConfig;

use crate::errors::{DomainError, DomainResult};

/// Hashes and verifies account passwords
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(&PasswordConfig::default())
    }
}

impl PasswordService {
    /// Creates a hasher using the configured bcrypt cost
    pub fn new(config: &PasswordConfig) -> Self {
        Self::with_cost(config.bcrypt_cost)
    }

    /// Creates a hasher with an explicit cost (4 is the cheapest bcrypt allows)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes `plaintext` with a fresh random salt
    ///
    /// Two calls with the same input produce different hashes.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Internal` if bcrypt rejects the cost or the
    /// blocking task is cancelled.
    pub async fn hash(&self, plaintext: &str) -> DomainResult<String> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            })
    }

    /// Checks `plaintext` against a stored hash
    ///
    /// A malformed stored hash never matches.
    pub async fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();

        match tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash)).await {
            Ok(Ok(matches)) => matches,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordService {
        PasswordService::with_cost(4)
    }

    #[tokio::test]
    async fn test_hash_then_verify() {
        let service = hasher();
        let hash = service.hash("pw").await.unwrap();

        assert_ne!(hash, "pw");
        assert!(service.verify("pw", &hash).await);
        assert!(!service.verify("wrong", &hash).await);
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let service = hasher();
        let first = service.hash("same-password").await.unwrap();
        let second = service.hash("same-password").await.unwrap();

        assert_ne!(first, second);
        assert!(service.verify("same-password", &first).await);
        assert!(service.verify("same-password", &second).await);
    }

    #[tokio::test]
    async fn test_malformed_hash_never_matches() {
        let service = hasher();
        assert!(!service.verify("pw", "not-a-bcrypt-hash").await);
        assert!(!service.verify("pw", "").await);
    }

    #[tokio::test]
    async fn test_invalid_cost_is_an_internal_error() {
        let service = PasswordService::with_cost(2);
        let err = service.hash("pw").await.unwrap_err();
        assert!(matches!(err, DomainError::Internal { .. }));
    }

    #[test]
    fn test_default_cost() {
        assert_eq!(PasswordService::default().cost(), 10);
    }
}
