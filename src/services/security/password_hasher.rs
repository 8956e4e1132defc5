//! # Credential hasher
//!
//! One-way password hashing behind the [`PasswordHasher`] trait, with a
//! bcrypt implementation.
//!
//! bcrypt digests embed their own version, cost and 16-byte random salt
//! (`$2b$10$<22 chars salt><31 chars hash>`), so verification needs no
//! external state and two hashes of the same password never match
//! byte-for-byte.

use bcrypt::{hash, verify};
use crate::config::PasswordConfig;
use crate::core::errors::{AppError, ErrorContext};

pub trait PasswordHasher: Send + Sync {
    /// Salted digest of `plaintext`.
    ///
    /// Failure is an [`AppError::InternalError`], never a business error.
    fn hash(&self, plaintext: &str) -> Result<String, AppError>;

    /// True iff `plaintext` matches `digest`. Malformed digests yield `false`.
    fn verify(&self, plaintext: &str, digest: &str) -> bool;
}

/// bcrypt [`PasswordHasher`]
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Uses the cost from `BCRYPT_COST` (default 10).
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let start = std::time::Instant::now();

        let digest = hash(plaintext, self.cost).context("password hashing failed")?;

        log::debug!("Password hashing took: {:?}", start.elapsed());
        Ok(digest)
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        match verify(plaintext, digest) {
            Ok(matches) => matches,
            Err(e) => {
                log::warn!("rejecting malformed password digest: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> BcryptHasher {
        BcryptHasher::new(4)
    }

    #[test]
    fn test_hash_then_verify() {
        let digest = hasher().hash("MyP@ssw0rd").unwrap();

        assert!(hasher().verify("MyP@ssw0rd", &digest));
        assert!(!hasher().verify("MyP@ssw0rd!", &digest));
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hasher().hash("MyP@ssw0rd").unwrap();
        let second = hasher().hash("MyP@ssw0rd").unwrap();

        assert_ne!(first, second);
        assert!(hasher().verify("MyP@ssw0rd", &first));
        assert!(hasher().verify("MyP@ssw0rd", &second));
    }

    #[test]
    fn test_digest_embeds_cost() {
        let digest = BcryptHasher::new(5).hash("MyP@ssw0rd").unwrap();

        assert!(digest.starts_with("$2b$05$"));
        // verification reads the cost from the digest, not from the hasher
        assert!(hasher().verify("MyP@ssw0rd", &digest));
    }

    #[test]
    fn test_malformed_digest_is_false() {
        assert!(!hasher().verify("MyP@ssw0rd", ""));
        assert!(!hasher().verify("MyP@ssw0rd", "not-a-bcrypt-digest"));
        assert!(!hasher().verify("MyP@ssw0rd", "$2b$04$short"));
    }

    #[test]
    fn test_invalid_cost_is_internal_error() {
        let result = BcryptHasher::new(3).hash("MyP@ssw0rd");

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_default_cost() {
        if std::env::var("BCRYPT_COST").is_err() {
            assert_eq!(BcryptHasher::from_config().cost(), 10);
        }
    }
}
