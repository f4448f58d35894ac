//! Argon2id secret hashing and verification.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::warn;

use flowboard_core::error::AppError;

/// Hashes link secrets with Argon2id at the crate's default cost
/// (19 MiB memory, 2 passes, 1 lane) and a random 16-byte salt.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretHasher;

impl SecretHasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a secret into a self-contained PHC string.
    pub fn hash_secret(&self, secret: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| AppError::hashing(format!("Secret hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Checks `candidate` against a stored PHC string.
    ///
    /// Never fails: a malformed hash is logged and treated as a mismatch.
    pub fn verify_secret(&self, candidate: &str, hash: &str) -> bool {
        if hash.is_empty() {
            warn!("Refusing to verify against an empty hash");
            return false;
        }

        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Stored hash is not a valid PHC string");
                return false;
            }
        };

        match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => false,
            Err(e) => {
                warn!(error = %e, "Secret verification failed");
                false
            }
        }
    }
}
