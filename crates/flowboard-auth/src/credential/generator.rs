//! Random URL-safe secret generation.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use flowboard_core::error::{AppError, ErrorKind};

/// Generates link secrets from the operating system entropy source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretGenerator;

impl SecretGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Produces a secret of exactly `length` characters drawn from
    /// `[A-Za-z0-9_-]`.
    ///
    /// `length` random bytes are encoded as unpadded URL-safe base64, which
    /// always yields at least `length` characters, then truncated.
    pub fn generate_secret(&self, length: usize) -> Result<String, AppError> {
        if length == 0 {
            return Err(AppError::validation("Secret length must be at least 1"));
        }

        let mut bytes = vec![0u8; length];
        OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
            AppError::with_source(
                ErrorKind::Generation,
                "Entropy source failed to produce a secret",
                e,
            )
        })?;

        let mut secret = URL_SAFE_NO_PAD.encode(&bytes);
        secret.truncate(length);
        Ok(secret)
    }
}
