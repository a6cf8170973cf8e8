use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Salted one-way password hashing (Argon2id).
///
/// Stateless: a single instance can be shared by every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Returns
    /// PHC string (algorithm, parameters, salt and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a candidate password against a stored PHC hash.
    ///
    /// The digest comparison is done by the argon2 crate in constant time;
    /// the parameters and salt come from the stored hash itself.
    ///
    /// # Returns
    /// True if the candidate matches, false otherwise
    ///
    /// # Errors
    /// * `MalformedHash` - Stored hash cannot be parsed or uses unusable parameters
    pub fn verify(&self, candidate: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(stored_hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        match Argon2::default().verify_password(candidate.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::MalformedHash(e.to_string())),
        }
    }
}
