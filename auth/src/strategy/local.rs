use std::sync::Arc;

use crate::errors::AuthFailure;
use crate::errors::AuthenticationError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::store::CredentialRecord;
use crate::store::CredentialStore;
use crate::store::PrincipalOf;

/// Verified in place of a missing record so an unknown username costs the
/// same Argon2 work as a wrong password. Default parameters; matches nothing.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$Y0ea1poJCyWCd+yPum+ZQQ$taLJYlBhI2bqJy/6xtl0Sq9LRarNlqp8/Lkx7jtVglk";

/// Username/password authentication against a credential store.
pub struct LocalStrategy<S: CredentialStore> {
    store: Arc<S>,
    password_hasher: PasswordHasher,
}

impl<S: CredentialStore> LocalStrategy<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
        }
    }

    /// Verify a username and password.
    ///
    /// Unknown username, wrong password and an unusable stored hash all
    /// produce the same `InvalidCredentials` rejection; only the logs tell
    /// them apart.
    ///
    /// # Errors
    /// * `Rejected(InvalidCredentials)` - Credentials do not match a record
    /// * `StoreUnavailable` - Lookup failed (not retried)
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<PrincipalOf<S>, AuthenticationError> {
        let Some(record) = self.store.find_by_username(username).await? else {
            let _ = self.verify(password, DUMMY_HASH).await?;
            tracing::debug!(username, "Login rejected: unknown username");
            return Err(AuthFailure::InvalidCredentials.into());
        };

        match self.verify(password, record.password_hash()).await? {
            Ok(true) => Ok(record.into_principal()),
            Ok(false) => {
                tracing::debug!(username, "Login rejected: password mismatch");
                Err(AuthFailure::InvalidCredentials.into())
            }
            Err(e) => {
                tracing::warn!(username, error = %e, "Login rejected: stored hash unusable");
                Err(AuthFailure::InvalidCredentials.into())
            }
        }
    }

    /// Argon2 verification blocks; run it off the async workers.
    async fn verify(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<Result<bool, PasswordError>, AuthenticationError> {
        let hasher = self.password_hasher;
        let candidate = password.to_owned();
        let stored_hash = stored_hash.to_owned();
        tokio::task::spawn_blocking(move || hasher.verify(&candidate, &stored_hash))
            .await
            .map_err(|e| AuthenticationError::Internal(e.to_string()))
    }
}
