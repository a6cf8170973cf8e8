use std::sync::Arc;

use crate::errors::AuthFailure;
use crate::errors::AuthenticationError;
use crate::jwt::JwtError;
use crate::jwt::TokenVerifier;
use crate::store::CredentialRecord;
use crate::store::CredentialStore;
use crate::store::PrincipalOf;

/// Bearer token authentication.
///
/// A token only proves identity while its principal still exists: the
/// identifier claim is resolved against the store on every request.
pub struct BearerStrategy<S: CredentialStore> {
    store: Arc<S>,
    verifier: TokenVerifier,
}

impl<S: CredentialStore> BearerStrategy<S> {
    pub fn new(store: Arc<S>, verifier: TokenVerifier) -> Self {
        Self { store, verifier }
    }

    /// Authenticate from a raw `Authorization` header value.
    ///
    /// # Errors
    /// * `Rejected(NoToken)` - Header missing, not a bearer scheme, or empty
    /// * see [`BearerStrategy::verify_token`]
    pub async fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> Result<PrincipalOf<S>, AuthenticationError> {
        let token = bearer_token(authorization).ok_or(AuthFailure::NoToken)?;
        self.verify_token(token).await
    }

    /// # Errors
    /// * `Rejected(TokenInvalid)` - Bad signature, algorithm or shape
    /// * `Rejected(TokenExpired)` - Valid signature, `exp` in the past
    /// * `Rejected(UserNotFound)` - Principal deleted since issuance
    /// * `StoreUnavailable` - Lookup failed (not retried)
    pub async fn verify_token(&self, token: &str) -> Result<PrincipalOf<S>, AuthenticationError> {
        let claims = self.verifier.verify(token).map_err(|e| match e {
            JwtError::TokenExpired => AuthFailure::TokenExpired,
            other => {
                tracing::debug!(error = %other, "Bearer token rejected");
                AuthFailure::TokenInvalid
            }
        })?;

        match self.store.find_by_id(&claims.uid).await? {
            Some(record) => Ok(record.into_principal()),
            None => {
                tracing::debug!(uid = %claims.uid, "Bearer token subject no longer exists");
                Err(AuthFailure::UserNotFound.into())
            }
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(authorization: Option<&str>) -> Option<&str> {
    let (scheme, token) = authorization?.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
