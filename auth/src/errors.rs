use thiserror::Error;

use crate::jwt::JwtError;
use crate::store::StoreError;

/// Why an authentication or verification step did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User no longer exists")]
    UserNotFound,

    #[error("Token is invalid")]
    TokenInvalid,

    #[error("Token is expired")]
    TokenExpired,

    #[error("No bearer token")]
    NoToken,
}

impl AuthFailure {
    /// Stable machine-readable tag.
    pub fn code(&self) -> &'static str {
        match self {
            AuthFailure::InvalidCredentials => "invalid_credentials",
            AuthFailure::UserNotFound => "user_not_found",
            AuthFailure::TokenInvalid => "token_invalid",
            AuthFailure::TokenExpired => "token_expired",
            AuthFailure::NoToken => "no_token",
        }
    }
}

/// Authentication operation errors.
///
/// `Rejected` is the caller's fault; the other variants are server-side and
/// must not be reported as bad credentials.
#[derive(Debug, Clone, Error)]
pub enum AuthenticationError {
    #[error(transparent)]
    Rejected(#[from] AuthFailure),

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),

    #[error("Token issuance failed: {0}")]
    Issuance(#[from] JwtError),

    #[error("Authentication task failed: {0}")]
    Internal(String),
}

impl AuthenticationError {
    pub fn failure(&self) -> Option<AuthFailure> {
        match self {
            AuthenticationError::Rejected(failure) => Some(*failure),
            _ => None,
        }
    }
}
