use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Token lifetime must be between 1 second and {max_days} days")]
    InvalidLifetime { max_days: i64 },

    #[error("Token expiry out of range")]
    ExpiryOutOfRange,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
