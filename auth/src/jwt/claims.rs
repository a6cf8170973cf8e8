use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;
use crate::store::Identity;

/// Bearer token payload.
///
/// `sub` carries the username; `uid` carries the stable identifier used to
/// resolve the principal on every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username at issuance time)
    pub sub: String,

    /// Principal identifier
    pub uid: String,

    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a principal, expiring `ttl` after `issued_at`.
    ///
    /// # Errors
    /// * `ExpiryOutOfRange` - `issued_at + ttl` is not a representable time
    pub fn for_principal<P: Identity>(
        principal: &P,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or(JwtError::ExpiryOutOfRange)?;
        let username = principal.username().to_string();

        Ok(Self {
            sub: username.clone(),
            uid: principal.id(),
            username,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        })
    }
}
