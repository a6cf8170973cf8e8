use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::JwtError;
use super::secret::SigningSecret;
use crate::store::Identity;

pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;
pub const MAX_TOKEN_TTL_DAYS: i64 = 365;

/// Signs time-limited bearer tokens (HS256).
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// # Arguments
    /// * `secret` - Process-wide signing secret
    /// * `ttl` - Lifetime of every issued token
    ///
    /// # Errors
    /// * `InvalidLifetime` - `ttl` is not positive or exceeds `MAX_TOKEN_TTL_DAYS`
    pub fn new(secret: &SigningSecret, ttl: Duration) -> Result<Self, JwtError> {
        if ttl <= Duration::zero() || ttl > Duration::days(MAX_TOKEN_TTL_DAYS) {
            return Err(JwtError::InvalidLifetime {
                max_days: MAX_TOKEN_TTL_DAYS,
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for a principal, valid from now.
    ///
    /// # Errors
    /// * `ExpiryOutOfRange` - Expiry is not a representable time
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn issue<P: Identity>(&self, principal: &P) -> Result<String, JwtError> {
        self.issue_at(principal, Utc::now())
    }

    /// Issue a token with an explicit issued-at time.
    ///
    /// Same principal, timestamp and secret always produce the same token.
    pub fn issue_at<P: Identity>(
        &self,
        principal: &P,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_principal(principal, issued_at, self.ttl)?;

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}
