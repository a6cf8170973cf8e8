use std::fmt;
use std::sync::Arc;

use super::errors::JwtError;

const RECOMMENDED_MIN_LENGTH: usize = 32;

/// HMAC signing secret.
///
/// Loaded once at startup and shared read-only by the issuer and the
/// verifier. There is no way to change it after construction.
#[derive(Clone)]
pub struct SigningSecret(Arc<[u8]>);

impl SigningSecret {
    /// # Errors
    /// * `EmptySecret` - Secret has no bytes
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, JwtError> {
        let bytes = secret.as_ref();
        if bytes.is_empty() {
            return Err(JwtError::EmptySecret);
        }
        if bytes.len() < RECOMMENDED_MIN_LENGTH {
            tracing::warn!(
                length = bytes.len(),
                recommended = RECOMMENDED_MIN_LENGTH,
                "JWT signing secret is shorter than recommended for HS256"
            );
        }
        Ok(Self(Arc::from(bytes)))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningSecret").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(SigningSecret::new(""), Err(JwtError::EmptySecret)));
    }

    #[test]
    fn test_debug_does_not_leak() {
        let secret = SigningSecret::new("super_secret_value_at_least_32_bytes").unwrap();
        assert!(!format!("{:?}", secret).contains("super_secret"));
    }
}
