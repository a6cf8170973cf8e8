use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;
use super::secret::SigningSecret;

/// Checks signature and expiry of bearer tokens.
///
/// Only HS256 is accepted, whatever the token header declares.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Decode and validate a token.
    ///
    /// The signature is checked before expiry, so a forged token is reported
    /// as invalid even when its `exp` is in the past.
    ///
    /// # Errors
    /// * `TokenExpired` - Signature is valid but `exp` has passed
    /// * `InvalidToken` - Malformed token, wrong algorithm, bad signature or missing claims
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::InvalidToken(e.to_string()),
            })
    }
}
