use std::fmt;
use std::sync::Arc;

use chrono::Duration;

use crate::errors::AuthenticationError;
use crate::jwt::JwtError;
use crate::jwt::SigningSecret;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenVerifier;
use crate::store::CredentialStore;
use crate::store::PrincipalOf;
use crate::strategy::BearerStrategy;
use crate::strategy::LocalStrategy;

/// What a caller presents to prove who they are.
///
/// The route layer picks the variant; there is no runtime strategy registry.
#[derive(Clone, Copy)]
pub enum Credentials<'a> {
    /// Username and password (login).
    Local { username: &'a str, password: &'a str },

    /// Raw `Authorization` header value, if any (protected routes).
    Bearer { authorization: Option<&'a str> },
}

impl fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Local { username, .. } => f
                .debug_struct("Local")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::Bearer { authorization } => f
                .debug_struct("Bearer")
                .field("authorization", &authorization.map(|_| "<redacted>"))
                .finish(),
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct AuthenticationResult<P> {
    pub principal: P,

    /// JWT access token
    pub access_token: String,
}

/// Authentication coordinator: both strategies plus token issuance, sharing
/// one credential store and one signing secret.
pub struct Authenticator<S: CredentialStore> {
    local: LocalStrategy<S>,
    bearer: BearerStrategy<S>,
    issuer: TokenIssuer,
}

impl<S: CredentialStore> Authenticator<S> {
    /// # Arguments
    /// * `store` - Credential store adapter
    /// * `secret` - Process-wide signing secret
    /// * `token_ttl` - Lifetime of issued tokens
    ///
    /// # Errors
    /// * `InvalidLifetime` - `token_ttl` is not positive or exceeds `MAX_TOKEN_TTL_DAYS`
    pub fn new(
        store: Arc<S>,
        secret: &SigningSecret,
        token_ttl: Duration,
    ) -> Result<Self, JwtError> {
        Ok(Self {
            issuer: TokenIssuer::new(secret, token_ttl)?,
            local: LocalStrategy::new(Arc::clone(&store)),
            bearer: BearerStrategy::new(store, TokenVerifier::new(secret)),
        })
    }

    /// Authenticate with the strategy matching the credentials.
    pub async fn authenticate(
        &self,
        credentials: Credentials<'_>,
    ) -> Result<PrincipalOf<S>, AuthenticationError> {
        match credentials {
            Credentials::Local { username, password } => {
                self.local.authenticate(username, password).await
            }
            Credentials::Bearer { authorization } => self.bearer.authenticate(authorization).await,
        }
    }

    /// Verify username and password, then issue a token for the principal.
    ///
    /// # Errors
    /// * `Rejected(InvalidCredentials)` - Unknown username or wrong password
    /// * `StoreUnavailable` - Credential lookup failed
    /// * `Issuance` - Token could not be signed
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationResult<PrincipalOf<S>>, AuthenticationError> {
        let principal = self
            .authenticate(Credentials::Local { username, password })
            .await?;
        let access_token = self.issuer.issue(&principal)?;

        tracing::info!(username, "User logged in");

        Ok(AuthenticationResult {
            principal,
            access_token,
        })
    }

    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AuthFailure;
    use crate::password::PasswordHasher;
    use crate::store::memory::MemoryStore;

    const SECRET: &str = "test_secret_key_at_least_32_bytes!";

    fn authenticator() -> Authenticator<MemoryStore> {
        let hash = PasswordHasher::new().hash("correct-pw").unwrap();
        let store = MemoryStore::default().with_record("1", "alice", &hash);
        let secret = SigningSecret::new(SECRET).unwrap();
        Authenticator::new(Arc::new(store), &secret, Duration::days(7)).unwrap()
    }

    #[tokio::test]
    async fn test_login_issues_token_for_subject() {
        let authenticator = authenticator();

        let result = authenticator
            .login("alice", "correct-pw")
            .await
            .expect("Login failed");

        let verifier = TokenVerifier::new(&SigningSecret::new(SECRET).unwrap());
        let claims = verifier.verify(&result.access_token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.uid, result.principal.id);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let authenticator = authenticator();

        let err = authenticator.login("alice", "wrong-pw").await.unwrap_err();

        assert_eq!(err.failure(), Some(AuthFailure::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_then_bearer() {
        let authenticator = authenticator();
        let result = authenticator.login("alice", "correct-pw").await.unwrap();
        let header = format!("Bearer {}", result.access_token);

        let principal = authenticator
            .authenticate(Credentials::Bearer {
                authorization: Some(&header),
            })
            .await
            .expect("Bearer authentication failed");

        assert_eq!(principal, result.principal);
    }

    #[tokio::test]
    async fn test_bearer_without_header() {
        let authenticator = authenticator();

        let err = authenticator
            .authenticate(Credentials::Bearer {
                authorization: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.failure(), Some(AuthFailure::NoToken));
    }

    #[test]
    fn test_rejects_non_positive_ttl() {
        let secret = SigningSecret::new(SECRET).unwrap();

        let result = Authenticator::new(
            Arc::new(MemoryStore::default()),
            &secret,
            Duration::zero(),
        );

        assert!(matches!(result, Err(JwtError::InvalidLifetime { .. })));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let local = Credentials::Local {
            username: "alice",
            password: "correct-pw",
        };
        let bearer = Credentials::Bearer {
            authorization: Some("Bearer eyJhbGciOiJIUzI1NiJ9.e30.sig"),
        };

        let local = format!("{:?}", local);
        let bearer = format!("{:?}", bearer);

        assert!(local.contains("alice"));
        assert!(!local.contains("correct-pw"));
        assert!(!bearer.contains("eyJ"));
    }
}
