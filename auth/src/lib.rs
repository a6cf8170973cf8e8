//! Authentication core
//!
//! - Password hashing and verification (Argon2id)
//! - HS256 bearer token issuance and verification
//! - Local (username/password) and bearer strategies over a pluggable
//!   credential store
//!
//! Services implement [`CredentialStore`] over their own persistence and
//! decide how rejections map onto their transport.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Identity, SigningSecret, TokenIssuer, TokenVerifier};
//!
//! struct User;
//!
//! impl Identity for User {
//!     fn id(&self) -> String {
//!         "user123".to_string()
//!     }
//!
//!     fn username(&self) -> &str {
//!         "alice"
//!     }
//! }
//!
//! let secret = SigningSecret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let issuer = TokenIssuer::new(&secret, chrono::Duration::days(7)).unwrap();
//! let verifier = TokenVerifier::new(&secret);
//!
//! let token = issuer.issue(&User).unwrap();
//! let claims = verifier.verify(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! assert_eq!(claims.uid, "user123");
//! ```

pub mod authenticator;
pub mod errors;
pub mod jwt;
pub mod password;
pub mod store;
pub mod strategy;

// Re-export commonly used items
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::Credentials;
pub use errors::AuthFailure;
pub use errors::AuthenticationError;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::SigningSecret;
pub use jwt::TokenIssuer;
pub use jwt::TokenVerifier;
pub use jwt::DEFAULT_TOKEN_TTL_DAYS;
pub use jwt::MAX_TOKEN_TTL_DAYS;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use store::CredentialRecord;
pub use store::CredentialStore;
pub use store::Identity;
pub use store::PrincipalOf;
pub use store::StoreError;
