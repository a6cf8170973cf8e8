use async_trait::async_trait;
use thiserror::Error;

/// Identity claims every principal exposes to the token issuer.
pub trait Identity {
    /// Unique, stable identifier (survives username changes).
    fn id(&self) -> String;

    fn username(&self) -> &str;
}

/// A persisted credential: identity, salted password hash and profile data.
pub trait CredentialRecord: Send + Sync + 'static {
    /// What handlers see once authentication succeeds.
    type Principal: Identity + Clone + Send + Sync + 'static;

    fn password_hash(&self) -> &str;

    /// Drop the password hash and keep the profile.
    fn into_principal(self) -> Self::Principal;
}

/// Principal produced by a store's records.
pub type PrincipalOf<S> = <<S as CredentialStore>::Record as CredentialRecord>::Principal;

/// Credential store failure. Always transient from the caller's point of view.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to stored credentials.
///
/// Implemented by the service over its own persistence; the auth core makes
/// no assumption about the storage technology. Timeouts and retries belong to
/// the implementation.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    type Record: CredentialRecord;

    /// # Errors
    /// * `Unavailable` - Backend could not be queried
    async fn find_by_username(&self, username: &str) -> Result<Option<Self::Record>, StoreError>;

    /// # Errors
    /// * `Unavailable` - Backend could not be queried
    async fn find_by_id(&self, id: &str) -> Result<Option<Self::Record>, StoreError>;
}
