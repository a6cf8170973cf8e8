use std::sync::Arc;

use async_trait::async_trait;
use auth::CredentialRecord;
use auth::CredentialStore;
use auth::Identity;
use auth::StoreError;

use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

impl Identity for AuthenticatedUser {
    fn id(&self) -> String {
        self.user_id.to_string()
    }

    fn username(&self) -> &str {
        self.username.as_str()
    }
}

impl CredentialRecord for User {
    type Principal = AuthenticatedUser;

    fn password_hash(&self) -> &str {
        &self.password_hash
    }

    fn into_principal(self) -> AuthenticatedUser {
        AuthenticatedUser::from(self)
    }
}

/// Credential lookups for the auth core, backed by the user repository.
#[derive(Clone)]
pub struct UserCredentialStore {
    repository: Arc<dyn UserRepository>,
}

impl UserCredentialStore {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

fn unavailable(err: UserError) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

#[async_trait]
impl CredentialStore for UserCredentialStore {
    type Record = User;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        // Names that fail validation cannot belong to a stored user.
        let Ok(username) = Username::new(username.to_string()) else {
            return Ok(None);
        };
        self.repository
            .find_by_username(&username)
            .await
            .map_err(unavailable)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let Ok(user_id) = UserId::from_string(id) else {
            return Ok(None);
        };
        self.repository.find_by_id(&user_id).await.map_err(unavailable)
    }
}
