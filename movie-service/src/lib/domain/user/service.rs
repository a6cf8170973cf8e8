use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::movie::models::MovieId;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    async fn require_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFoundByUsername(username.to_string()))
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if command.password.is_empty() {
            return Err(UserError::PasswordRequired);
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            birthday: command.birthday,
            favorites: Vec::new(),
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, username = %created_user.username, "User registered");

        Ok(created_user)
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.require_by_username(username).await
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn username_taken(&self, username: &str) -> Result<bool, UserError> {
        // A name that fails validation can never have been registered.
        let Ok(username) = Username::new(username.to_string()) else {
            return Ok(false);
        };
        Ok(self.repository.find_by_username(&username).await?.is_some())
    }

    async fn email_taken(&self, email: &str) -> Result<bool, UserError> {
        Ok(self.repository.find_by_email(email).await?.is_some())
    }

    async fn update_user(
        &self,
        username: &Username,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self.require_by_username(username).await?;

        user.username = command.username;
        user.email = command.email;

        if let Some(birthday) = command.birthday {
            user.birthday = Some(birthday);
        }

        if let Some(new_password) = command.password.filter(|p| !p.is_empty()) {
            user.password_hash = self.password_hasher.hash(&new_password)?;
        }

        let updated_user = self.repository.update(user).await?;
        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }

    async fn add_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<User, UserError> {
        let user = self.require_by_username(username).await?;

        self.repository
            .add_favorite(&user.id, movie_id)
            .await?
            .ok_or_else(|| UserError::NotFoundByUsername(username.to_string()))
    }

    async fn remove_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<User, UserError> {
        let user = self.require_by_username(username).await?;

        self.repository
            .remove_favorite(&user.id, movie_id)
            .await?
            .ok_or_else(|| UserError::NotFoundByUsername(username.to_string()))
    }

    async fn delete_user(&self, username: &Username) -> Result<(), UserError> {
        let user = self.require_by_username(username).await?;

        self.repository.delete(&user.id).await?;
        tracing::info!(user_id = %user.id, username = %username, "User deleted");

        Ok(())
    }
}
