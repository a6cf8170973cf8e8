use async_trait::async_trait;

use crate::domain::movie::models::MovieId;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Errors
    /// * `PasswordRequired` - Empty password
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Whether a username is already registered.
    async fn username_taken(&self, username: &str) -> Result<bool, UserError>;

    /// Whether an email address is already registered.
    async fn email_taken(&self, email: &str) -> Result<bool, UserError>;

    /// Replace profile fields of the named user.
    ///
    /// The password is re-hashed only when the command carries a non-empty one.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - User does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update_user(
        &self,
        username: &Username,
        command: UpdateUserCommand,
    ) -> Result<User, UserError>;

    /// Add a movie to the user's favorites; no-op when already present.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - User does not exist
    async fn add_favorite(&self, username: &Username, movie_id: &MovieId)
        -> Result<User, UserError>;

    /// # Errors
    /// * `NotFoundByUsername` - User does not exist
    async fn remove_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<User, UserError>;

    /// # Errors
    /// * `NotFoundByUsername` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, username: &Username) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve all users, newest first.
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Atomically add a favorite without duplicating it.
    ///
    /// # Returns
    /// Updated user, None if the user does not exist
    async fn add_favorite(
        &self,
        id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError>;

    /// Atomically remove a favorite.
    ///
    /// # Returns
    /// Updated user, None if the user does not exist
    async fn remove_favorite(
        &self,
        id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError>;

    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
