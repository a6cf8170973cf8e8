use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::movie::models::MovieId;
use crate::user::errors::EmailError;
use crate::user::errors::UserIdError;
use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// Registered account with its favorite movies. The password hash never
/// leaves the domain and persistence layers.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub birthday: Option<NaiveDate>,
    pub favorites: Vec<MovieId>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Authenticated principal: a user without credentials.
///
/// Built once per request by the route guard and handed to handlers through
/// request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub birthday: Option<NaiveDate>,
    pub favorites: Vec<MovieId>,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            email: user.email,
            birthday: user.birthday,
            favorites: user.favorites,
        }
    }
}

impl AuthenticatedUser {
    /// Whether this principal is the owner of the named account.
    pub fn is(&self, username: &str) -> bool {
        self.username.as_str() == username
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// 5-32 ASCII letters and digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 5;
    const MAX_LENGTH: usize = 32;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 5 characters
    /// * `TooLong` - Username longer than 32 characters
    /// * `InvalidCharacters` - Contains anything but ASCII letters and digits
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.chars().count();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
    pub birthday: Option<NaiveDate>,
}

impl CreateUserCommand {
    /// # Arguments
    /// * `password` - Plain text password (hashed by the service)
    pub fn new(
        username: Username,
        email: EmailAddress,
        password: String,
        birthday: Option<NaiveDate>,
    ) -> Self {
        Self {
            username,
            email,
            password,
            birthday,
        }
    }
}

/// Command to update an existing user's profile.
///
/// Username and email are always replaced; the password only when supplied.
#[derive(Debug)]
pub struct UpdateUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Option<String>,
    pub birthday: Option<NaiveDate>,
}
