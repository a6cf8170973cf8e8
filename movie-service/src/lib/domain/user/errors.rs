use thiserror::Error;

use crate::domain::movie::errors::MovieIdError;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Username contains non alphanumeric characters - not allowed")]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid movie ID: {0}")]
    InvalidMovieId(#[from] MovieIdError),

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("User not found with username: {0}")]
    NotFoundByUsername(String),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
