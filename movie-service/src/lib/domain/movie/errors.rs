use thiserror::Error;

/// Error for MovieId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for movie catalogue operations
#[derive(Debug, Clone, Error)]
pub enum MovieError {
    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("No movies found")]
    Empty,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
