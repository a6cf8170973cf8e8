use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::MovieIdError;

/// Movie catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    pub genre: Genre,
    pub director: Director,
    pub image_path: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    pub name: String,
    pub bio: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

/// Movie unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MovieId(pub Uuid);

impl MovieId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, MovieIdError> {
        Uuid::parse_str(s)
            .map(MovieId)
            .map_err(|e| MovieIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
