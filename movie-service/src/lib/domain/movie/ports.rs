use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Genre;
use crate::domain::movie::models::Movie;

/// Port for the movie catalogue (read-only).
#[async_trait]
pub trait MovieServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `Empty` - Catalogue has no movies
    /// * `DatabaseError` - Database operation failed
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError>;

    /// # Errors
    /// * `NotFound` - No movie with this exact title
    async fn get_movie_by_title(&self, title: &str) -> Result<Movie, MovieError>;

    /// Genre of the movie with this title.
    ///
    /// # Errors
    /// * `NotFound` - No movie with this exact title
    async fn get_genre_by_title(&self, title: &str) -> Result<Genre, MovieError>;

    /// Movies by director name; empty when the director is unknown.
    async fn list_movies_by_director(&self, name: &str) -> Result<Vec<Movie>, MovieError>;
}

/// Persistence operations for movies.
#[async_trait]
pub trait MovieRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError>;

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, MovieError>;

    async fn find_by_director(&self, name: &str) -> Result<Vec<Movie>, MovieError>;
}
