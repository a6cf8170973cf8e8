use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Genre;
use crate::domain::movie::models::Movie;
use crate::domain::movie::ports::MovieRepository;
use crate::domain::movie::ports::MovieServicePort;

pub struct MovieService<MR>
where
    MR: MovieRepository,
{
    repository: Arc<MR>,
}

impl<MR> MovieService<MR>
where
    MR: MovieRepository,
{
    pub fn new(repository: Arc<MR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<MR> MovieServicePort for MovieService<MR>
where
    MR: MovieRepository,
{
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError> {
        let movies = self.repository.list_all().await?;
        if movies.is_empty() {
            return Err(MovieError::Empty);
        }
        Ok(movies)
    }

    async fn get_movie_by_title(&self, title: &str) -> Result<Movie, MovieError> {
        self.repository
            .find_by_title(title)
            .await?
            .ok_or_else(|| MovieError::NotFound(title.to_string()))
    }

    async fn get_genre_by_title(&self, title: &str) -> Result<Genre, MovieError> {
        self.get_movie_by_title(title).await.map(|movie| movie.genre)
    }

    async fn list_movies_by_director(&self, name: &str) -> Result<Vec<Movie>, MovieError> {
        self.repository.find_by_director(name).await
    }
}
