use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Director;
use crate::domain::movie::models::Genre;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::ports::MovieRepository;

const MOVIE_COLUMNS: &str = "id, title, description, genre, director, image_path, featured";

#[derive(sqlx::FromRow)]
struct MovieRow {
    id: Uuid,
    title: String,
    description: String,
    genre: Json<Genre>,
    director: Json<Director>,
    image_path: Option<String>,
    featured: bool,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: MovieId(row.id),
            title: row.title,
            description: row.description,
            genre: row.genre.0,
            director: row.director.0,
            image_path: row.image_path,
            featured: row.featured,
        }
    }
}

pub struct PostgresMovieRepository {
    pool: PgPool,
}

impl PostgresMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        let query = format!("SELECT {} FROM movies ORDER BY title", MOVIE_COLUMNS);

        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, MovieError> {
        let query = format!("SELECT {} FROM movies WHERE title = $1 LIMIT 1", MOVIE_COLUMNS);

        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(title)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(row.map(Movie::from))
    }

    async fn find_by_director(&self, name: &str) -> Result<Vec<Movie>, MovieError> {
        let query = format!(
            "SELECT {} FROM movies WHERE director->>'name' = $1 ORDER BY title",
            MOVIE_COLUMNS
        );

        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .bind(name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }
}
