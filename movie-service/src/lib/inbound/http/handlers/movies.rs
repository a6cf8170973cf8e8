use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::movie::models::Genre;
use crate::domain::movie::models::Movie;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<Movie>>, ApiError> {
    state
        .movie_service
        .list_movies()
        .await
        .map_err(ApiError::from)
        .map(|movies| ApiSuccess::new(StatusCode::OK, movies))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<ApiSuccess<Movie>, ApiError> {
    state
        .movie_service
        .get_movie_by_title(&title)
        .await
        .map_err(ApiError::from)
        .map(|movie| ApiSuccess::new(StatusCode::OK, movie))
}

pub async fn get_genre(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<ApiSuccess<Genre>, ApiError> {
    state
        .movie_service
        .get_genre_by_title(&title)
        .await
        .map_err(ApiError::from)
        .map(|genre| ApiSuccess::new(StatusCode::OK, genre))
}

pub async fn get_director_movies(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<Vec<Movie>>, ApiError> {
    state
        .movie_service
        .list_movies_by_director(&name)
        .await
        .map_err(ApiError::from)
        .map(|movies| ApiSuccess::new(StatusCode::OK, movies))
}
