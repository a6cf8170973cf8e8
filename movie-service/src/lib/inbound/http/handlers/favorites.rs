use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::path_username;
use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::movie::models::MovieId;
use crate::domain::user::models::Username;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// Owner check, then path parsing.
fn authorize(
    principal_owns: bool,
    username: &str,
    movie_id: &str,
) -> Result<(Username, MovieId), ApiError> {
    if !principal_owns {
        return Err(ApiError::permission_denied());
    }
    let username = path_username(username)?;
    let movie_id = MovieId::from_string(movie_id).map_err(UserError::from)?;
    Ok((username, movie_id))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path((username, movie_id)): Path<(String, String)>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let (username, movie_id) = authorize(principal.is(&username), &username, &movie_id)?;

    state
        .user_service
        .add_favorite(&username, &movie_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path((username, movie_id)): Path<(String, String)>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let (username, movie_id) = authorize(principal.is(&username), &username, &movie_id)?;

    state
        .user_service
        .remove_favorite(&username, &movie_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
