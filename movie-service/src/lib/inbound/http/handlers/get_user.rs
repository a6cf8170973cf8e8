use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::path_username;
use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let username = path_username(&username)?;

    state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
