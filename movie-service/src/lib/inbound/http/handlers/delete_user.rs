use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::path_username;
use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(username): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    if !principal.is(&username) {
        return Err(ApiError::permission_denied());
    }
    let target = path_username(&username)?;

    state
        .user_service
        .delete_user(&target)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageData::new(format!("{} was deleted.", username)),
            )
        })
}
