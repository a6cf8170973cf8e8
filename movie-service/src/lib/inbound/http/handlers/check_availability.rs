use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn check_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    if state.user_service.username_taken(&username).await? {
        return Err(ApiError::BadRequest("Username already exists".to_string()));
    }
    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData::new("Username available"),
    ))
}

pub async fn check_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    if state.user_service.email_taken(&email).await? {
        return Err(ApiError::BadRequest("Email already exists".to_string()));
    }
    Ok(ApiSuccess::new(StatusCode::OK, MessageData::new("Email available")))
}
