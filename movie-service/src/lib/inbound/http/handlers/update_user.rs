use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::path_username;
use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// HTTP request body for updating a user (raw JSON)
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        Ok(UpdateUserCommand {
            username: Username::new(self.username)?,
            email: EmailAddress::new(self.email)?,
            password: self.password,
            birthday: self.birthday,
        })
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(username): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    if !principal.is(&username) {
        return Err(ApiError::permission_denied());
    }
    let target = path_username(&username)?;
    let command = req.try_into_command()?;

    state
        .user_service
        .update_user(&target, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
