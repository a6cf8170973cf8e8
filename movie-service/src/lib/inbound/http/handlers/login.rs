use auth::AuthenticationError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let result = state
        .authenticator
        .login(&body.username, &body.password)
        .await
        .map_err(|e| match e {
            AuthenticationError::Rejected(_) => {
                ApiError::Unauthorized("Invalid username or password".to_string())
            }
            AuthenticationError::StoreUnavailable(ref err) => {
                tracing::warn!(error = %err, "Login unavailable");
                ApiError::ServiceUnavailable("Service temporarily unavailable".to_string())
            }
            AuthenticationError::Issuance(_) | AuthenticationError::Internal(_) => {
                ApiError::InternalServerError(e.to_string())
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            user: (&result.principal).into(),
            token: result.access_token,
        },
    ))
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub user: UserData,
    pub token: String,
}
