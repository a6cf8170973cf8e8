use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::movie::errors::MovieError;
use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;

pub mod check_availability;
pub mod create_user;
pub mod delete_user;
pub mod favorites;
pub mod get_user;
pub mod list_users;
pub mod login;
pub mod movies;
pub mod update_user;
pub mod welcome;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
    ServiceUnavailable(String),
}

impl ApiError {
    /// Rejection for an authenticated caller acting on someone else's account.
    pub fn permission_denied() -> Self {
        ApiError::Forbidden("Permission denied".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidMovieId(_)
            | UserError::PasswordRequired => ApiError::UnprocessableEntity(err.to_string()),
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<MovieError> for ApiError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::NotFound(_) | MovieError::Empty => ApiError::NotFound(err.to_string()),
            MovieError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Parse a username taken from the request path.
///
/// A name that fails validation cannot exist, so it is reported as not found.
pub(crate) fn path_username(raw: &str) -> Result<Username, ApiError> {
    Username::new(raw.to_string())
        .map_err(|_| ApiError::from(UserError::NotFoundByUsername(raw.to_string())))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Plain confirmation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub birthday: Option<NaiveDate>,
    pub favorites: Vec<String>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.to_string(),
            email: user.email.as_str().to_string(),
            birthday: user.birthday,
            favorites: user.favorites.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<&AuthenticatedUser> for UserData {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.user_id.to_string(),
            username: user.username.to_string(),
            email: user.email.as_str().to_string(),
            birthday: user.birthday,
            favorites: user.favorites.iter().map(ToString::to_string).collect(),
        }
    }
}
