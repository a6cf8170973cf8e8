use auth::AuthFailure;
use auth::AuthenticationError;
use auth::Credentials;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use http::header;
use http::HeaderValue;

use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiResponseBody;
use crate::inbound::http::router::AppState;

/// Route guard for protected endpoints.
///
/// Verifies the bearer token, resolves the user it names and stores the
/// [`AuthenticatedUser`] in request extensions. On failure the request is
/// answered here and the handler never runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let principal = state
        .authenticator
        .authenticate(Credentials::Bearer { authorization })
        .await
        .map_err(AuthRejection::from)?;

    tracing::debug!(user_id = %principal.user_id, "Request authenticated");

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

/// Why the guard refused a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    Unauthorized(AuthFailure),
    Unavailable,
    Internal,
}

impl From<AuthenticationError> for AuthRejection {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::Rejected(failure) => {
                tracing::warn!(reason = failure.code(), "Request rejected");
                AuthRejection::Unauthorized(failure)
            }
            AuthenticationError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "Credential store unavailable");
                AuthRejection::Unavailable
            }
            e => {
                tracing::error!(error = %e, "Authentication failed");
                AuthRejection::Internal
            }
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let failure = match self {
            AuthRejection::Unauthorized(failure) => failure,
            AuthRejection::Unavailable => {
                return error_response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service temporarily unavailable",
                )
            }
            AuthRejection::Internal => {
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let (message, challenge) = match failure {
            AuthFailure::NoToken => ("Missing bearer token", "Bearer"),
            AuthFailure::TokenExpired => ("Token expired", r#"Bearer error="invalid_token""#),
            AuthFailure::TokenInvalid
            | AuthFailure::UserNotFound
            | AuthFailure::InvalidCredentials => ("Invalid token", r#"Bearer error="invalid_token""#),
        };

        let mut response = error_response(StatusCode::UNAUTHORIZED, message);
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(challenge));
        response
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ApiResponseBody::new_error(status, message.to_string())),
    )
        .into_response()
}

/// The principal attached by [`require_auth`].
///
/// Only usable on guarded routes; elsewhere it rejects as if no token was sent.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser missing from request extensions");
                AuthRejection::Unauthorized(AuthFailure::NoToken)
            })
    }
}
