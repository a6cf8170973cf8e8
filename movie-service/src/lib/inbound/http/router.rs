use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::check_availability::check_email;
use super::handlers::check_availability::check_username;
use super::handlers::create_user::create_user;
use super::handlers::delete_user::delete_user;
use super::handlers::favorites::add_favorite;
use super::handlers::favorites::remove_favorite;
use super::handlers::get_user::get_user;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::movies::get_director_movies;
use super::handlers::movies::get_genre;
use super::handlers::movies::get_movie;
use super::handlers::movies::list_movies;
use super::handlers::update_user::update_user;
use super::handlers::welcome::welcome;
use super::middleware::require_auth;
use crate::domain::movie::ports::MovieServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::outbound::credentials::UserCredentialStore;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub movie_service: Arc<dyn MovieServicePort>,
    pub authenticator: Arc<Authenticator<UserCredentialStore>>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    movie_service: Arc<dyn MovieServicePort>,
    authenticator: Arc<Authenticator<UserCredentialStore>>,
    static_dir: &str,
) -> Router {
    let state = AppState {
        user_service,
        movie_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/", get(welcome))
        .route("/login", post(login))
        .route("/users", post(create_user))
        .route("/users/check-username/:username", get(check_username))
        .route("/users/check-email/:email", get(check_email));

    let protected_routes = Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/:title", get(get_movie))
        .route("/movies/genre/:title", get(get_genre))
        .route("/movies/director/:name", get(get_director_movies))
        .route("/users", get(list_users))
        .route(
            "/users/:username",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route(
            "/users/:username/movies/:movie_id",
            post(add_favorite).delete(remove_favorite),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback_service(ServeDir::new(static_dir))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
