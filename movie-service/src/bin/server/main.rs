use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use auth::Authenticator;
use auth::SigningSecret;
use movie_service::config::Config;
use movie_service::domain::movie::service::MovieService;
use movie_service::domain::user::ports::UserRepository;
use movie_service::domain::user::service::UserService;
use movie_service::inbound::http::router::create_router;
use movie_service::outbound::credentials::UserCredentialStore;
use movie_service::outbound::repositories::PostgresMovieRepository;
use movie_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_service=debug,auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "movie-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        static_dir = %config.server.static_dir,
        token_ttl_days = config.jwt.expiration_days,
        "Configuration loaded"
    );

    let secret = SigningSecret::new(&config.jwt.secret).context("Invalid jwt.secret")?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let movie_repository = Arc::new(PostgresMovieRepository::new(pg_pool));

    let credential_store = UserCredentialStore::new(
        Arc::clone(&user_repository) as Arc<dyn UserRepository>
    );
    let authenticator = Arc::new(
        Authenticator::new(
            Arc::new(credential_store),
            &secret,
            chrono::Duration::days(config.jwt.expiration_days),
        )
        .context("Invalid jwt.expiration_days")?,
    );

    let user_service = Arc::new(UserService::new(user_repository));
    let movie_service = Arc::new(MovieService::new(movie_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        movie_service,
        authenticator,
        &config.server.static_dir,
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
