use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::SigningSecret;
use movie_service::domain::movie::errors::MovieError;
use movie_service::domain::movie::models::Director;
use movie_service::domain::movie::models::Genre;
use movie_service::domain::movie::models::Movie;
use movie_service::domain::movie::models::MovieId;
use movie_service::domain::movie::ports::MovieRepository;
use movie_service::domain::movie::service::MovieService;
use movie_service::domain::user::errors::UserError;
use movie_service::domain::user::models::AuthenticatedUser;
use movie_service::domain::user::models::User;
use movie_service::domain::user::models::UserId;
use movie_service::domain::user::models::Username;
use movie_service::domain::user::ports::UserRepository;
use movie_service::domain::user::service::UserService;
use movie_service::inbound::http::router::create_router;
use movie_service::outbound::credentials::UserCredentialStore;
use serde_json::json;
use serde_json::Value;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const PASSWORD: &str = "correct-pw";

/// In-memory user storage with the same uniqueness rules as the users table.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
    unavailable: AtomicBool,
}

impl MemoryUserRepository {
    /// Make every following lookup fail like a timed out pool.
    pub fn take_offline(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users
            .lock()
            .unwrap()
            .values()
            .any(|u| u.username.as_str() == username)
    }

    pub fn principal(&self, username: &str) -> AuthenticatedUser {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username.as_str() == username)
            .cloned()
            .map(AuthenticatedUser::from)
            .expect("User not stored")
    }

    fn check(&self) -> Result<(), UserError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(UserError::DatabaseError("pool timed out".to_string()))
        } else {
            Ok(())
        }
    }

    fn check_unique(users: &HashMap<UserId, User>, user: &User) -> Result<(), UserError> {
        for other in users.values().filter(|other| other.id != user.id) {
            if other.username == user.username {
                return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
            }
            if other.email == user.email {
                return Err(UserError::EmailAlreadyExists(user.email.as_str().to_string()));
            }
        }
        Ok(())
    }

    fn modify(
        &self,
        id: &UserId,
        change: impl FnOnce(&mut User),
    ) -> Result<Option<User>, UserError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        Ok(users.get_mut(id).map(|user| {
            change(user);
            user.clone()
        }))
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        Self::check_unique(&users, &user)?;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        self.check()?;
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        self.check()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        self.check()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        self.check()?;
        let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        Self::check_unique(&users, &user)?;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn add_favorite(
        &self,
        id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError> {
        self.modify(id, |user| {
            if !user.favorites.contains(movie_id) {
                user.favorites.push(*movie_id);
            }
        })
    }

    async fn remove_favorite(
        &self,
        id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError> {
        self.modify(id, |user| user.favorites.retain(|m| m != movie_id))
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        self.check()?;
        self.users
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }
}

pub struct MemoryMovieRepository {
    movies: Vec<Movie>,
}

impl MemoryMovieRepository {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }
}

#[async_trait]
impl MovieRepository for MemoryMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        Ok(self.movies.clone())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, MovieError> {
        Ok(self.movies.iter().find(|m| m.title == title).cloned())
    }

    async fn find_by_director(&self, name: &str) -> Result<Vec<Movie>, MovieError> {
        Ok(self
            .movies
            .iter()
            .filter(|m| m.director.name == name)
            .cloned()
            .collect())
    }
}

pub fn movie(title: &str, genre: &str, director: &str) -> Movie {
    Movie {
        id: MovieId::new(),
        title: title.to_string(),
        description: format!("{} description", title),
        genre: Genre {
            name: genre.to_string(),
            description: format!("{} films", genre),
        },
        director: Director {
            name: director.to_string(),
            bio: format!("{} biography", director),
            birth_year: Some(1970),
            death_year: None,
        },
        image_path: Some(format!("{}.png", title.to_lowercase())),
        featured: false,
    }
}

pub fn catalogue() -> Vec<Movie> {
    vec![
        movie("Inception", "Science Fiction", "Christopher Nolan"),
        movie("Memento", "Thriller", "Christopher Nolan"),
        movie("Alien", "Horror", "Ridley Scott"),
    ]
}

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub users: Arc<MemoryUserRepository>,
    pub movies: Vec<Movie>,
    pub authenticator: Arc<Authenticator<UserCredentialStore>>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_movies(catalogue()).await
    }

    /// Spawn the application in a background task with the given catalogue
    pub async fn spawn_with_movies(movies: Vec<Movie>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(MemoryUserRepository::default());
        let secret = SigningSecret::new(TEST_SECRET).unwrap();
        let authenticator = Arc::new(Authenticator::new(
            Arc::new(UserCredentialStore::new(
                Arc::clone(&users) as Arc<dyn UserRepository>
            )),
            &secret,
            chrono::Duration::days(7),
        )
        .unwrap());

        let user_service = Arc::new(UserService::new(Arc::clone(&users)));
        let movie_service = Arc::new(MovieService::new(Arc::new(MemoryMovieRepository::new(
            movies.clone(),
        ))));

        let router = create_router(
            user_service,
            movie_service,
            Arc::clone(&authenticator),
            concat!(env!("CARGO_MANIFEST_DIR"), "/public"),
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            users,
            movies,
            authenticator,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a user with the shared test password.
    pub async fn register(&self, username: &str) -> Value {
        let response = self
            .post("/users")
            .json(&json!({
                "username": username,
                "email": format!("{}@example.com", username),
                "password": PASSWORD,
                "birthday": "1990-04-01"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register then log in, returning the bearer token.
    pub async fn register_and_login(&self, username: &str) -> String {
        self.register(username).await;
        let body: Value = self
            .login(username, PASSWORD)
            .await
            .json()
            .await
            .expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Login returned no token")
            .to_string()
    }
}
