use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::movie::models::MovieId;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

const USER_COLUMNS: &str = "id, username, email, password_hash, birthday, favorites, created_at";

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    birthday: Option<NaiveDate>,
    favorites: Vec<Uuid>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(row.id),
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
            birthday: row.birthday,
            favorites: row.favorites.into_iter().map(MovieId).collect(),
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(
        &self,
        predicate: &str,
        value: &str,
    ) -> Result<Option<User>, UserError> {
        let query = format!("SELECT {} FROM users WHERE {} = $1", USER_COLUMNS, predicate);

        sqlx::query_as::<_, UserRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?
            .map(User::try_from)
            .transpose()
    }
}

/// Map unique violations on username/email to their domain errors.
fn map_write_error(e: sqlx::Error, user: &User) -> UserError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if db_err.constraint() == Some("users_username_key") {
                return UserError::UsernameAlreadyExists(user.username.to_string());
            }
            if db_err.constraint() == Some("users_email_key") {
                return UserError::EmailAlreadyExists(user.email.as_str().to_string());
            }
        }
    }
    UserError::DatabaseError(e.to_string())
}

fn favorite_uuids(user: &User) -> Vec<Uuid> {
    user.favorites.iter().map(|movie_id| movie_id.0).collect()
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, birthday, favorites, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.birthday)
        .bind(favorite_uuids(&user))
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &user))?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);

        sqlx::query_as::<_, UserRow>(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        self.fetch_one_where("username", username.as_str()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        self.fetch_one_where("email", email).await
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let query = format!("SELECT {} FROM users ORDER BY created_at DESC", USER_COLUMNS);

        sqlx::query_as::<_, UserRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(User::try_from)
            .collect()
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = $2, email = $3, password_hash = $4, birthday = $5
            WHERE id = $1
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.birthday)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &user))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.id.to_string()));
        }

        Ok(user)
    }

    async fn add_favorite(
        &self,
        id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError> {
        let query = format!(
            r#"
            UPDATE users
            SET favorites = CASE
                WHEN $2 = ANY(favorites) THEN favorites
                ELSE array_append(favorites, $2)
            END
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query_as::<_, UserRow>(&query)
            .bind(id.0)
            .bind(movie_id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?
            .map(User::try_from)
            .transpose()
    }

    async fn remove_favorite(
        &self,
        id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError> {
        let query = format!(
            "UPDATE users SET favorites = array_remove(favorites, $2) WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        );

        sqlx::query_as::<_, UserRow>(&query)
            .bind(id.0)
            .bind(movie_id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?
            .map(User::try_from)
            .transpose()
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
