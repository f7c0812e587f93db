use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::db::models::UserRow;

const USER_COLUMNS: &str =
    "id, email, password_hash, name, is_admin, auth_provider, avatar, created_at";

/// Repository for User database operations
pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_email(
        pool: &Pool<Postgres>,
        email: &str,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_id(
        pool: &Pool<Postgres>,
        id: i32,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a user registered with an email and password
    pub async fn create_email_user(
        pool: &Pool<Postgres>,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<UserRow, sqlx::Error> {
        debug!("Creating email user: email={}", email);

        sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (email, password_hash, name, auth_provider) \
             VALUES ($1, $2, $3, 'EMAIL') \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Create a user from a verified OAuth identity (no password hash)
    pub async fn create_oauth_user(
        pool: &Pool<Postgres>,
        email: &str,
        name: &str,
        provider: &str,
        avatar: Option<&str>,
    ) -> Result<UserRow, sqlx::Error> {
        debug!("Creating {} user: email={}", provider, email);

        sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (email, name, auth_provider, avatar) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(email)
        .bind(name)
        .bind(provider)
        .bind(avatar)
        .fetch_one(pool)
        .await
    }

    /// Grant admin privileges to the user with the given email.
    /// Returns the updated row, or None when no such user exists.
    pub async fn grant_admin(
        pool: &Pool<Postgres>,
        email: &str,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET is_admin = TRUE WHERE email = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(email)
        .fetch_optional(pool)
        .await
    }
}
