use sqlx::{Pool, Postgres};
use tracing::info;

use crate::api::auth::oauth::verify_google_token;
use crate::api::auth::token::create_token;
use crate::api::error::ApiError;
use crate::api::validation::{is_valid_email, is_valid_password};
use crate::db::models::UserRow;
use crate::db::user_repository::UserRepository;

const PASSWORD_POLICY: &str = "Password must be at least 8 characters long and contain at least \
                               one uppercase letter, one lowercase letter, and one number";

/// Account registration, login and OAuth sign-in
pub struct AuthService {
    pool: Pool<Postgres>,
    jwt_secret: String,
    google_client_id: Option<String>,
    http: reqwest::Client,
}

impl AuthService {
    pub fn new(pool: Pool<Postgres>, jwt_secret: String, google_client_id: Option<String>) -> Self {
        Self {
            pool,
            jwt_secret,
            google_client_id,
            http: reqwest::Client::new(),
        }
    }

    fn issue_token(&self, user_id: i32) -> Result<String, ApiError> {
        create_token(user_id, &self.jwt_secret)
            .map_err(|_| ApiError::internal("Failed to issue session token"))
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<(UserRow, String), ApiError> {
        if !is_valid_email(email) {
            return Err(ApiError::validation("Invalid email format"));
        }
        if !is_valid_password(password) {
            return Err(ApiError::validation(PASSWORD_POLICY));
        }

        if UserRepository::find_by_email(&self.pool, email).await?.is_some() {
            return Err(ApiError::validation("Email already registered"));
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|_| ApiError::internal("Failed to register user"))?;

        let user = UserRepository::create_email_user(&self.pool, email, &password_hash, name).await?;
        info!("Registered user id={} email={}", user.id, user.email);

        let token = self.issue_token(user.id)?;
        Ok((user, token))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(UserRow, String), ApiError> {
        let user = UserRepository::find_by_email(&self.pool, email)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

        // OAuth-only accounts carry no password hash and cannot log in here
        let verified = match &user.password_hash {
            Some(hash) => bcrypt::verify(password, hash)
                .map_err(|_| ApiError::internal("Failed to log in"))?,
            None => false,
        };

        if !verified {
            return Err(ApiError::unauthorized("Invalid email or password"));
        }

        info!("User logged in: id={}", user.id);

        let token = self.issue_token(user.id)?;
        Ok((user, token))
    }

    /// Verify a Google id token and sign the user in, creating the account
    /// on first login.
    pub async fn google_sign_in(&self, id_token: &str) -> Result<(UserRow, String), ApiError> {
        let client_id = self
            .google_client_id
            .as_deref()
            .ok_or_else(|| ApiError::internal("Google sign-in is not configured"))?;

        let identity = verify_google_token(&self.http, client_id, id_token).await?;

        let user = match UserRepository::find_by_email(&self.pool, &identity.email).await? {
            Some(user) => user,
            None => {
                let user = UserRepository::create_oauth_user(
                    &self.pool,
                    &identity.email,
                    &identity.name,
                    "GOOGLE",
                    identity.picture.as_deref(),
                )
                .await?;
                info!("Created Google user id={} email={}", user.id, user.email);
                user
            }
        };

        let token = self.issue_token(user.id)?;
        Ok((user, token))
    }
}
