use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Database representation of a user account
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub email: String,
    pub password_hash: Option<String>,
    pub name: String,
    pub is_admin: bool,
    pub auth_provider: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Database representation of a job posting
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobRow {
    pub id: i32,
    pub name: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub salary: String,
    pub logo: String,
    pub is_approved: bool,
    pub user_id: i32,
    pub post_date: DateTime<Utc>,
}

/// Job joined with the poster's public fields
///
/// `poster_name`/`poster_email` come from the users join; the response layer
/// nests them under a `user` object.
#[derive(Debug, Clone, FromRow)]
pub struct JobWithPoster {
    pub id: i32,
    pub name: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub salary: String,
    pub logo: String,
    pub is_approved: bool,
    pub user_id: i32,
    pub post_date: DateTime<Utc>,
    pub poster_name: String,
    pub poster_email: String,
}

/// Database representation of a job application
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationRow {
    pub id: i32,
    pub job_id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume_url: Option<String>,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}
