use serde::{Deserialize, Serialize};

use crate::db::models::UserRow;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct GoogleAuthRequest {
    pub token: String,
}

/// Public view of a user, returned by every auth endpoint
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

impl From<UserRow> for SessionUser {
    fn from(user: UserRow) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            is_admin: user.is_admin,
        }
    }
}
