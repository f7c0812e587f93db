use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use tracing::{error, warn};

/// Wire shape for every error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

/// Handler-level errors mapped onto the HTTP status taxonomy
#[derive(Debug)]
pub enum ApiError {
    /// Malformed input (bad email/password/phone, bad category, bad upload)
    Validation(String),

    /// Missing/invalid token or unknown user
    Unauthorized(String),

    /// Authenticated but not allowed (non-owner, non-admin)
    Forbidden(String),

    /// Missing job or application
    NotFound(String),

    /// Endpoint intentionally not available
    NotImplemented(String),

    /// Database operation failed
    Database(sqlx::Error),

    /// Unexpected failure with a caller-facing generic message
    Internal(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        ApiError::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        ApiError::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::Internal(msg.into())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::NotImplemented(msg) => write!(f, "Not implemented: {}", msg),
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(err)
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(msg) => {
                warn!("Validation error: {}", msg);
                HttpResponse::BadRequest().json(ErrorResponse::new(msg.clone()))
            }
            ApiError::Unauthorized(msg) => {
                warn!("Authentication rejected: {}", msg);
                HttpResponse::Unauthorized().json(ErrorResponse::new(msg.clone()))
            }
            ApiError::Forbidden(msg) => {
                warn!("Authorization rejected: {}", msg);
                HttpResponse::Forbidden().json(ErrorResponse::new(msg.clone()))
            }
            ApiError::NotFound(msg) => {
                warn!("Not found: {}", msg);
                HttpResponse::NotFound().json(ErrorResponse::new(msg.clone()))
            }
            ApiError::NotImplemented(msg) => {
                HttpResponse::NotImplemented().json(ErrorResponse::new(msg.clone()))
            }
            ApiError::Database(e) => {
                // Log the full error server-side, return a generic message
                error!("Database error: {:?}", e);
                HttpResponse::InternalServerError()
                    .json(ErrorResponse::new("Failed to process request"))
            }
            ApiError::Internal(msg) => {
                // Log the detail server-side, return a generic message
                error!("Internal error: {}", msg);
                HttpResponse::InternalServerError()
                    .json(ErrorResponse::new("Failed to process request"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn internal_errors_do_not_echo_their_detail() {
        let resp = ApiError::internal("Database pool missing").error_response();
        assert_eq!(resp.status(), 500);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Failed to process request");
    }

    #[actix_web::test]
    async fn client_errors_keep_their_message() {
        let resp = ApiError::validation("Invalid email format").error_response();
        assert_eq!(resp.status(), 400);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Invalid email format");
    }
}
