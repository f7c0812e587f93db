use serde::Serialize;

pub mod admin;
pub mod application;
pub mod auth;
pub mod error;
pub mod health;
pub mod job;
pub mod validation;

/// Plain acknowledgement body used by logout/delete style endpoints
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
