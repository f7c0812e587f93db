pub mod dto;
pub mod extractor;
pub mod handlers;
pub mod oauth;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use extractor::{AdminUser, AuthUser};
pub use service::AuthService;
