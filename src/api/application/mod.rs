pub mod handlers;
pub mod models;
pub mod service;
pub mod upload;

// Re-export commonly used types
pub use service::ApplicationService;
