pub mod dto;
pub mod handlers;
pub mod models;
pub mod salary;
pub mod search;
pub mod service;

// Re-export commonly used types
pub use models::JobCategory;
pub use service::JobService;
