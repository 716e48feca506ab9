pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod forms;
pub mod general;
pub mod logging;
pub mod plot;
pub mod report;

// Re-export commonly used items for convenience
pub use error::{ConfigError, FormError, ServiceError};
pub use general::finance::project;
