//! Core utilities, configuration, errors and logging

pub mod config;
pub mod error;
pub mod logging;

// Re-exports for convenience
pub use config::{Config, OperatorIds};
pub use error::{AppError, AppResult};
pub use logging::{init_logger, log_configuration};
