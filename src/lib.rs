//! vipgate - Telegram onboarding bot with manual UID verification
//!
//! The bot sends scripted onboarding texts, collects a numeric UID from each
//! user, forwards it to an operator, and lets the operator mark the user as
//! verified with `/verify`.
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors and logging
//! - `storage`: JSON file store for submissions and verified users
//! - `telegram`: Command routing, handlers, templates and notifications
//! - `cli`: Command-line interface

pub mod cli;
pub mod core;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult, Config};
pub use storage::{JsonStore, StoreData};
pub use telegram::{schema, HandlerDeps};
