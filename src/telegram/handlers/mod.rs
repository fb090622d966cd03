//! Telegram bot handler tree configuration
//!
//! This module provides the main dispatcher schema for the Telegram bot.
//! The handlers are organized in a testable way: the handler bodies take a
//! [`Messenger`](crate::telegram::messenger::Messenger), and integration tests
//! can use the same handler tree as production code.

mod commands;
mod schema;
mod text;
mod types;

pub use commands::{handle_command, handle_start, handle_text, handle_verify};
pub use schema::schema;
pub use text::{classify_text, TextInput};
pub use types::{HandlerDeps, HandlerError, UserInfo};
