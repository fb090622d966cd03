//! Handler types, dependencies and sender info

use std::sync::Arc;

use teloxide::types::Message;

use crate::core::config::Config;
use crate::storage::JsonStore;
use crate::telegram::templates::DEFAULT_DISPLAY_NAME;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub config: Arc<Config>,
    pub store: Arc<JsonStore>,
    /// Bot username without `@`, used to recognize `/cmd@name`
    pub bot_username: Option<String>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(config: Arc<Config>, store: Arc<JsonStore>, bot_username: Option<String>) -> Self {
        Self {
            config,
            store,
            bot_username,
        }
    }
}

/// The user who sent an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub user_id: u64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

impl UserInfo {
    pub fn new(user_id: u64, first_name: Option<&str>, username: Option<&str>) -> Self {
        Self {
            user_id,
            username: username.map(str::to_string),
            first_name: first_name.map(str::to_string),
        }
    }

    /// Extract sender info from a Telegram message; `None` for messages
    /// without a sender (channel posts)
    pub fn from_message(msg: &Message) -> Option<Self> {
        msg.from.as_ref().map(|u| Self {
            user_id: u.id.0,
            username: u.username.clone(),
            first_name: Some(u.first_name.clone()),
        })
    }

    /// Platform user id as stored in the store
    pub fn id_string(&self) -> String {
        self.user_id.to_string()
    }

    /// First name, then username, then a generic placeholder
    pub fn display_name(&self) -> &str {
        [self.first_name.as_deref(), self.username.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_DISPLAY_NAME)
    }
}
