//! Outbound message transport
//!
//! Handlers only need to send text to a chat, so they talk to the
//! [`Messenger`] trait instead of the teloxide `Bot` directly. This keeps the
//! handler bodies testable with a recording implementation.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};

use crate::core::error::{AppError, AppResult};

#[async_trait]
pub trait Messenger: Send + Sync {
    /// Sends plain text
    async fn send_text(&self, chat_id: ChatId, text: &str) -> AppResult<()>;

    /// Sends text formatted as Telegram HTML
    async fn send_html(&self, chat_id: ChatId, text: &str) -> AppResult<()>;
}

#[async_trait]
impl Messenger for Bot {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> AppResult<()> {
        self.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn send_html(&self, chat_id: ChatId, text: &str) -> AppResult<()> {
        self.send_message(chat_id, text).parse_mode(ParseMode::Html).await?;
        Ok(())
    }
}

/// Parses a stored platform user id into a chat id for direct messages.
///
/// In private chats the chat id equals the user id.
pub fn chat_id_for(user_id: &str) -> AppResult<ChatId> {
    user_id
        .trim()
        .parse::<i64>()
        .map(ChatId)
        .map_err(|_| AppError::InvalidChatId(user_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_id_for_numeric_id() {
        assert_eq!(chat_id_for("5120079243").unwrap(), ChatId(5120079243));
    }

    #[test]
    fn test_chat_id_for_rejects_garbage() {
        assert!(matches!(chat_id_for("@someone"), Err(AppError::InvalidChatId(_))));
        assert!(matches!(chat_id_for(""), Err(AppError::InvalidChatId(_))));
    }
}
