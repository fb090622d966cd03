//! Common test utilities
//!
//! This module is shared across all integration tests

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use teloxide::types::ChatId;
use vipgate::core::{AppError, AppResult, Config};
use vipgate::storage::JsonStore;
use vipgate::telegram::{HandlerDeps, Messenger, UserInfo};

pub const OPERATOR_ID: u64 = 5120079243;

/// A message captured by [`RecordingMessenger`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: ChatId,
    pub text: String,
    pub html: bool,
}

/// Messenger that records every send and can refuse delivery to chosen chats
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<SentMessage>>,
    blocked: Vec<ChatId>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends to `chat_id` fail, like a user who blocked the bot
    pub fn blocking(chat_id: ChatId) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            blocked: vec![chat_id],
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, chat_id: ChatId) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|m| m.chat_id == chat_id)
            .map(|m| m.text)
            .collect()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    fn record(&self, chat_id: ChatId, text: &str, html: bool) -> AppResult<()> {
        if self.blocked.contains(&chat_id) {
            return Err(AppError::Anyhow(anyhow::anyhow!("Forbidden: bot was blocked by the user")));
        }
        self.sent.lock().unwrap().push(SentMessage {
            chat_id,
            text: text.to_string(),
            html,
        });
        Ok(())
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> AppResult<()> {
        self.record(chat_id, text, false)
    }

    async fn send_html(&self, chat_id: ChatId, text: &str) -> AppResult<()> {
        self.record(chat_id, text, true)
    }
}

/// Handler dependencies backed by a store file inside `dir`
pub fn test_deps(dir: &Path, admin_id: &str) -> HandlerDeps {
    test_deps_with_store(dir.join("bot_data.json").as_path(), admin_id)
}

pub fn test_deps_with_store(data_file: &Path, admin_id: &str) -> HandlerDeps {
    let data_file = data_file.to_string_lossy().to_string();
    let admin_id = admin_id.to_string();
    let config = Config::from_lookup(|key| match key {
        "ADMIN_ID" => Some(admin_id.clone()),
        "DATA_FILE" => Some(data_file.clone()),
        "BROKER_LINK" => Some("https://broker.example/r/abc".to_string()),
        "BONUS_CODE" => Some("PROMO1".to_string()),
        _ => None,
    })
    .unwrap();
    let store = JsonStore::new(&config.data_file);
    HandlerDeps::new(Arc::new(config), Arc::new(store), Some("vip_test_bot".to_string()))
}

pub fn user(id: u64, first_name: &str) -> UserInfo {
    UserInfo::new(id, Some(first_name), None)
}

pub fn operator() -> UserInfo {
    user(OPERATOR_ID, "Operator")
}

/// Private chat with the given user
pub fn chat(user: &UserInfo) -> ChatId {
    ChatId(user.user_id as i64)
}
