//! Bot initialization and command parsing
//!
//! This module contains:
//! - Command enum and its parser
//! - Bot instance creation
//! - Command menu registration

use anyhow::Result;
use reqwest::ClientBuilder;
use secrecy::ExposeSecret;
use teloxide::prelude::*;
use teloxide::types::BotCommand;

use crate::core::config::Config;

/// Commands the bot understands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Before,
    Help,
    MyId,
    /// Operator-only; carries the first argument, if any
    Verify(Option<String>),
}

impl Command {
    /// Parses a message text as a bot command.
    ///
    /// Command names are case-insensitive. A `/cmd@name` suffix must name this
    /// bot when the bot's username is known. Returns `None` for plain text,
    /// unknown commands and commands addressed to other bots.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let rest = text.trim_start().strip_prefix('/')?;
        let (head, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let (name, mention) = match head.split_once('@') {
            Some((name, mention)) => (name, Some(mention)),
            None => (head, None),
        };

        if let (Some(mention), Some(username)) = (mention, bot_username) {
            if !mention.eq_ignore_ascii_case(username) {
                return None;
            }
        }

        match name.to_ascii_lowercase().as_str() {
            "start" => Some(Self::Start),
            "before" => Some(Self::Before),
            "help" => Some(Self::Help),
            "myid" => Some(Self::MyId),
            "verify" => Some(Self::Verify(args.split_whitespace().next().map(str::to_string))),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Before => "before",
            Self::Help => "help",
            Self::MyId => "myid",
            Self::Verify(_) => "verify",
        }
    }
}

/// Entries for the Telegram command menu
pub fn bot_commands() -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", "Begin onboarding"),
        BotCommand::new("before", "Show pre-start text"),
        BotCommand::new("help", "List commands"),
        BotCommand::new("myid", "Get your telegram id"),
        BotCommand::new("verify", "Admin only: verify a user's UID"),
    ]
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Missing token or HTTP client failure
pub fn create_bot(config: &Config) -> Result<Bot> {
    let token = config.require_token()?;
    let client = ClientBuilder::new().timeout(config.request_timeout).build()?;
    let bot = Bot::with_client(token.expose_secret(), client);

    let bot = match config.bot_api_url {
        Some(ref url) => {
            log::info!("Using custom Bot API URL: {}", url);
            bot.set_api_url(url.clone())
        }
        None => bot,
    };

    Ok(bot)
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(bot_commands()).await?;
    Ok(())
}
