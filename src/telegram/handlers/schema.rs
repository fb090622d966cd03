//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::{handle_command, handle_text};
use super::types::{HandlerDeps, HandlerError, UserInfo};
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same schema is used in production and in integration tests.
///
/// # Arguments
/// * `deps` - Handler dependencies (configuration, store, bot username)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_text = deps;

    dptree::entry()
        // Known commands; unknown ones fall through and are ignored
        .branch(command_handler(deps_commands))
        // Free text: UID submissions
        .branch(text_handler(deps_text))
}

fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let bot_username = deps.bot_username.clone();

    Update::filter_message()
        .filter_map(move |msg: Message| {
            msg.text()
                .and_then(|text| Command::parse(text, bot_username.as_deref()))
        })
        .endpoint(move |bot: Bot, msg: Message, command: Command| {
            let deps = deps.clone();
            async move { on_command(bot, msg, command, deps).await }
        })
}

fn text_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| !text.starts_with('/')).unwrap_or(false))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move { on_text(bot, msg, deps).await }
        })
}

async fn on_command(bot: Bot, msg: Message, command: Command, deps: HandlerDeps) -> Result<(), HandlerError> {
    let Some(user) = UserInfo::from_message(&msg) else {
        log::debug!("Ignoring /{} without a sender in chat {}", command.name(), msg.chat.id);
        return Ok(());
    };

    log::info!("/{} from user {} in chat {}", command.name(), user.user_id, msg.chat.id);
    handle_command(&bot, &deps, msg.chat.id, &user, command).await?;
    Ok(())
}

async fn on_text(bot: Bot, msg: Message, deps: HandlerDeps) -> Result<(), HandlerError> {
    let (Some(user), Some(text)) = (UserInfo::from_message(&msg), msg.text()) else {
        return Ok(());
    };

    log::debug!("Text from user {}: {:?}", user.user_id, text);
    handle_text(&bot, &deps, msg.chat.id, &user, text).await?;
    Ok(())
}
