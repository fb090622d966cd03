//! Handler bodies for commands and UID submissions
//!
//! Each function replies through a [`Messenger`], so the same code runs
//! against the real bot and against recording test doubles.

use chrono::Utc;
use teloxide::types::ChatId;

use super::text::{classify_text, TextInput};
use super::types::{HandlerDeps, UserInfo};
use crate::core::error::AppResult;
use crate::storage::VerifyOutcome;
use crate::telegram::admin::{authorize_operator, Unauthorized};
use crate::telegram::bot::Command;
use crate::telegram::messenger::Messenger;
use crate::telegram::notifications::{notify_operator, notify_user_verified};
use crate::telegram::templates;

/// Routes a parsed command to its handler
pub async fn handle_command(
    messenger: &dyn Messenger,
    deps: &HandlerDeps,
    chat_id: ChatId,
    user: &UserInfo,
    command: Command,
) -> AppResult<()> {
    match command {
        Command::Before => messenger.send_text(chat_id, templates::BEFORE_START).await,
        Command::Start => handle_start(messenger, deps, chat_id, user).await,
        Command::Help => messenger.send_text(chat_id, templates::HELP).await,
        Command::MyId => messenger.send_text(chat_id, &templates::your_id(user.user_id)).await,
        Command::Verify(target) => match authorize_operator(&deps.config.operators, &user.id_string()) {
            Ok(()) => handle_verify(messenger, deps, chat_id, target.as_deref()).await,
            Err(Unauthorized) => {
                log::warn!("⛔ User {} tried /verify without operator rights", user.user_id);
                messenger.send_text(chat_id, templates::NOT_AUTHORIZED).await
            }
        },
    }
}

/// Sends the welcome text with the referral link and promo code
pub async fn handle_start(
    messenger: &dyn Messenger,
    deps: &HandlerDeps,
    chat_id: ChatId,
    user: &UserInfo,
) -> AppResult<()> {
    let text = templates::welcome(user.display_name(), &deps.config.referral_link, &deps.config.promo_code);
    messenger.send_html(chat_id, &text).await
}

/// Handles a non-command text message
///
/// # Behavior
///
/// - Accepted UID: store it, acknowledge, then forward it to the operator
/// - Malformed UID: corrective reply
/// - Anything else: format hint
pub async fn handle_text(
    messenger: &dyn Messenger,
    deps: &HandlerDeps,
    chat_id: ChatId,
    user: &UserInfo,
    text: &str,
) -> AppResult<()> {
    let uid = match classify_text(text) {
        TextInput::Uid(uid) => uid,
        TextInput::InvalidUid => return messenger.send_text(chat_id, templates::INVALID_UID).await,
        TextInput::Other => return messenger.send_text(chat_id, templates::FORMAT_HINT).await,
    };

    let user_id = user.id_string();
    if let Err(e) = deps.store.submit_uid(&user_id, &uid, Utc::now()).await {
        log::error!("Failed to store UID {} for user {}: {}", uid, user_id, e);
        return messenger.send_text(chat_id, templates::STORE_UNAVAILABLE).await;
    }
    log::info!("📥 User {} submitted UID {}", user_id, uid);

    messenger.send_text(chat_id, templates::UID_RECEIVED).await?;

    let notification = templates::new_submission(user.display_name(), &user_id, &uid);
    notify_operator(messenger, &deps.config.operators, &notification).await;
    Ok(())
}

/// Marks a user as verified. The caller must already be authorized.
pub async fn handle_verify(
    messenger: &dyn Messenger,
    deps: &HandlerDeps,
    chat_id: ChatId,
    target: Option<&str>,
) -> AppResult<()> {
    let Some(target) = target else {
        return messenger.send_text(chat_id, templates::VERIFY_USAGE).await;
    };

    let outcome = match deps.store.verify(target).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Failed to verify user {}: {}", target, e);
            return messenger.send_text(chat_id, templates::STORE_UNAVAILABLE).await;
        }
    };

    match outcome {
        VerifyOutcome::NoSubmission => messenger.send_text(chat_id, templates::NO_UID_FOUND).await,
        VerifyOutcome::AlreadyVerified => messenger.send_text(chat_id, templates::ALREADY_VERIFIED).await,
        VerifyOutcome::Verified => {
            log::info!("✅ User {} verified", target);
            notify_user_verified(messenger, target).await;
            messenger
                .send_text(chat_id, &templates::verified_and_notified(target))
                .await
        }
    }
}
