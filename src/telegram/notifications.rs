//! Best-effort notifications
//!
//! These never fail the caller: delivery errors are logged and dropped, and
//! nothing is retried.

use crate::core::config::OperatorIds;
use crate::telegram::messenger::{chat_id_for, Messenger};
use crate::telegram::templates;

/// Sends a text to the operator.
///
/// The first configured operator id receives the message. With no operator
/// configured the notification is skipped.
pub async fn notify_operator(messenger: &dyn Messenger, operators: &OperatorIds, text: &str) {
    let Some(operator_id) = operators.primary() else {
        log::warn!("⚠️ ADMIN_ID not configured, operator notification skipped");
        return;
    };

    let result = match chat_id_for(operator_id) {
        Ok(chat_id) => messenger.send_text(chat_id, text).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        log::error!("Failed to notify operator {}: {}", operator_id, e);
    }
}

/// Tells a user their UID has been verified
pub async fn notify_user_verified(messenger: &dyn Messenger, user_id: &str) {
    let result = match chat_id_for(user_id) {
        Ok(chat_id) => messenger.send_text(chat_id, templates::AFTER_VERIFY).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => log::info!("Sent verification confirmation to user {}", user_id),
        Err(e) => log::error!("Failed to send verification message to user {}: {}", user_id, e),
    }
}
