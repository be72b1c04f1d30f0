//! Start and language command handlers

use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::handlers::commands::sender_id;
use crate::handlers::replies::{reply_language_menu, reply_with_menu};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;

/// Handle /start command - welcome text and the main menu
pub async fn handle_start(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user_id = sender_id(&msg)?;
    debug!(user_id = user_id, chat_id = ?msg.chat.id, "Processing /start command");

    log_user_action(user_id, "start", None);
    reply_with_menu(&bot, msg.chat.id, user_id, "start", &services).await
}

/// Handle /language command - show the language picker
pub async fn handle_language(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user_id = sender_id(&msg)?;
    reply_language_menu(&bot, msg.chat.id, user_id, &services).await
}
