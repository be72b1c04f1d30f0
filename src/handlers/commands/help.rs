//! Help command handler

use teloxide::{Bot, types::Message};
use crate::handlers::commands::sender_id;
use crate::handlers::replies::reply_with_menu;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user_id = sender_id(&msg)?;
    reply_with_menu(&bot, msg.chat.id, user_id, "help", &services).await
}
