//! Card reading command handlers

use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::handlers::commands::sender_id;
use crate::handlers::delivery::send_text;
use crate::handlers::replies::{reply_card, reply_daily, reply_random, reply_with_menu};
use crate::services::{ServiceFactory, MeaningLookup};
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;

/// Handle /daily command
pub async fn handle_daily(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user_id = sender_id(&msg)?;
    reply_daily(&bot, msg.chat.id, user_id, &services).await
}

/// Handle /random command
pub async fn handle_random(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user_id = sender_id(&msg)?;
    reply_random(&bot, msg.chat.id, user_id, &services).await
}

/// Handle /shuffle command
pub async fn handle_shuffle(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user_id = sender_id(&msg)?;
    log_user_action(user_id, "shuffle", None);

    services.tarot_service.shuffle(user_id).await?;
    reply_with_menu(&bot, msg.chat.id, user_id, "shuffle_success", &services).await
}

/// Handle /meaning <card name> command
pub async fn handle_meaning(bot: Bot, msg: Message, query: String, services: ServiceFactory) -> Result<()> {
    let user_id = sender_id(&msg)?;
    log_user_action(user_id, "meaning", Some(query.trim()));

    match services.tarot_service.lookup(&query).await? {
        MeaningLookup::Found(card) => reply_card(&bot, msg.chat.id, user_id, &card, &services).await,
        MeaningLookup::MissingName => {
            debug!(user_id = user_id, "Meaning requested without a card name");
            let text = services.language_service.resolve(user_id, "no_card_name").await;
            send_text(&bot, msg.chat.id, text, None).await
        }
        MeaningLookup::NotFound => {
            let text = services.language_service.resolve(user_id, "card_not_found").await;
            send_text(&bot, msg.chat.id, text, None).await
        }
    }
}
