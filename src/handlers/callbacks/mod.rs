//! Callback query handlers module
//!
//! This module contains handlers for all inline keyboard button callbacks

use teloxide::{Bot, types::{CallbackQuery, ChatId}, prelude::*};
use tracing::{info, debug, warn};
use crate::handlers::delivery::settle_interaction;
use crate::handlers::replies;
use crate::services::{ServiceFactory, SpreadKind};
use crate::utils::errors::{TarotError, Result};

/// Button actions, encoded as `action[:argument]` callback data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    Daily,
    Spread(SpreadKind),
    History,
    LanguageMenu,
    SetLanguage(String),
}

impl CallbackAction {
    /// Parse callback data; unknown or malformed data yields `None`
    pub fn parse(data: &str) -> Option<Self> {
        let (action, argument) = match data.split_once(':') {
            Some((action, argument)) => (action, Some(argument)),
            None => (data, None),
        };

        match (action, argument) {
            ("daily", None) => Some(CallbackAction::Daily),
            ("spread", Some(kind)) => SpreadKind::parse(kind).map(CallbackAction::Spread),
            ("history", None) => Some(CallbackAction::History),
            ("language", None) => Some(CallbackAction::LanguageMenu),
            ("lang", Some(code)) if !code.is_empty() => Some(CallbackAction::SetLanguage(code.to_string())),
            _ => None,
        }
    }

    /// Callback data for this action
    pub fn data(&self) -> String {
        match self {
            CallbackAction::Daily => "daily".to_string(),
            CallbackAction::Spread(kind) => format!("spread:{}", kind),
            CallbackAction::History => "history".to_string(),
            CallbackAction::LanguageMenu => "language".to_string(),
            CallbackAction::SetLanguage(code) => format!("lang:{}", code),
        }
    }
}

/// Main callback query dispatcher
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    services: ServiceFactory,
) -> Result<()> {
    let user_id = query.from.id.0 as i64;
    let chat_id = query
        .message
        .as_ref()
        .map(|m| m.chat().id)
        .unwrap_or(ChatId(user_id));

    debug!(user_id = user_id, chat_id = ?chat_id, callback_data = ?query.data, "Processing callback query");

    let result = async {
        match query.data.as_deref().map(|data| (data, CallbackAction::parse(data))) {
            Some((_, Some(action))) => {
                dispatch_action(&bot, chat_id, user_id, action, &services).await?;
            }
            Some((data, None)) => {
                warn!(user_id = user_id, callback_data = %data, "Unknown callback action");
            }
            None => {
                warn!(user_id = user_id, "Callback query without data");
            }
        }

        bot.answer_callback_query(query.id.clone()).await?;
        Ok::<(), TarotError>(())
    }
    .await;

    settle_interaction(user_id, result)?;

    info!(user_id = user_id, "Callback query processed");
    Ok(())
}

async fn dispatch_action(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    action: CallbackAction,
    services: &ServiceFactory,
) -> Result<()> {
    match action {
        CallbackAction::Daily => replies::reply_daily(bot, chat_id, user_id, services).await,
        CallbackAction::Spread(kind) => replies::reply_spread(bot, chat_id, user_id, kind, services).await,
        CallbackAction::History => replies::reply_history(bot, chat_id, user_id, services).await,
        CallbackAction::LanguageMenu => replies::reply_language_menu(bot, chat_id, user_id, services).await,
        CallbackAction::SetLanguage(code) => {
            match replies::reply_language_selected(bot, chat_id, user_id, &code, services).await {
                Err(TarotError::UnsupportedLanguage(code)) => {
                    warn!(user_id = user_id, language_code = %code, "Ignoring unsupported language selection");
                    Ok(())
                }
                other => other,
            }
        }
    }
}
