//! Replies shared by commands and button callbacks
//!
//! Each function runs one interaction after the user has been identified:
//! rate check, card selection, recording, then the localized response.

use teloxide::{Bot, types::ChatId};
use crate::handlers::delivery::{send_card, send_text};
use crate::handlers::keyboards::{language_menu, main_menu};
use crate::handlers::render::{card_text, history_text, spread_text};
use crate::i18n::TranslationParams;
use crate::models::Card;
use crate::services::{ServiceFactory, SpreadKind, DailyDraw, daily_limit};
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;

/// Localized text followed by the main menu
pub async fn reply_with_menu(bot: &Bot, chat_id: ChatId, user_id: i64, key: &str, services: &ServiceFactory) -> Result<()> {
    let lang = services.language_service.get_language(user_id).await;
    let i18n = services.language_service.i18n();

    send_text(bot, chat_id, i18n.t(key, &lang, None), Some(main_menu(i18n, &lang))).await
}

/// A single card in the user's language
pub async fn reply_card(bot: &Bot, chat_id: ChatId, user_id: i64, card: &Card, services: &ServiceFactory) -> Result<()> {
    let lang = services.language_service.get_language(user_id).await;
    let i18n = services.language_service.i18n();
    let text = card_text(card, &lang, i18n.default_language());

    send_card(bot, chat_id, text, &card.image, main_menu(i18n, &lang)).await
}

pub async fn reply_daily(bot: &Bot, chat_id: ChatId, user_id: i64, services: &ServiceFactory) -> Result<()> {
    log_user_action(user_id, "daily", None);

    match services.tarot_service.daily(user_id, daily_limit::today()).await? {
        DailyDraw::Drawn(card) => reply_card(bot, chat_id, user_id, &card, services).await,
        DailyDraw::LimitReached => {
            let text = services.language_service.resolve(user_id, "daily_limit_reached").await;
            send_text(bot, chat_id, text, None).await
        }
    }
}

pub async fn reply_random(bot: &Bot, chat_id: ChatId, user_id: i64, services: &ServiceFactory) -> Result<()> {
    log_user_action(user_id, "random", None);

    let card = services.tarot_service.random(user_id).await?;
    reply_card(bot, chat_id, user_id, &card, services).await
}

pub async fn reply_spread(bot: &Bot, chat_id: ChatId, user_id: i64, kind: SpreadKind, services: &ServiceFactory) -> Result<()> {
    log_user_action(user_id, "spread", Some(kind.as_str()));

    let cards = services.tarot_service.spread(user_id, kind).await?;

    let lang = services.language_service.get_language(user_id).await;
    let i18n = services.language_service.i18n();
    let title = i18n.t(kind.title_key(), &lang, None);
    let text = spread_text(&title, &cards, &lang, i18n.default_language());

    send_text(bot, chat_id, text, Some(main_menu(i18n, &lang))).await
}

pub async fn reply_history(bot: &Bot, chat_id: ChatId, user_id: i64, services: &ServiceFactory) -> Result<()> {
    log_user_action(user_id, "history", None);

    let lang = services.language_service.get_language(user_id).await;
    let i18n = services.language_service.i18n();
    let names = services.tarot_service.history(user_id, &lang).await;

    let text = if names.is_empty() {
        i18n.t("no_history", &lang, None)
    } else {
        let mut params = TranslationParams::new();
        params.insert("count".to_string(), services.history_service.display_limit().to_string());
        history_text(&i18n.t("history_title", &lang, Some(&params)), &names)
    };

    send_text(bot, chat_id, text, Some(main_menu(i18n, &lang))).await
}

pub async fn reply_language_menu(bot: &Bot, chat_id: ChatId, user_id: i64, services: &ServiceFactory) -> Result<()> {
    let text = services.language_service.resolve(user_id, "choose_language").await;
    let keyboard = language_menu(services.language_service.i18n());

    send_text(bot, chat_id, text, Some(keyboard)).await
}

pub async fn reply_language_selected(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    language_code: &str,
    services: &ServiceFactory,
) -> Result<()> {
    services.language_service.set_language(user_id, language_code).await?;
    log_user_action(user_id, "language", Some(language_code));

    reply_with_menu(bot, chat_id, user_id, "language_changed", services).await
}
