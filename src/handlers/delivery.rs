//! Message delivery helpers
//!
//! Card replies go out as a photo with a caption. Whatever goes wrong with the
//! photo, the same text is sent as a plain message instead.

use teloxide::{Bot, prelude::*, types::{ChatId, InputFile, InlineKeyboardMarkup}};
use tracing::{warn, debug};
use url::Url;
use crate::utils::errors::{TarotError, Result};

/// Send a card as photo with caption, or as text when the photo fails
pub async fn send_card(
    bot: &Bot,
    chat_id: ChatId,
    text: String,
    image: &str,
    keyboard: InlineKeyboardMarkup,
) -> Result<()> {
    match send_photo(bot, chat_id, &text, image, keyboard.clone()).await {
        Ok(()) => {
            debug!(chat_id = ?chat_id, "Card delivered with image");
        }
        Err(e) => {
            warn!(chat_id = ?chat_id, image = image, error = %e, "Card image failed, sending text only");
            bot.send_message(chat_id, text)
                .reply_markup(keyboard)
                .await?;
        }
    }

    Ok(())
}

async fn send_photo(
    bot: &Bot,
    chat_id: ChatId,
    caption: &str,
    image: &str,
    keyboard: InlineKeyboardMarkup,
) -> Result<()> {
    let url = Url::parse(image)
        .map_err(|e| TarotError::InvalidInput(format!("Invalid image reference '{}': {}", image, e)))?;

    bot.send_photo(chat_id, InputFile::url(url))
        .caption(caption)
        .reply_markup(keyboard)
        .await?;

    Ok(())
}

/// Send text with the given keyboard
pub async fn send_text(
    bot: &Bot,
    chat_id: ChatId,
    text: String,
    keyboard: Option<InlineKeyboardMarkup>,
) -> Result<()> {
    match keyboard {
        Some(keyboard) => {
            bot.send_message(chat_id, text).reply_markup(keyboard).await?;
        }
        None => {
            bot.send_message(chat_id, text).await?;
        }
    }

    Ok(())
}

/// Swallow the error Telegram returns for an expired button click
///
/// Every other outcome passes through unchanged.
pub fn settle_interaction(user_id: i64, result: Result<()>) -> Result<()> {
    match result {
        Err(e) if e.is_stale_interaction() => {
            warn!(user_id = user_id, error = %e, "Old callback query ignored");
            Ok(())
        }
        other => other,
    }
}
