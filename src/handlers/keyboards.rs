//! Inline keyboards

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use crate::handlers::callbacks::CallbackAction;
use crate::i18n::I18n;
use crate::services::SpreadKind;

/// Main menu shown under most replies
pub fn main_menu(i18n: &I18n, lang: &str) -> InlineKeyboardMarkup {
    let button = |key: &str, action: CallbackAction| {
        InlineKeyboardButton::callback(i18n.t(key, lang, None), action.data())
    };

    InlineKeyboardMarkup::new(vec![
        vec![
            button("menu_daily", CallbackAction::Daily),
            button("menu_love", CallbackAction::Spread(SpreadKind::Love)),
        ],
        vec![
            button("menu_career", CallbackAction::Spread(SpreadKind::Career)),
            button("menu_history", CallbackAction::History),
        ],
        vec![
            button("menu_language", CallbackAction::LanguageMenu),
        ],
    ])
}

/// One button per supported language, each labelled in its own language
pub fn language_menu(i18n: &I18n) -> InlineKeyboardMarkup {
    let buttons: Vec<InlineKeyboardButton> = i18n
        .supported_languages()
        .iter()
        .map(|code| {
            InlineKeyboardButton::callback(
                i18n.t("language_name", code, None),
                CallbackAction::SetLanguage(code.clone()).data(),
            )
        })
        .collect();

    InlineKeyboardMarkup::new(vec![buttons])
}
