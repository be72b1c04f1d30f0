//! Text rendering for card replies

use crate::models::Card;

/// Single card: name on the first line, meaning below
pub fn card_text(card: &Card, lang: &str, fallback: &str) -> String {
    format!(
        "🔮 {}\n{}",
        card.display_name(lang, fallback),
        card.display_meaning(lang, fallback)
    )
}

/// Spread heading followed by one paragraph per card
pub fn spread_text(title: &str, cards: &[Card], lang: &str, fallback: &str) -> String {
    let body: Vec<String> = cards
        .iter()
        .map(|card| {
            format!(
                "🔮 {} — {}",
                card.display_name(lang, fallback),
                card.display_meaning(lang, fallback)
            )
        })
        .collect();

    format!("{}\n\n{}", title, body.join("\n\n"))
}

pub fn history_text(title: &str, names: &[String]) -> String {
    format!("{}\n\n{}", title, names.join("\n"))
}
