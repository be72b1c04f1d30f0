//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod start;
pub mod help;
pub mod readings;

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::{TarotError, Result};
use crate::services::ServiceFactory;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Daily Tarot commands:")]
pub enum Command {
    #[command(description = "Start the bot and show the main menu")]
    Start,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "Draw your card of the day")]
    Daily,
    #[command(description = "Draw a random card")]
    Random,
    #[command(description = "Shuffle the deck")]
    Shuffle,
    #[command(description = "Show the meaning of a card, e.g. /meaning The Fool")]
    Meaning(String),
    #[command(description = "Change language")]
    Language,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: ServiceFactory,
) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg, services).await,
        Command::Help => help::handle_help(bot, msg, services).await,
        Command::Daily => readings::handle_daily(bot, msg, services).await,
        Command::Random => readings::handle_random(bot, msg, services).await,
        Command::Shuffle => readings::handle_shuffle(bot, msg, services).await,
        Command::Meaning(query) => readings::handle_meaning(bot, msg, query, services).await,
        Command::Language => start::handle_language(bot, msg, services).await,
    }
}

/// Telegram id of the user who sent the message
pub fn sender_id(msg: &Message) -> Result<i64> {
    let user = msg.from.as_ref().ok_or_else(|| {
        TarotError::InvalidInput("No user in message".to_string())
    })?;

    Ok(user.id.0 as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meaning_takes_the_rest_of_the_line() {
        let cmd = Command::parse("/meaning The Fool", "tarot_bot").unwrap();
        assert_eq!(cmd, Command::Meaning("The Fool".to_string()));
    }

    #[test]
    fn test_simple_commands_parse() {
        assert_eq!(Command::parse("/daily", "tarot_bot").unwrap(), Command::Daily);
        assert_eq!(Command::parse("/shuffle", "tarot_bot").unwrap(), Command::Shuffle);
        assert_eq!(Command::parse("/language", "tarot_bot").unwrap(), Command::Language);
    }
}
