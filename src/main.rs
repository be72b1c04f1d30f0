//! DailyTarot Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::utils::command::BotCommands;
use tokio::fs;
use tracing::{info, warn};

use DailyTarot::{
    config::Settings,
    utils::logging::{self, log_handler_error},
    services::{ServiceFactory, Deck},
    i18n::I18n,
    handlers::{Command, handle_command, handle_callback_query},
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", DailyTarot::info());

    // Initialize i18n system
    info!("Loading translations...");
    let mut i18n = I18n::new(&settings.i18n);
    i18n.load_translations().await?;

    // Load the card catalog
    info!("Loading card catalog...");
    let deck = Deck::from_file(&settings.deck.cards_path, &settings.i18n.default_language).await?;

    fs::create_dir_all(&settings.storage.data_dir).await?;

    info!("Initializing services...");
    let services = ServiceFactory::new(&settings, deck, i18n);

    // Normalize legacy history entries once per start
    let rewritten = services.history_service.cleanup().await?;
    info!(rewritten = rewritten, "History cleanup finished");

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![Arc::new(services)])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    info!("DailyTarot bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_commands)
        )
        .branch(
            Update::filter_callback_query()
                .endpoint(handle_callbacks)
        )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    // Failures are logged here once and not handed to the dispatcher again
    let services = (*services).clone();

    if let Err(e) = handle_command(bot, msg, cmd, services).await {
        log_handler_error(&e, "Error handling command");
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(
    bot: Bot,
    query: CallbackQuery,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let services = (*services).clone();

    if let Err(e) = handle_callback_query(bot, query, services).await {
        log_handler_error(&e, "Error handling callback query");
    }

    Ok(())
}
