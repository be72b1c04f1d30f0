//! Services module
//!
//! This module contains the bot's business logic services

pub mod daily_limit;
pub mod deck;
pub mod history;
pub mod language;
pub mod stats;
pub mod tarot;

// Re-export commonly used services
pub use daily_limit::DailyLimiter;
pub use deck::Deck;
pub use history::HistoryService;
pub use language::LanguageService;
pub use stats::StatsService;
pub use tarot::{TarotService, SpreadKind, DailyDraw, MeaningLookup, SPREAD_SIZE};

use crate::config::settings::Settings;
use crate::i18n::I18n;
use crate::storage::JsonStore;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub deck: Deck,
    pub language_service: LanguageService,
    pub daily_limiter: DailyLimiter,
    pub history_service: HistoryService,
    pub stats_service: StatsService,
    pub tarot_service: TarotService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings, deck: Deck, i18n: I18n) -> Self {
        let storage = &settings.storage;
        let fallback_language = settings.i18n.default_language.as_str();

        let language_service = LanguageService::new(JsonStore::new(storage.language_path()), i18n);
        let daily_limiter = DailyLimiter::new(JsonStore::new(storage.daily_path()));
        let history_service = HistoryService::new(
            JsonStore::new(storage.history_path()),
            fallback_language,
            settings.deck.history_display_limit,
        );
        let stats_service = StatsService::new(JsonStore::new(storage.stats_path()));
        let tarot_service = TarotService::new(
            deck.clone(),
            daily_limiter.clone(),
            history_service.clone(),
            stats_service.clone(),
        );

        Self {
            deck,
            language_service,
            daily_limiter,
            history_service,
            stats_service,
            tarot_service,
        }
    }
}
