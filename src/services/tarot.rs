//! Reading service
//!
//! Composes the deck, the daily limiter, history and counters into the
//! readings users ask for. Every successful draw is recorded in the user's
//! history before its counter is bumped.

use std::fmt;
use chrono::NaiveDate;
use tracing::{info, debug};
use crate::models::Card;
use crate::services::{DailyLimiter, Deck, HistoryService, StatsService};
use crate::utils::errors::Result;
use crate::utils::logging::log_card_drawn;

/// Number of cards in every spread
pub const SPREAD_SIZE: usize = 3;

/// Themed three-card spreads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadKind {
    Love,
    Career,
}

impl SpreadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpreadKind::Love => "love",
            SpreadKind::Career => "career",
        }
    }

    /// Translation key of the spread heading
    pub fn title_key(&self) -> &'static str {
        match self {
            SpreadKind::Love => "love_spread",
            SpreadKind::Career => "career_spread",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "love" => Some(SpreadKind::Love),
            "career" => Some(SpreadKind::Career),
            _ => None,
        }
    }
}

impl fmt::Display for SpreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a daily card request
#[derive(Debug, Clone, PartialEq)]
pub enum DailyDraw {
    Drawn(Card),
    LimitReached,
}

/// Outcome of a card meaning lookup
#[derive(Debug, Clone, PartialEq)]
pub enum MeaningLookup {
    MissingName,
    NotFound,
    Found(Card),
}

/// Tarot readings for users
#[derive(Clone)]
pub struct TarotService {
    deck: Deck,
    daily_limiter: DailyLimiter,
    history_service: HistoryService,
    stats_service: StatsService,
}

impl TarotService {
    pub fn new(
        deck: Deck,
        daily_limiter: DailyLimiter,
        history_service: HistoryService,
        stats_service: StatsService,
    ) -> Self {
        Self {
            deck,
            daily_limiter,
            history_service,
            stats_service,
        }
    }

    /// Rate-limited single draw
    pub async fn daily(&self, user_id: i64, today: NaiveDate) -> Result<DailyDraw> {
        if !self.daily_limiter.try_consume_daily(user_id, today).await? {
            info!(user_id = user_id, "Daily card limit reached");
            return Ok(DailyDraw::LimitReached);
        }

        let card = self.draw_and_record(user_id, "daily").await?;
        Ok(DailyDraw::Drawn(card))
    }

    /// Unconditional single draw
    pub async fn random(&self, user_id: i64) -> Result<Card> {
        self.draw_and_record(user_id, "random").await
    }

    /// Three distinct cards for a themed spread
    pub async fn spread(&self, user_id: i64, kind: SpreadKind) -> Result<Vec<Card>> {
        let cards = self.deck.draw_distinct(SPREAD_SIZE).await?;

        for card in &cards {
            self.history_service.append(user_id, card).await?;
            log_card_drawn(user_id, kind.as_str(), self.identity_of(card));
        }
        self.stats_service.increment(kind.as_str()).await?;

        Ok(cards)
    }

    /// Reorder the shared deck
    pub async fn shuffle(&self, user_id: i64) -> Result<()> {
        self.deck.shuffle().await;
        self.stats_service.increment("shuffle").await?;

        info!(user_id = user_id, "Deck shuffled by user");
        Ok(())
    }

    /// Look a card up by its name in any language
    pub async fn lookup(&self, query: &str) -> Result<MeaningLookup> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(MeaningLookup::MissingName);
        }

        match self.deck.find_by_name(query).await {
            Some(card) => {
                self.stats_service.increment("meaning").await?;
                Ok(MeaningLookup::Found(card))
            }
            None => {
                debug!(query = query, "No card matches the query");
                Ok(MeaningLookup::NotFound)
            }
        }
    }

    /// Recent readings of the user in the display language
    pub async fn history(&self, user_id: i64, display_language: &str) -> Vec<String> {
        self.history_service.render(user_id, display_language, &self.deck).await
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    async fn draw_and_record(&self, user_id: i64, command: &str) -> Result<Card> {
        let card = self.deck.draw_one().await?;

        self.history_service.append(user_id, &card).await?;
        self.stats_service.increment(command).await?;

        log_card_drawn(user_id, command, self.identity_of(&card));
        Ok(card)
    }

    fn identity_of<'a>(&self, card: &'a Card) -> &'a str {
        card.identity(self.deck.fallback_language()).unwrap_or_default()
    }
}
