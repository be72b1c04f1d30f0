//! Card catalog service
//!
//! Owns the ordered deck shared by every interaction. The order only changes
//! through an explicit shuffle; selection never depends on it.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use rand::seq::SliceRandom;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{info, warn, debug};
use crate::models::Card;
use crate::utils::errors::{TarotError, Result};

/// Shared, shuffleable deck of cards
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Arc<RwLock<Vec<Card>>>,
    fallback_language: String,
}

impl Deck {
    /// Create a deck from cards that all carry a fallback-language name
    pub fn new(cards: Vec<Card>, fallback_language: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        for (position, card) in cards.iter().enumerate() {
            let identity = card.identity(fallback_language).ok_or_else(|| {
                TarotError::Config(format!(
                    "Card #{} has no '{}' name", position, fallback_language
                ))
            })?;

            // Identity is the name; a duplicate makes both cards indistinguishable
            if !seen.insert(identity.to_lowercase()) {
                warn!(card = identity, "Duplicate card name in catalog");
            }
        }

        Ok(Self {
            cards: Arc::new(RwLock::new(cards)),
            fallback_language: fallback_language.to_string(),
        })
    }

    /// Load the catalog from a JSON array of cards
    pub async fn from_file(path: impl AsRef<Path>, fallback_language: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let cards: Vec<Card> = serde_json::from_str(&content)?;

        if cards.is_empty() {
            return Err(TarotError::Config(format!(
                "Card catalog {} is empty", path.display()
            )));
        }

        info!(cards = cards.len(), path = %path.display(), "Card catalog loaded");
        Self::new(cards, fallback_language)
    }

    /// Language whose card names serve as identities
    pub fn fallback_language(&self) -> &str {
        &self.fallback_language
    }

    /// Copy of the cards in their current order
    pub async fn snapshot(&self) -> Vec<Card> {
        self.cards.read().await.clone()
    }

    /// Reorder the deck in place
    pub async fn shuffle(&self) {
        let mut cards = self.cards.write().await;
        cards.shuffle(&mut rand::thread_rng());
        debug!(cards = cards.len(), "Deck shuffled");
    }

    /// Pick one card uniformly at random
    pub async fn draw_one(&self) -> Result<Card> {
        let cards = self.cards.read().await;
        cards
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(TarotError::InsufficientCards { requested: 1, available: 0 })
    }

    /// Pick `count` distinct cards uniformly at random
    pub async fn draw_distinct(&self, count: usize) -> Result<Vec<Card>> {
        let cards = self.cards.read().await;
        if cards.len() < count {
            return Err(TarotError::InsufficientCards {
                requested: count,
                available: cards.len(),
            });
        }

        Ok(cards
            .choose_multiple(&mut rand::thread_rng(), count)
            .cloned()
            .collect())
    }

    /// Case-insensitive exact name lookup
    ///
    /// Fallback-language names are tried first, then names in any other language.
    pub async fn find_by_name(&self, query: &str) -> Option<Card> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let cards = self.cards.read().await;
        let by_identity = cards.iter().find(|card| {
            card.identity(&self.fallback_language)
                .map(|name| name.to_lowercase() == needle)
                .unwrap_or(false)
        });

        by_identity
            .or_else(|| {
                cards.iter().find(|card| {
                    card.name
                        .iter()
                        .filter(|(lang, _)| *lang != self.fallback_language)
                        .any(|(_, name)| name.to_lowercase() == needle)
                })
            })
            .cloned()
    }
}
