//! Game configuration.
//!
//! The defaults are the standard table: four players, six cards each,
//! cards 2..=99, at least two cards per turn until the deck runs out and
//! one card per turn after that.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::error::GameError;

/// Rules and table size for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players.
    pub player_count: usize,

    /// Cards a hand is refilled to after each turn.
    pub hand_size: usize,

    /// Minimum placements per turn while the deck still has cards.
    pub initial_min_cards: usize,

    /// Minimum placements per turn once the deck is empty.
    pub relaxed_min_cards: usize,

    /// Depth bound for action enumeration. Hand size is the real bound;
    /// this only guards against runaway recursion.
    pub max_search_depth: usize,

    /// Lowest playable card. Up stacks are seeded one below it.
    pub lowest_card: Card,

    /// Highest playable card. Down stacks are seeded one above it.
    pub highest_card: Card,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            hand_size: 6,
            initial_min_cards: 2,
            relaxed_min_cards: 1,
            max_search_depth: 6,
            lowest_card: Card::new(2),
            highest_card: Card::new(99),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_min_cards(mut self, initial: usize, relaxed: usize) -> Self {
        self.initial_min_cards = initial;
        self.relaxed_min_cards = relaxed;
        self
    }

    #[must_use]
    pub fn with_max_search_depth(mut self, depth: usize) -> Self {
        self.max_search_depth = depth;
        self
    }

    #[must_use]
    pub fn with_card_range(mut self, lowest: Card, highest: Card) -> Self {
        self.lowest_card = lowest;
        self.highest_card = highest;
        self
    }

    /// Number of playable cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        if self.highest_card < self.lowest_card {
            return 0;
        }
        (self.highest_card.0 - self.lowest_card.0) as usize + 1
    }

    /// Seed value of the up stacks.
    #[must_use]
    pub fn up_seed(&self) -> Card {
        Card::new(self.lowest_card.0.saturating_sub(1))
    }

    /// Seed value of the down stacks.
    #[must_use]
    pub fn down_seed(&self) -> Card {
        Card::new(self.highest_card.0.saturating_add(1))
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: String| Err(GameError::InvalidConfig(msg));

        if self.player_count == 0 || self.player_count > 255 {
            return invalid(format!("player count must be 1-255, got {}", self.player_count));
        }
        if self.hand_size == 0 {
            return invalid("hand size must be at least 1".to_string());
        }
        if self.lowest_card.0 < 2
            || self.highest_card.0 > 254
            || self.lowest_card > self.highest_card
        {
            return invalid(format!(
                "card range {}..={} must lie within 2..=254",
                self.lowest_card, self.highest_card
            ));
        }
        if self.player_count * self.hand_size > self.card_count() {
            return invalid(format!(
                "{} cards cannot deal {} hands of {}",
                self.card_count(),
                self.player_count,
                self.hand_size
            ));
        }
        if self.relaxed_min_cards == 0 || self.relaxed_min_cards > self.initial_min_cards {
            return invalid(format!(
                "minimum cards per turn must satisfy 1 <= relaxed ({}) <= initial ({})",
                self.relaxed_min_cards, self.initial_min_cards
            ));
        }
        if self.max_search_depth == 0 {
            return invalid("search depth must be at least 1".to_string());
        }
        Ok(())
    }
}
