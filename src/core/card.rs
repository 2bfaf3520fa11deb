//! Numbered cards.

use serde::{Deserialize, Serialize};

/// A numbered card.
///
/// Playable cards run from `GameConfig::lowest_card` to
/// `GameConfig::highest_card` (2..=99 by default). The values just outside
/// that range (1 and 100) only ever appear as stack seeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub u8);

impl Card {
    /// Create a card with the given face value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Every card in `lowest..=highest`, ascending.
    pub fn range(lowest: Card, highest: Card) -> impl Iterator<Item = Card> {
        (lowest.0..=highest.0).map(Card)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
