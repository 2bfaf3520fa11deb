//! Per-game mutable state.
//!
//! ## GameState
//!
//! - Seats in turn order: the front seat is always the acting player
//! - The deck, drawn from its tail
//! - The four stacks
//! - The minimum number of placements this turn
//!
//! State changes only through `apply_action`, `undo_action`, `draw` and
//! `rotate`. The minimum-cards threshold is part of the state, so any
//! number of games can run side by side.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::action::{self, Action};
use super::card::Card;
use super::config::GameConfig;
use super::hand::Hand;
use super::player::PlayerId;
use super::rng::GameRng;
use super::stack::StackSet;
use crate::error::GameError;
use crate::rules::score;

/// A player and the hand they hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub player: PlayerId,
    pub hand: Hand,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    seats: VecDeque<Seat>,
    deck: Vec<Card>,
    stacks: StackSet,
    min_cards: usize,
    relaxed_min_cards: usize,
    hand_size: usize,
    turn: u32,
}

impl GameState {
    /// Shuffle the full card set and deal.
    ///
    /// Each hand takes `hand_size` cards from the front of the shuffled
    /// cards in seat order; what is left becomes the deck.
    pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Result<Self, GameError> {
        config.validate()?;

        let mut cards: Vec<Card> = Card::range(config.lowest_card, config.highest_card).collect();
        rng.shuffle(&mut cards);

        let deck = cards.split_off(config.player_count * config.hand_size);
        let hands = cards
            .chunks(config.hand_size)
            .map(Hand::from_cards)
            .collect();

        Self::from_parts(
            config,
            hands,
            deck,
            StackSet::new(config.up_seed(), config.down_seed()),
        )
    }

    /// Build a state from explicit hands (in turn order), deck and stacks.
    ///
    /// The minimum-cards threshold starts relaxed if the deck is already
    /// empty.
    pub fn from_parts(
        config: &GameConfig,
        hands: Vec<Hand>,
        deck: Vec<Card>,
        stacks: StackSet,
    ) -> Result<Self, GameError> {
        if hands.is_empty() || hands.len() > 255 {
            return Err(GameError::InvalidConfig(format!(
                "need 1-255 hands, got {}",
                hands.len()
            )));
        }
        let seats = hands
            .into_iter()
            .enumerate()
            .map(|(i, hand)| Seat {
                player: PlayerId::new(i as u8),
                hand,
            })
            .collect();
        let min_cards = if deck.is_empty() {
            config.relaxed_min_cards
        } else {
            config.initial_min_cards
        };

        Ok(Self {
            seats,
            deck,
            stacks,
            min_cards,
            relaxed_min_cards: config.relaxed_min_cards,
            hand_size: config.hand_size,
            turn: 1,
        })
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn acting_seat(&self) -> &Seat {
        &self.seats[0]
    }

    /// Seats in turn order, acting seat first.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter()
    }

    /// Hands in turn order, acting hand first.
    pub fn hands(&self) -> impl Iterator<Item = &Hand> {
        self.seats.iter().map(|s| &s.hand)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Remaining deck; the last card is drawn next.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn stacks(&self) -> &StackSet {
        &self.stacks
    }

    /// Minimum placements the acting player must make this turn.
    #[must_use]
    pub fn min_cards(&self) -> usize {
        self.min_cards
    }

    /// Current turn number (starts at 1).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Cards still held or in the deck.
    #[must_use]
    pub fn score(&self) -> usize {
        score(self.hands(), &self.deck)
    }

    /// True once any hand has been emptied.
    #[must_use]
    pub fn any_hand_empty(&self) -> bool {
        self.seats.iter().any(|s| s.hand.is_empty())
    }

    /// Apply an action from the acting hand onto the stacks.
    pub fn apply_action(&mut self, action: &Action) -> Result<(), GameError> {
        let hand = &mut self.seats[0].hand;
        action::apply_action(hand, &mut self.stacks, action)
    }

    /// Take back an action previously applied from the acting hand.
    pub fn undo_action(&mut self, action: &Action) -> Result<(), GameError> {
        let hand = &mut self.seats[0].hand;
        action::undo_action(hand, &mut self.stacks, action)
    }

    /// Refill the acting hand from the deck tail, one card at a time.
    ///
    /// Once the deck is empty the minimum drops to the relaxed value for
    /// the rest of the game. Returns the number of cards drawn.
    pub fn draw(&mut self) -> usize {
        let hand = &mut self.seats[0].hand;
        let mut drawn = 0;
        while hand.len() < self.hand_size {
            match self.deck.pop() {
                Some(card) => {
                    hand.insert(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        if self.deck.is_empty() {
            self.min_cards = self.relaxed_min_cards;
        }
        drawn
    }

    /// Pass the turn: the acting seat moves to the back.
    pub fn rotate(&mut self) {
        self.seats.rotate_left(1);
        self.turn += 1;
    }
}
