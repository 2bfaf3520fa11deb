//! # rust-climb
//!
//! Simulator for the cooperative card-climbing game, built to compare play
//! strategies over many games.
//!
//! ## The game
//!
//! Cards 2..=99 are dealt six to each of four players. Two stacks climb up
//! from 1 and two climb down from 100. On their turn a player must place at
//! least two cards (one once the deck is empty), then refills their hand.
//! A card ten below an up stack's top, or ten above a down stack's top, may
//! push that stack back. The table wins when a hand is emptied and loses
//! when the acting player cannot place anything; the score is the number of
//! cards left over.
//!
//! ## Modules
//!
//! - `core`: Cards, stacks, hands, actions, state, RNG, configuration
//! - `rules`: Action enumeration, scoring and the turn engine
//! - `strategy`: The `Strategy` trait and built-in strategies
//! - `sim`: Batch simulation, score summaries and score lists

pub mod core;
pub mod error;
pub mod rules;
pub mod strategy;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Action, Card, Direction, GameConfig, GameRng, GameState, Hand, Placement, PlayerId,
    Stack, StackId, StackSet, TurnRecord,
};

pub use crate::error::{GameError, ScoreListError};

pub use crate::rules::{enumerate_actions, score, GameEngine, GameOutcome, GameStatus};

pub use crate::strategy::{
    FirstActionStrategy, MinimizeHeightStrategy, RandomStrategy, Strategy, StrategyKind, TurnView,
};

pub use crate::sim::{simulate_many, simulate_one_game, BatchResult, ScoreSummary, SimulationConfig};
