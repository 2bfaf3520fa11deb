//! Turn progression.
//!
//! `GameEngine` owns one game: its state, its random streams, and the turn
//! history. Each turn it asks a strategy for an action, applies it, refills
//! the acting hand, passes the turn on and checks that the score went down.
//!
//! ```
//! use rust_climb::core::GameConfig;
//! use rust_climb::rules::GameEngine;
//! use rust_climb::strategy::RandomStrategy;
//!
//! let config = GameConfig::default().with_max_search_depth(3);
//! let mut engine = GameEngine::new(config, 42).unwrap();
//! let outcome = engine.run(&RandomStrategy).unwrap();
//!
//! assert!(outcome.status.is_terminal());
//! assert!(outcome.score <= 96);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng, GameState, PlayerMap, TurnRecord};
use crate::error::GameError;
use crate::strategy::{Strategy, TurnView};

use super::enumerate::has_any_action;

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The acting player can move.
    InProgress,
    /// Some hand has been emptied.
    Won,
    /// The acting player holds cards but none can be placed.
    Stuck,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// `Won` or `Stuck`.
    pub status: GameStatus,

    /// Cards left in hands and deck.
    pub score: usize,

    /// Turns played.
    pub turns: u32,

    /// Seed the game was played from.
    pub seed: u64,

    /// Cards each player placed.
    pub cards_played: PlayerMap<u32>,
}

/// Drives one game from the deal to a terminal state.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    strategy_rng: GameRng,
    seed: u64,
    history: Vec<TurnRecord>,
    cards_played: PlayerMap<u32>,
}

impl GameEngine {
    /// Deal a new game from `seed`.
    ///
    /// Dealing and strategy choices draw from separate streams of the same
    /// seed, so a strategy's randomness never shifts the deal.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        let rng = GameRng::new(seed);
        let state = GameState::deal(&config, &mut rng.for_context("deal"))?;
        Ok(Self::assemble(config, state, rng, seed))
    }

    /// Continue from a prepared state.
    pub fn from_state(config: GameConfig, state: GameState, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::assemble(config, state, GameRng::new(seed), seed))
    }

    fn assemble(config: GameConfig, state: GameState, rng: GameRng, seed: u64) -> Self {
        let cards_played = PlayerMap::with_value(state.player_count(), 0);
        Self {
            config,
            state,
            strategy_rng: rng.for_context("strategy"),
            seed,
            history: Vec::new(),
            cards_played,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Completed turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Won if any hand is empty, Stuck if the acting hand has no legal
    /// action, otherwise InProgress.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.state.any_hand_empty() {
            return GameStatus::Won;
        }
        let hand = &self.state.acting_seat().hand;
        if has_any_action(hand, self.state.stacks(), self.config.max_search_depth) {
            GameStatus::InProgress
        } else {
            GameStatus::Stuck
        }
    }

    /// Play one turn for the acting player. Returns the status afterwards.
    pub fn play_turn<S: Strategy + ?Sized>(
        &mut self,
        strategy: &S,
    ) -> Result<GameStatus, GameError> {
        let status = self.status();
        if status.is_terminal() {
            return Err(GameError::GameOver(status));
        }

        let before = self.state.score();
        let turn = self.state.turn();
        let seat = self.state.acting_seat();
        let player = seat.player;
        let hand = seat.hand.clone();

        let mut view = TurnView::new(
            hand.clone(),
            self.state.stacks().clone(),
            self.state.min_cards(),
            self.config.max_search_depth,
        );
        let action = strategy
            .choose(&mut view, &mut self.strategy_rng)
            .filter(|a| !a.is_empty())
            .ok_or(GameError::NoActionChosen)?;

        self.state.apply_action(&action)?;
        let drawn = self.state.draw();
        self.state.rotate();

        let after = self.state.score();
        if after >= before {
            return Err(GameError::ScoreNotDecreasing { before, after });
        }

        self.cards_played[player] += action.len() as u32;
        self.history.push(TurnRecord {
            turn,
            player,
            hand,
            action,
            drawn,
            score: after,
        });

        Ok(self.status())
    }

    /// Play until the game is won or stuck.
    pub fn run<S: Strategy + ?Sized>(&mut self, strategy: &S) -> Result<GameOutcome, GameError> {
        loop {
            let status = self.status();
            if status.is_terminal() {
                return Ok(self.outcome(status));
            }
            self.play_turn(strategy)?;
        }
    }

    fn outcome(&self, status: GameStatus) -> GameOutcome {
        GameOutcome {
            status,
            score: self.state.score(),
            turns: self.history.len() as u32,
            seed: self.seed,
            cards_played: self.cards_played.clone(),
        }
    }
}
