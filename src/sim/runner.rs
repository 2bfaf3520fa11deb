//! Running games for a strategy, one at a time or in parallel batches.
//!
//! Every game in a batch gets its own seed, forked from the batch seed in
//! game order. Games share nothing, so the parallel path is a plain rayon
//! map and produces exactly the same scores, in the same order, as the
//! sequential one.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng};
use crate::error::GameError;
use crate::rules::{GameEngine, GameOutcome};
use crate::strategy::Strategy;

use super::summary::ScoreSummary;

/// Configuration for a batch of games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub iterations: usize,

    /// Spread games over rayon's thread pool.
    pub parallel: bool,

    /// Batch seed; per-game seeds are forked from it.
    pub seed: u64,

    /// Rules for every game.
    pub game: GameConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            parallel: true,
            seed: 0,
            game: GameConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Seeds for every game, in game order.
    #[must_use]
    pub fn game_seeds(&self) -> Vec<u64> {
        let mut master = GameRng::new(self.seed);
        (0..self.iterations).map(|_| master.fork().seed()).collect()
    }
}

/// A game that aborted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedGame {
    pub seed: u64,
    pub error: GameError,
}

/// Scores from a batch, in game order, plus any games that failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub scores: Vec<u32>,
    pub failures: Vec<FailedGame>,
}

impl BatchResult {
    #[must_use]
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::from_scores(&self.scores)
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Play one full game with every player using `strategy`.
pub fn simulate_one_game<S: Strategy + ?Sized>(
    strategy: &S,
    config: &GameConfig,
    seed: u64,
) -> Result<GameOutcome, GameError> {
    GameEngine::new(config.clone(), seed)?.run(strategy)
}

/// Play a batch of games and collect their scores.
pub fn simulate_many<S: Strategy + ?Sized>(strategy: &S, config: &SimulationConfig) -> BatchResult {
    simulate_many_with(strategy, config, |_| {})
}

/// Like [`simulate_many`], calling `on_game` as each game finishes.
///
/// In parallel mode `on_game` runs on worker threads in completion order.
pub fn simulate_many_with<S, F>(strategy: &S, config: &SimulationConfig, on_game: F) -> BatchResult
where
    S: Strategy + ?Sized,
    F: Fn(&Result<GameOutcome, GameError>) + Sync,
{
    let play = |seed: u64| {
        let result = simulate_one_game(strategy, &config.game, seed);
        on_game(&result);
        (seed, result)
    };

    let seeds = config.game_seeds();
    let results: Vec<_> = if config.parallel {
        seeds.into_par_iter().map(play).collect()
    } else {
        seeds.into_iter().map(play).collect()
    };

    let mut batch = BatchResult::default();
    for (seed, result) in results {
        match result {
            Ok(outcome) => batch.scores.push(outcome.score as u32),
            Err(error) => batch.failures.push(FailedGame { seed, error }),
        }
    }
    batch
}
