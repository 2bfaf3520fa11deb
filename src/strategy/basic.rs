//! Baseline strategies.

use crate::core::{Action, GameRng};

use super::{Strategy, TurnView};

/// Uniform random choice among all legal actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose(&self, view: &mut TurnView, rng: &mut GameRng) -> Option<Action> {
        let actions = view.actions();
        rng.choose(&actions).cloned()
    }
}

/// Always the first legal action. Deterministic; useful as a baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstActionStrategy;

impl Strategy for FirstActionStrategy {
    fn name(&self) -> &str {
        "first"
    }

    fn choose(&self, view: &mut TurnView, _rng: &mut GameRng) -> Option<Action> {
        view.actions().into_iter().next()
    }
}
