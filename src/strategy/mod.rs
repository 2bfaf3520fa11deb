//! Play-selection strategies.
//!
//! A strategy picks one action for the acting player. It only ever sees a
//! `TurnView`: copies of its own hand and the public stacks plus the current
//! minimum. The deck and the other hands stay hidden.
//!
//! Strategies are shared across worker threads during batch simulation, so
//! they take `&self` and receive randomness through the per-game `GameRng`.

mod basic;
mod height;

use std::str::FromStr;

use crate::core::{Action, GameRng, Hand, StackSet};
use crate::rules::enumerate_actions_in_place;

pub use basic::{FirstActionStrategy, RandomStrategy};
pub use height::MinimizeHeightStrategy;

/// What a strategy is allowed to know about the turn.
///
/// The hand and stacks are copies; strategies may apply and undo actions on
/// them freely while evaluating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnView {
    pub hand: Hand,
    pub stacks: StackSet,
    /// Minimum placements this turn.
    pub min_cards: usize,
    /// Enumeration depth bound.
    pub max_depth: usize,
}

impl TurnView {
    pub fn new(hand: Hand, stacks: StackSet, min_cards: usize, max_depth: usize) -> Self {
        Self {
            hand,
            stacks,
            min_cards,
            max_depth,
        }
    }

    /// Every legal action this turn.
    pub fn actions(&mut self) -> Vec<Action> {
        enumerate_actions_in_place(&mut self.hand, &mut self.stacks, self.min_cards, self.max_depth)
    }
}

/// Chooses one action per turn.
pub trait Strategy: Send + Sync {
    /// Short name for reports.
    fn name(&self) -> &str;

    /// Pick an action from those `view.actions()` would list.
    ///
    /// Returning `None` (or an action not in that list) is a strategy bug
    /// and aborts the game.
    fn choose(&self, view: &mut TurnView, rng: &mut GameRng) -> Option<Action>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose(&self, view: &mut TurnView, rng: &mut GameRng) -> Option<Action> {
        (**self).choose(view, rng)
    }
}

/// The built-in strategies, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Random,
    MinimizeHeight,
    First,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [Self::Random, Self::MinimizeHeight, Self::First];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::MinimizeHeight => "min-height",
            Self::First => "first",
        }
    }

    #[must_use]
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            Self::Random => Box::new(RandomStrategy),
            Self::MinimizeHeight => Box::new(MinimizeHeightStrategy),
            Self::First => Box::new(FirstActionStrategy),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|k| k.name()).collect();
                format!("unknown strategy {:?} (expected one of {})", s, names.join(", "))
            })
    }
}
