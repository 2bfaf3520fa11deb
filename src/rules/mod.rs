//! Game rules: action enumeration, scoring and turn progression.

pub mod enumerate;
pub mod score;
pub mod engine;

pub use enumerate::{
    allowed_placements, enumerate_actions, enumerate_actions_in_place, has_any_action,
};
pub use score::{score, stack_height};
pub use engine::{GameEngine, GameOutcome, GameStatus};
