//! Core game types: cards, stacks, hands, actions, state, RNG, configuration.

pub mod card;
pub mod player;
pub mod stack;
pub mod hand;
pub mod action;
pub mod rng;
pub mod config;
pub mod state;

pub use card::Card;
pub use player::{PlayerId, PlayerMap};
pub use stack::{can_place, Direction, Stack, StackId, StackSet, BACKWARD_STEP, STACK_COUNT};
pub use hand::Hand;
pub use action::{apply_action, undo_action, Action, Placement, TurnRecord};
pub use rng::GameRng;
pub use config::GameConfig;
pub use state::{GameState, Seat};
