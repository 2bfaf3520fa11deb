//! Error types for game simulation and score lists.

use thiserror::Error;

use crate::core::{Card, StackId};
use crate::rules::GameStatus;

/// Errors that abort a single simulated game.
///
/// None of these are recoverable game conditions: each one points at a bug
/// in a strategy or in the engine. A batch run drops the failing game and
/// keeps going.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal placement: {card} cannot go on {stack} (top is {top})")]
    IllegalPlacement { card: Card, stack: StackId, top: Card },

    #[error("card {card} is not in the acting hand")]
    CardNotInHand { card: Card },

    #[error("cannot undo {expected} from {stack}: top is {found}")]
    UndoMismatch {
        stack: StackId,
        expected: Card,
        found: Card,
    },

    #[error("score did not decrease over a turn ({before} -> {after})")]
    ScoreNotDecreasing { before: usize, after: usize },

    #[error("strategy did not choose an action")]
    NoActionChosen,

    #[error("game is already over ({0:?})")]
    GameOver(GameStatus),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors reading or parsing a comma-separated score list.
#[derive(Debug, Error)]
pub enum ScoreListError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("entry {index} is not a score: {value:?}")]
    Parse { index: usize, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::IllegalPlacement {
            card: Card::new(37),
            stack: StackId::new(0),
            top: Card::new(74),
        };
        assert_eq!(
            err.to_string(),
            "illegal placement: 37 cannot go on Stack(0) (top is 74)"
        );

        let err = GameError::ScoreNotDecreasing { before: 40, after: 40 };
        assert_eq!(err.to_string(), "score did not decrease over a turn (40 -> 40)");
    }

    #[test]
    fn test_score_list_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ScoreListError = io.into();
        assert!(matches!(err, ScoreListError::Io(_)));
    }
}
