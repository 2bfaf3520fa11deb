//! Placements, actions and turn records.
//!
//! A placement puts one card on one stack. An action is a whole turn: an
//! ordered list of placements, applied strictly in order because each
//! placement changes the top of its stack for the ones after it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::hand::Hand;
use super::player::PlayerId;
use super::stack::{StackId, StackSet};
use crate::error::GameError;

/// One card onto one stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub card: Card,
    pub stack: StackId,
}

impl Placement {
    #[must_use]
    pub const fn new(card: Card, stack: StackId) -> Self {
        Self { card, stack }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.card, self.stack.0)
    }
}

/// A complete turn: placements in the order they are made.
///
/// SmallVec keeps a full six-card turn off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub placements: SmallVec<[Placement; 6]>,
}

impl Action {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_placements(placements: &[Placement]) -> Self {
        Self {
            placements: SmallVec::from_slice(placements),
        }
    }

    pub fn push(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    pub fn pop(&mut self) -> Option<Placement> {
        self.placements.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Placement> {
        self.placements.iter()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, placement) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", placement)?;
        }
        Ok(())
    }
}

/// Move a single card from the hand onto a stack.
pub(crate) fn apply_placement(
    hand: &mut Hand,
    stacks: &mut StackSet,
    placement: Placement,
) -> Result<(), GameError> {
    let Placement { card, stack } = placement;
    if !hand.contains(card) {
        return Err(GameError::CardNotInHand { card });
    }
    if !stacks.can_place(card, stack) {
        return Err(GameError::IllegalPlacement {
            card,
            stack,
            top: stacks.get(stack).top(),
        });
    }
    hand.remove(card);
    stacks.push(stack, card);
    Ok(())
}

/// Take a single card back off its stack into the hand.
pub(crate) fn undo_placement(
    hand: &mut Hand,
    stacks: &mut StackSet,
    placement: Placement,
) -> Result<(), GameError> {
    let Placement { card, stack } = placement;
    let found = stacks.get(stack).top();
    if found != card {
        return Err(GameError::UndoMismatch {
            stack,
            expected: card,
            found,
        });
    }
    stacks.pop(stack);
    hand.insert(card);
    Ok(())
}

/// Apply an action placement by placement.
///
/// Every placement is checked against the current stack tops. On error the
/// placements before the failing one stay applied.
pub fn apply_action(
    hand: &mut Hand,
    stacks: &mut StackSet,
    action: &Action,
) -> Result<(), GameError> {
    for &placement in action.iter() {
        apply_placement(hand, stacks, placement)?;
    }
    Ok(())
}

/// Reverse an action previously applied with [`apply_action`].
pub fn undo_action(
    hand: &mut Hand,
    stacks: &mut StackSet,
    action: &Action,
) -> Result<(), GameError> {
    for &placement in action.iter().rev() {
        undo_placement(hand, stacks, placement)?;
    }
    Ok(())
}

/// One completed turn, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (starts at 1).
    pub turn: u32,

    /// The player who acted.
    pub player: PlayerId,

    /// The acting hand before the turn.
    pub hand: Hand,

    /// The action played.
    pub action: Action,

    /// Cards drawn afterwards.
    pub drawn: usize,

    /// Score once the turn was complete.
    pub score: usize,
}
