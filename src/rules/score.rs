//! Scoring.

use crate::core::{Card, Hand, StackSet};

/// Cards not yet played: everything in hands plus the deck.
///
/// Lower is better; 0 means every card reached a stack.
#[must_use]
pub fn score<'a>(hands: impl IntoIterator<Item = &'a Hand>, deck: &[Card]) -> usize {
    hands.into_iter().map(Hand::len).sum::<usize>() + deck.len()
}

/// Total distance the stacks have travelled from their seeds.
#[must_use]
pub fn stack_height(stacks: &StackSet) -> u32 {
    stacks.iter().map(|(_, s)| s.height()).sum()
}
