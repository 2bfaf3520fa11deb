//! The four climbing stacks and the placement rule.
//!
//! Two stacks climb upwards from 1, two climb downwards from 100. A card
//! goes on an up stack when it is higher than the top, and on a down stack
//! when it is lower. The one exception is the backward step: a card exactly
//! ten below an up stack's top (or ten above a down stack's top) may also be
//! played, pushing the stack back.
//!
//! Stack values are `im::Vector`s so that handing a copy of the stacks to a
//! strategy every turn is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// Size of the backward step exception.
pub const BACKWARD_STEP: u8 = 10;

/// Number of stacks in play.
pub const STACK_COUNT: usize = 4;

/// Direction a stack climbs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

/// Stack identifier: index into the `StackSet` (0..4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackId(pub u8);

impl StackId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All stack IDs in order.
    pub fn all() -> impl Iterator<Item = StackId> {
        (0..STACK_COUNT as u8).map(StackId)
    }
}

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stack({})", self.0)
    }
}

/// A single stack of played cards. The last value is the top.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStack")]
pub struct Stack {
    pub direction: Direction,
    values: Vector<Card>,
}

impl Stack {
    /// Create a stack holding only its seed value.
    #[must_use]
    pub fn new(direction: Direction, seed: Card) -> Self {
        Self {
            direction,
            values: Vector::unit(seed),
        }
    }

    /// Create a stack from explicit values (seed first, top last).
    ///
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn from_values(direction: Direction, values: &[Card]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self {
            direction,
            values: values.iter().copied().collect(),
        })
    }

    /// The card currently on top.
    #[must_use]
    pub fn top(&self) -> Card {
        // Never empty: built with a seed and `pop` refuses to remove it.
        self.values.back().copied().unwrap_or_else(|| self.seed())
    }

    /// The seed value at the bottom.
    #[must_use]
    pub fn seed(&self) -> Card {
        self.values[0]
    }

    /// All values, seed first.
    pub fn values(&self) -> impl Iterator<Item = Card> + '_ {
        self.values.iter().copied()
    }

    /// Number of values including the seed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a stack keeps its seed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Distance the stack has travelled from its seed.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.seed().0.abs_diff(self.top().0) as u32
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.values.push_back(card);
    }

    /// Remove the top card. The seed is never removed.
    pub(crate) fn pop(&mut self) -> Option<Card> {
        if self.values.len() <= 1 {
            return None;
        }
        self.values.pop_back()
    }
}

/// Serialized form of a `Stack`, checked before it becomes one.
#[derive(Deserialize)]
struct RawStack {
    direction: Direction,
    values: Vector<Card>,
}

impl TryFrom<RawStack> for Stack {
    type Error = &'static str;

    fn try_from(raw: RawStack) -> Result<Self, Self::Error> {
        if raw.values.is_empty() {
            return Err("a stack needs at least its seed value");
        }
        Ok(Self {
            direction: raw.direction,
            values: raw.values,
        })
    }
}

/// Check whether `card` may be placed on `stack`.
///
/// - Up: legal if `card > top` or `card == top - 10`.
/// - Down: legal if `card < top` or `card == top + 10`.
///
/// ```
/// use rust_climb::core::{can_place, Card, Direction, Stack};
///
/// let up = Stack::from_values(Direction::Up, &[Card(1), Card(74)]).unwrap();
/// assert!(!can_place(Card(37), &up));
/// assert!(can_place(Card(87), &up));
/// assert!(can_place(Card(64), &up));
///
/// let down = Stack::from_values(Direction::Down, &[Card(1), Card(24)]).unwrap();
/// assert!(!can_place(Card(37), &down));
/// assert!(can_place(Card(22), &down));
/// assert!(can_place(Card(34), &down));
/// ```
#[must_use]
pub fn can_place(card: Card, stack: &Stack) -> bool {
    let top = stack.top().0;
    let card = card.0;
    match stack.direction {
        Direction::Up => card > top || top.checked_sub(BACKWARD_STEP) == Some(card),
        Direction::Down => card < top || top.checked_add(BACKWARD_STEP) == Some(card),
    }
}

/// The four stacks: two up, then two down.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackSet {
    stacks: [Stack; STACK_COUNT],
}

impl StackSet {
    /// Fresh stacks seeded with `low` (up) and `high` (down).
    #[must_use]
    pub fn new(low: Card, high: Card) -> Self {
        Self {
            stacks: [
                Stack::new(Direction::Up, low),
                Stack::new(Direction::Up, low),
                Stack::new(Direction::Down, high),
                Stack::new(Direction::Down, high),
            ],
        }
    }

    /// Build from four explicit stacks (mostly for tests and analysis).
    #[must_use]
    pub fn from_stacks(stacks: [Stack; STACK_COUNT]) -> Self {
        Self { stacks }
    }

    /// Fresh stacks with every up stack on `up_top` and every down stack on
    /// `down_top` (seeded 1 / 100 underneath).
    #[must_use]
    pub fn with_tops(up_top: Card, down_top: Card) -> Self {
        let up = |top: Card| {
            let mut s = Stack::new(Direction::Up, Card(1));
            if top != Card(1) {
                s.push(top);
            }
            s
        };
        let down = |top: Card| {
            let mut s = Stack::new(Direction::Down, Card(100));
            if top != Card(100) {
                s.push(top);
            }
            s
        };
        Self::from_stacks([up(up_top), up(up_top), down(down_top), down(down_top)])
    }

    #[must_use]
    pub fn get(&self, id: StackId) -> &Stack {
        &self.stacks[id.index()]
    }

    /// Iterate over (StackId, &Stack) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (StackId, &Stack)> {
        self.stacks
            .iter()
            .enumerate()
            .map(|(i, s)| (StackId(i as u8), s))
    }

    #[must_use]
    pub fn can_place(&self, card: Card, id: StackId) -> bool {
        can_place(card, self.get(id))
    }

    pub(crate) fn push(&mut self, id: StackId, card: Card) {
        self.stacks[id.index()].push(card);
    }

    pub(crate) fn pop(&mut self, id: StackId) -> Option<Card> {
        self.stacks[id.index()].pop()
    }
}

impl std::fmt::Display for StackSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (_, stack)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let arrow = match stack.direction {
                Direction::Up => '^',
                Direction::Down => 'v',
            };
            write!(f, "{}{}", arrow, stack.top())?;
        }
        Ok(())
    }
}
