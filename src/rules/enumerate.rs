//! Turn action enumeration.
//!
//! Lists every action a hand could make as one turn: all sequences of legal
//! placements that satisfy the minimum-cards rule. The search is a
//! depth-first backtrack over a single hand and stack set; every placement
//! is applied before recursing and taken back afterwards, so sibling
//! branches always see the state their parent saw.
//!
//! ## Minimum cards
//!
//! While more than one placement is still required, single placements are
//! only prefixes. Once the minimum is met (`min_cards <= 1`) each legal
//! placement is a complete action on its own, and extensions are still
//! explored. If a prefix cannot be extended at all (the hand ran out, no
//! further card fits, or the depth bound was hit) it is accepted as a
//! shorter turn. So the result is empty exactly when no single card can be
//! placed.

use crate::core::{Action, Hand, Placement, StackId, StackSet};

/// Every (card, stack) pair that is legal right now, in hand order then
/// stack order.
#[must_use]
pub fn allowed_placements(hand: &Hand, stacks: &StackSet) -> Vec<Placement> {
    let mut placements = Vec::new();
    for card in hand.iter() {
        for stack in StackId::all() {
            if stacks.can_place(card, stack) {
                placements.push(Placement::new(card, stack));
            }
        }
    }
    placements
}

/// True if `enumerate_actions` would return anything.
#[must_use]
pub fn has_any_action(hand: &Hand, stacks: &StackSet, max_depth: usize) -> bool {
    max_depth > 0
        && hand
            .iter()
            .any(|card| StackId::all().any(|stack| stacks.can_place(card, stack)))
}

/// All actions for `hand` against `stacks`.
///
/// No deduplication: the same cards reaching the same stacks in a different
/// order are separate actions. The empty action is never returned.
#[must_use]
pub fn enumerate_actions(
    hand: &Hand,
    stacks: &StackSet,
    min_cards: usize,
    max_depth: usize,
) -> Vec<Action> {
    let mut hand = hand.clone();
    let mut stacks = stacks.clone();
    enumerate_actions_in_place(&mut hand, &mut stacks, min_cards, max_depth)
}

/// Same as [`enumerate_actions`] but searches on the caller's hand and
/// stacks directly. Both are left exactly as they were.
pub fn enumerate_actions_in_place(
    hand: &mut Hand,
    stacks: &mut StackSet,
    min_cards: usize,
    max_depth: usize,
) -> Vec<Action> {
    let mut search = Search {
        hand,
        stacks,
        prefix: Action::new(),
        out: Vec::new(),
    };
    search.extend(min_cards, max_depth);
    search.out
}

struct Search<'a> {
    hand: &'a mut Hand,
    stacks: &'a mut StackSet,
    prefix: Action,
    out: Vec<Action>,
}

impl Search<'_> {
    /// Emit every completion of the current prefix. Returns false if the
    /// prefix cannot be extended by even one placement.
    fn extend(&mut self, min_cards: usize, depth: usize) -> bool {
        if self.hand.is_empty() || depth == 0 {
            return false;
        }
        let placements = allowed_placements(self.hand, self.stacks);
        if placements.is_empty() {
            return false;
        }

        if min_cards <= 1 {
            for &placement in &placements {
                self.emit_with(placement);
            }
        }

        for placement in placements {
            self.place(placement);
            let extended = self.extend(min_cards.saturating_sub(1), depth - 1);
            if !extended && min_cards > 1 {
                // Dead end before the minimum: accept the shorter turn
                self.out.push(self.prefix.clone());
            }
            self.unplace(placement);
        }
        true
    }

    fn emit_with(&mut self, placement: Placement) {
        let mut action = self.prefix.clone();
        action.push(placement);
        self.out.push(action);
    }

    fn place(&mut self, placement: Placement) {
        self.hand.remove(placement.card);
        self.stacks.push(placement.stack, placement.card);
        self.prefix.push(placement);
    }

    fn unplace(&mut self, placement: Placement) {
        self.prefix.pop();
        self.stacks.pop(placement.stack);
        self.hand.insert(placement.card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{apply_action, Card};

    fn fresh() -> StackSet {
        StackSet::new(Card(1), Card(100))
    }

    #[test]
    fn test_allowed_placements_order() {
        let hand = Hand::from_cards(&[Card(50), Card(20)]);
        let stacks = StackSet::with_tops(Card(30), Card(40));

        let placements = allowed_placements(&hand, &stacks);
        assert_eq!(
            placements,
            vec![
                Placement::new(Card(20), StackId::new(0)),
                Placement::new(Card(20), StackId::new(1)),
                Placement::new(Card(20), StackId::new(2)),
                Placement::new(Card(20), StackId::new(3)),
                Placement::new(Card(50), StackId::new(0)),
                Placement::new(Card(50), StackId::new(1)),
                Placement::new(Card(50), StackId::new(2)),
                Placement::new(Card(50), StackId::new(3)),
            ]
        );
    }

    #[test]
    fn test_empty_hand() {
        assert!(enumerate_actions(&Hand::new(), &fresh(), 2, 6).is_empty());
        assert!(enumerate_actions(&Hand::new(), &fresh(), 1, 6).is_empty());
        assert!(!has_any_action(&Hand::new(), &fresh(), 6));
    }

    #[test]
    fn test_zero_depth() {
        let hand = Hand::from_cards(&[Card(40)]);
        assert!(enumerate_actions(&hand, &fresh(), 1, 0).is_empty());
    }

    #[test]
    fn test_single_card_min_one() {
        let hand = Hand::from_cards(&[Card(40)]);
        let actions = enumerate_actions(&hand, &fresh(), 1, 6);
        assert_eq!(actions.len(), 4);
        assert!(actions.iter().all(|a| a.len() == 1));
    }

    #[test]
    fn test_two_cards_min_two_counts() {
        let hand = Hand::from_cards(&[Card(2), Card(3)]);
        let actions = enumerate_actions(&hand, &fresh(), 2, 6);

        assert!(actions.iter().all(|a| a.len() == 2));
        // 2 first: 3 then fits all four stacks after an up stack took the 2,
        // and three stacks after a down stack took it -> 8 + 6.
        // 3 first: 2 fits three stacks after an up stack took the 3, and
        // all four after a down stack took it -> 6 + 8.
        assert_eq!(actions.len(), 28);
    }

    #[test]
    fn test_min_one_includes_prefixes() {
        let hand = Hand::from_cards(&[Card(2), Card(3)]);
        let actions = enumerate_actions(&hand, &fresh(), 1, 6);

        let singles = actions.iter().filter(|a| a.len() == 1).count();
        let doubles = actions.iter().filter(|a| a.len() == 2).count();
        assert_eq!(singles, 8);
        assert_eq!(doubles, 28);
    }

    #[test]
    fn test_no_legal_placement() {
        let hand = Hand::from_cards(&[Card(50)]);
        let stacks = StackSet::with_tops(Card(61), Card(39));
        assert!(enumerate_actions(&hand, &stacks, 1, 6).is_empty());
        assert!(enumerate_actions(&hand, &stacks, 2, 6).is_empty());
        assert!(!has_any_action(&hand, &stacks, 6));
    }

    #[test]
    fn test_emission_order() {
        let hand = Hand::from_cards(&[Card(70), Card(80)]);
        let stacks = StackSet::with_tops(Card(60), Card(40));
        let actions = enumerate_actions(&hand, &stacks, 1, 6);

        // Single placements first, in hand then stack order
        assert_eq!(
            actions[0],
            Action::from_placements(&[Placement::new(Card(70), StackId::new(0))])
        );
        assert_eq!(
            actions[1],
            Action::from_placements(&[Placement::new(Card(70), StackId::new(1))])
        );
        assert_eq!(
            actions[2],
            Action::from_placements(&[Placement::new(Card(80), StackId::new(0))])
        );
        // Then the extensions of 70 on stack 0
        assert_eq!(
            actions[4],
            Action::from_placements(&[
                Placement::new(Card(70), StackId::new(0)),
                Placement::new(Card(80), StackId::new(0)),
            ])
        );
    }

    #[test]
    fn test_dead_end_prefix_is_accepted() {
        // 70 fits on the up stacks; afterwards 20 fits nowhere.
        let hand = Hand::from_cards(&[Card(20), Card(70)]);
        let stacks = StackSet::with_tops(Card(60), Card(15));

        let actions = enumerate_actions(&hand, &stacks, 2, 6);
        assert_eq!(
            actions,
            vec![
                Action::from_placements(&[Placement::new(Card(70), StackId::new(0))]),
                Action::from_placements(&[Placement::new(Card(70), StackId::new(1))]),
            ]
        );
    }

    #[test]
    fn test_actions_are_sound() {
        let hand = Hand::from_cards(&[Card(12), Card(22), Card(45), Card(88), Card(91)]);
        let stacks = StackSet::with_tops(Card(30), Card(80));

        for action in enumerate_actions(&hand, &stacks, 2, 6) {
            let mut h = hand.clone();
            let mut s = stacks.clone();
            assert!(apply_action(&mut h, &mut s, &action).is_ok(), "{} is illegal", action);
        }
    }

    #[test]
    fn test_in_place_search_restores_state() {
        let mut hand = Hand::from_cards(&[Card(12), Card(22), Card(45), Card(88)]);
        let mut stacks = StackSet::with_tops(Card(30), Card(80));
        let (hand0, stacks0) = (hand.clone(), stacks.clone());

        let actions = enumerate_actions_in_place(&mut hand, &mut stacks, 2, 6);
        assert!(!actions.is_empty());
        assert_eq!(hand, hand0);
        assert_eq!(stacks, stacks0);
    }

    #[test]
    fn test_depth_bound_limits_length() {
        let hand = Hand::from_cards(&[Card(2), Card(3), Card(4), Card(5)]);
        let actions = enumerate_actions(&hand, &fresh(), 1, 2);
        assert!(actions.iter().all(|a| a.len() <= 2));
        assert!(actions.iter().any(|a| a.len() == 2));
    }
}
