//! Action enumeration against hand-built tables.

use rust_climb::core::{
    apply_action, can_place, Action, Card, Direction, Hand, Placement, Stack, StackId, StackSet,
};
use rust_climb::rules::{allowed_placements, enumerate_actions, has_any_action};

fn single(card: u8, stack: u8) -> Action {
    Action::from_placements(&[Placement::new(Card(card), StackId::new(stack))])
}

/// One card, two required: the short turn is accepted on every stack.
#[test]
fn test_single_card_with_two_required() {
    let hand = Hand::from_cards(&[Card(2)]);
    let stacks = StackSet::new(Card(1), Card(100));

    let actions = enumerate_actions(&hand, &stacks, 2, 6);
    assert!(actions.contains(&single(2, 0)));
    assert!(actions.contains(&single(2, 1)));
    assert!(actions.iter().all(|a| a.len() == 1));
    assert_eq!(actions.len(), 4);
}

/// A card ten below an up stack's top pushes it back.
#[test]
fn test_backward_step_on_up_stack() {
    let up = Stack::from_values(Direction::Up, &[Card(1), Card(100)]).unwrap();
    assert!(can_place(Card(90), &up));
    assert!(!can_place(Card(91), &up));
    assert!(!can_place(Card(89), &up));

    let stacks = StackSet::from_stacks([
        up,
        Stack::from_values(Direction::Up, &[Card(1), Card(95)]).unwrap(),
        Stack::from_values(Direction::Down, &[Card(100), Card(20)]).unwrap(),
        Stack::from_values(Direction::Down, &[Card(100), Card(20)]).unwrap(),
    ]);
    let hand = Hand::from_cards(&[Card(90)]);

    let actions = enumerate_actions(&hand, &stacks, 2, 6);
    assert_eq!(actions, vec![single(90, 0)]);
}

/// A card that fits nowhere gives no actions at all.
#[test]
fn test_unplayable_hand_is_stuck() {
    let hand = Hand::from_cards(&[Card(50)]);
    let stacks = StackSet::with_tops(Card(61), Card(39));

    assert!(enumerate_actions(&hand, &stacks, 2, 6).is_empty());
    assert!(enumerate_actions(&hand, &stacks, 1, 6).is_empty());
    assert!(!has_any_action(&hand, &stacks, 6));
}

/// Both sides of a backward step are exact.
#[test]
fn test_backward_step_is_exactly_ten() {
    let stacks = StackSet::with_tops(Card(60), Card(40));
    let hand = Hand::from_cards(&[Card(50)]);

    // 50 is 60 - 10 and 40 + 10
    let actions = enumerate_actions(&hand, &stacks, 1, 6);
    assert_eq!(actions.len(), 4);
}

/// With one card required, every legal placement is an action by itself.
#[test]
fn test_every_placement_is_an_action_at_min_one() {
    let hand = Hand::from_cards(&[Card(8), Card(33), Card(47), Card(76)]);
    let stacks = StackSet::with_tops(Card(40), Card(57));

    let actions = enumerate_actions(&hand, &stacks, 1, 6);
    let placements = allowed_placements(&hand, &stacks);
    assert!(!placements.is_empty());
    for p in placements {
        assert!(actions.contains(&Action::from_placements(&[p])), "missing {}", p);
    }
}

/// Two required and plenty of room: nothing shorter than two is listed.
#[test]
fn test_min_two_without_dead_ends() {
    let hand = Hand::from_cards(&[Card(10), Card(20), Card(80), Card(90)]);
    let stacks = StackSet::new(Card(1), Card(100));

    let actions = enumerate_actions(&hand, &stacks, 2, 6);
    assert!(!actions.is_empty());
    assert!(actions.iter().all(|a| a.len() >= 2));
    assert!(actions.iter().any(|a| a.len() == 4));
}

#[test]
fn test_actions_use_distinct_cards_from_hand() {
    let hand = Hand::from_cards(&[Card(15), Card(25), Card(35), Card(85)]);
    let stacks = StackSet::with_tops(Card(20), Card(90));

    for action in enumerate_actions(&hand, &stacks, 2, 6) {
        let mut cards: Vec<_> = action.iter().map(|p| p.card).collect();
        assert!(cards.iter().all(|&c| hand.contains(c)));
        cards.sort();
        cards.dedup();
        assert_eq!(cards.len(), action.len());

        let mut h = hand.clone();
        let mut s = stacks.clone();
        apply_action(&mut h, &mut s, &action).unwrap();
        assert_eq!(h.len(), hand.len() - action.len());
    }
}

#[test]
fn test_same_cards_in_other_order_are_distinct() {
    let hand = Hand::from_cards(&[Card(30), Card(45)]);
    let stacks = StackSet::with_tops(Card(20), Card(80));
    let actions = enumerate_actions(&hand, &stacks, 2, 6);

    let forward = Action::from_placements(&[
        Placement::new(Card(30), StackId::new(0)),
        Placement::new(Card(45), StackId::new(0)),
    ]);
    let split = Action::from_placements(&[
        Placement::new(Card(45), StackId::new(0)),
        Placement::new(Card(30), StackId::new(1)),
    ]);
    assert!(actions.contains(&forward));
    assert!(actions.contains(&split));

    // 45 then 30 on the same up stack is not legal
    let backward = Action::from_placements(&[
        Placement::new(Card(45), StackId::new(0)),
        Placement::new(Card(30), StackId::new(0)),
    ]);
    assert!(!actions.contains(&backward));
}
