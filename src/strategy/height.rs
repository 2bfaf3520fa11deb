//! Height-minimising strategy.

use crate::core::{apply_action, undo_action, Action, GameRng};
use crate::rules::stack_height;

use super::{Strategy, TurnView};

/// Plays the action that leaves the stacks closest to their seeds.
///
/// Each candidate is applied to the view's copies, measured with
/// [`stack_height`], and taken back. Ties keep the earliest candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimizeHeightStrategy;

impl Strategy for MinimizeHeightStrategy {
    fn name(&self) -> &str {
        "min-height"
    }

    fn choose(&self, view: &mut TurnView, _rng: &mut GameRng) -> Option<Action> {
        let mut best: Option<(u32, Action)> = None;

        for action in view.actions() {
            apply_action(&mut view.hand, &mut view.stacks, &action).ok()?;
            let height = stack_height(&view.stacks);
            undo_action(&mut view.hand, &mut view.stacks, &action).ok()?;

            if best.as_ref().map_or(true, |(h, _)| height < *h) {
                best = Some((height, action));
            }
        }

        best.map(|(_, action)| action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Hand, Placement, StackId, StackSet};

    #[test]
    fn test_prefers_backward_step() {
        // 50 on an up stack at 60 moves it back by ten; 70 and 75 only climb.
        let mut view = TurnView::new(
            Hand::from_cards(&[Card(50), Card(70), Card(75)]),
            StackSet::with_tops(Card(60), Card(10)),
            1,
            6,
        );
        let before = view.clone();

        let action = MinimizeHeightStrategy
            .choose(&mut view, &mut GameRng::new(0))
            .unwrap();

        assert_eq!(
            action,
            Action::from_placements(&[Placement::new(Card(50), StackId::new(0))])
        );
        assert_eq!(view, before);
    }

    #[test]
    fn test_picks_smallest_climb() {
        let mut view = TurnView::new(
            Hand::from_cards(&[Card(2), Card(3), Card(98)]),
            StackSet::new(Card(1), Card(100)),
            2,
            6,
        );

        let action = MinimizeHeightStrategy
            .choose(&mut view, &mut GameRng::new(0))
            .unwrap();

        let mut stacks = view.stacks.clone();
        let mut hand = view.hand.clone();
        apply_action(&mut hand, &mut stacks, &action).unwrap();
        // 2 then 3 on one up stack costs 2; anything involving 98 costs 3+
        assert_eq!(stack_height(&stacks), 2);
        assert_eq!(
            action,
            Action::from_placements(&[
                Placement::new(Card(2), StackId::new(0)),
                Placement::new(Card(3), StackId::new(0)),
            ])
        );
    }
}
