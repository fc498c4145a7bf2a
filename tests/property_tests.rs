//! Property tests over random play sequences.

use proptest::prelude::*;

use frame_scoring::{Bowling, LeafPlay, NodeSnapshot, Score, Side, Tennis};

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::First), Just(Side::Second)]
}

/// Pins per ball, each frame never knocking more than ten.
fn legal_balls() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec((0u32..=10, 0u32..=10), 0..12).prop_map(|frames| {
        frames
            .into_iter()
            .flat_map(|(first, second)| {
                if first == 10 {
                    vec![10]
                } else {
                    vec![first, second.min(10 - first)]
                }
            })
            .collect()
    })
}

/// Every node present in `before` scores no less in `after`.
///
/// Children are matched by position: frames only append, and decorators keep
/// their children for life.
fn no_score_decreased(before: &NodeSnapshot, after: &NodeSnapshot) -> bool {
    Side::ALL.iter().all(|&side| after.score[side] >= before.score[side])
        && before.children.len() <= after.children.len()
        && before
            .children
            .iter()
            .zip(&after.children)
            .all(|(old, new)| no_score_decreased(old, new))
}

proptest! {
    /// Recording a play never lowers either side's score.
    #[test]
    fn prop_tennis_scores_never_decrease(points in prop::collection::vec(side(), 0..400)) {
        let mut tennis = Tennis::default();
        let mut previous = Score::ZERO;
        for winner in points {
            tennis.play(winner);
            let current = tennis.match_score();
            prop_assert!(current[Side::First] >= previous[Side::First]);
            prop_assert!(current[Side::Second] >= previous[Side::Second]);
            previous = current;
        }
    }

    /// No node anywhere in the tree loses points from one play to the next.
    #[test]
    fn prop_tennis_node_scores_never_decrease(points in prop::collection::vec(side(), 0..600)) {
        let mut tennis = Tennis::default();
        let mut previous = tennis.tree().snapshot();
        for winner in points {
            tennis.play(winner);
            let current = tennis.tree().snapshot();
            prop_assert!(no_score_decreased(&previous, &current), "after {winner}:\n{current}");
            previous = current;
        }
    }

    #[test]
    fn prop_bowling_node_scores_never_decrease(balls in legal_balls()) {
        let mut game = Bowling::default();
        let mut previous = game.tree().snapshot();
        for pins in balls {
            game.play(pins);
            let current = game.tree().snapshot();
            prop_assert!(no_score_decreased(&previous, &current));
            previous = current;
        }
    }

    /// Large plays saturate rather than wrapping a score back down.
    #[test]
    fn prop_extreme_plays_never_decrease(amounts in prop::collection::vec(any::<u32>(), 1..30)) {
        let mut game = Bowling::default();
        let mut previous = game.tree().snapshot();
        for pins in amounts {
            game.play(pins);
            let current = game.tree().snapshot();
            prop_assert!(no_score_decreased(&previous, &current));
            previous = current;
        }
    }

    #[test]
    fn prop_bowling_total_bounded(balls in legal_balls()) {
        let mut game = Bowling::default();
        let mut previous = 0;
        for pins in balls {
            game.play(pins);
            let total = game.total_score();
            prop_assert!(total >= previous);
            prop_assert!(total <= 300);
            previous = total;
        }
        prop_assert!(game.frame_count() <= 10);
        let accumulated = game.accumulated_frame_scores();
        prop_assert_eq!(accumulated.last().copied().unwrap_or(0), game.total_score());
    }

    /// Once complete, a match ignores every further point.
    #[test]
    fn prop_complete_match_is_frozen(
        points in prop::collection::vec(side(), 400..1500),
        extra in prop::collection::vec(side(), 1..20),
    ) {
        let mut tennis = Tennis::default();
        for winner in points {
            tennis.play(winner);
        }
        prop_assume!(tennis.is_complete());

        let sets = tennis.set_scores();
        let snapshot = tennis.tree().snapshot();
        for winner in extra {
            tennis.play(winner);
        }
        prop_assert_eq!(tennis.set_scores(), sets);
        prop_assert_eq!(tennis.tree().snapshot(), snapshot);
    }

    /// A leaf keeps the first play only.
    #[test]
    fn prop_leaf_records_once(plays in prop::collection::vec((side(), 0u32..100), 1..10)) {
        let mut leaf = LeafPlay::new("leaf");
        for &(side, amount) in &plays {
            leaf.record_play(side, amount);
        }
        let (side, amount) = plays[0];
        prop_assert_eq!(leaf.score(), Score::single(side, amount));
        prop_assert!(leaf.is_complete());
    }

    /// Playing one instance leaves the prototype and its siblings untouched.
    #[test]
    fn prop_instances_are_independent(points in prop::collection::vec(side(), 1..200)) {
        let prototype = Tennis::default().tree().clone();
        let mut played = prototype.instantiate(0);
        let sibling = prototype.instantiate(1);

        for winner in points {
            played.record_play(winner, 1);
        }

        prop_assert_eq!(prototype.snapshot(), Tennis::default().tree().snapshot());
        prop_assert_eq!(sibling.play_count(), 0);
        prop_assert_eq!(sibling.score(), Score::ZERO);
        prop_assert!(played.play_count() >= 1);
    }
}
