/// Property-based tests for the turn order engine
use proptest::prelude::*;

use crate::domain::turn_order::TurnState;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: reversal is its own inverse.
    /// k steps one way, a direction toggle, then k steps back restores the index.
    #[test]
    fn prop_reverse_round_trip(
        seats in test_gens::seating(),
        start_pick in any::<prop::sample::Index>(),
        steps in 0usize..20,
    ) {
        let start = seats[start_pick.index(seats.len())];
        let mut turn = TurnState::new(seats.clone());
        turn.seed(start).unwrap();
        let original = turn.current_index();

        for _ in 0..steps {
            turn.advance(start).unwrap();
        }
        turn.activate_reverse();
        for _ in 0..steps {
            turn.advance(start).unwrap();
        }

        prop_assert_eq!(turn.current_index(), original);
    }

    /// Property: the pointer always refers to a seated player, through any mix
    /// of advances, skips, reverses and departures.
    #[test]
    fn prop_pointer_stays_seated(
        seats in test_gens::seating(),
        ops in proptest::collection::vec(0u8..4, 1..40),
    ) {
        let owner = seats[0];
        let mut turn = TurnState::new(seats.clone());
        turn.seed(owner).unwrap();

        for op in ops {
            match op {
                0 => { let _ = turn.advance(owner); }
                1 => turn.activate_skip(),
                2 => turn.activate_reverse(),
                _ => {
                    if turn.seated_count() > 1 {
                        let leaving = turn.seats()[turn.seated_count() / 2];
                        if leaving != owner {
                            turn.unseat(leaving);
                        }
                    }
                }
            }
            let idx = turn.current_index().unwrap();
            prop_assert!(idx < turn.seated_count());
            prop_assert!(turn.is_seated(turn.current_player().unwrap()));
        }
    }

    /// Property: a full lap of advances visits every seat exactly once.
    #[test]
    fn prop_full_lap_visits_everyone(seats in test_gens::seating(), reversed in any::<bool>()) {
        let owner = seats[0];
        let mut turn = TurnState::new(seats.clone());
        turn.seed(owner).unwrap();
        if reversed {
            turn.activate_reverse();
        }

        let mut seen = std::collections::HashSet::new();
        for _ in 0..seats.len() {
            seen.insert(turn.advance(owner).unwrap());
        }
        prop_assert_eq!(seen.len(), seats.len());
    }
}
