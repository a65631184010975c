/// Property-based tests for color-or-value-or-wild legality
use proptest::prelude::*;

use crate::domain::{is_playable, playable_cards, test_gens, test_prelude, Card, Color};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: legality is exactly the three-way disjunction.
    #[test]
    fn prop_legality_definition(candidate in test_gens::card(), top in test_gens::card()) {
        let expected = candidate.color == Color::Wild
            || candidate.color == top.color
            || candidate.face == top.face;
        prop_assert_eq!(is_playable(candidate, Some(top)), expected);
    }

    /// Property: any wild-colored card is legal on any top, whatever its face.
    #[test]
    fn prop_wild_always_legal(face in test_gens::face(), top in test_gens::card()) {
        let wild = Card::new(Color::Wild, face);
        prop_assert!(is_playable(wild, Some(top)));
    }

    /// Property: a card is always legal on its own twin.
    #[test]
    fn prop_card_matches_itself(c in test_gens::suited_card()) {
        prop_assert!(is_playable(c, Some(c)));
    }

    /// Property: playable cards are a subset of the hand, in hand order.
    #[test]
    fn prop_playable_subset(
        hand in proptest::collection::vec(test_gens::card(), 0..15),
        top in proptest::option::of(test_gens::card()),
    ) {
        let legal = playable_cards(&hand, top);
        prop_assert!(legal.len() <= hand.len());
        let mut it = hand.iter();
        for c in &legal {
            prop_assert!(it.any(|h| h == c), "{:?} out of order or missing", c);
        }
        if top.is_none() {
            prop_assert_eq!(legal.len(), hand.len());
        }
    }
}
