// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::{Card, Color, Face, PlayerId};

pub fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Red),
        Just(Color::Yellow),
        Just(Color::Green),
        Just(Color::Blue),
        Just(Color::Wild),
    ]
}

pub fn suited_color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Red),
        Just(Color::Yellow),
        Just(Color::Green),
        Just(Color::Blue),
    ]
}

pub fn face() -> impl Strategy<Value = Face> {
    prop_oneof![
        (0u8..=9).prop_map(Face::Number),
        Just(Face::Skip),
        Just(Face::Reverse),
        Just(Face::DrawTwo),
        Just(Face::Wild),
        Just(Face::WildDrawFour),
    ]
}

pub fn card() -> impl Strategy<Value = Card> {
    (color(), face()).prop_map(|(color, face)| Card { color, face })
}

/// A non-wild card.
pub fn suited_card() -> impl Strategy<Value = Card> {
    (suited_color(), face()).prop_map(|(color, face)| Card { color, face })
}

/// Distinct seating of 2..=8 players.
pub fn seating() -> impl Strategy<Value = Vec<PlayerId>> {
    proptest::collection::hash_set(1i64..1000, 2..=8).prop_map(|s| s.into_iter().collect())
}
