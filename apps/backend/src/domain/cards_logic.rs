//! Card matching: what may be laid on the current discard top.

use super::cards_types::{Card, Color};

/// Color-or-value-or-wild matching.
///
/// With no discard top yet, any card is legal. A card of the wild color is
/// always legal and its face is not consulted.
pub fn is_playable(card: Card, top: Option<Card>) -> bool {
    let Some(top) = top else {
        return true;
    };
    card.color == Color::Wild || card.color == top.color || card.face == top.face
}

/// Cards in `hand` that may be laid on `top`.
pub fn playable_cards(hand: &[Card], top: Option<Card>) -> Vec<Card> {
    hand.iter().copied().filter(|c| is_playable(*c, top)).collect()
}
