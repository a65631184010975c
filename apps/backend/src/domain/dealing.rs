//! Deck composition and the pure half of dealing/drawing.
//!
//! Everything here works on explicit slices of card ids; persisting the
//! resulting ownership is the deck service's job.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::domain::{Card, CardId, Color, Face};
use crate::errors::domain::{DomainError, ValidationKind};

/// The 108-card standard deck.
///
/// Per colored suit: one `0`, two each of `1..=9`, `Skip`, `Reverse` and
/// `DrawTwo`. Plus four `Wild` and four `WildDrawFour`.
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(108);
    for color in Color::SUITED {
        deck.push(Card::new(color, Face::Number(0)));
        for _ in 0..2 {
            for n in 1..=9 {
                deck.push(Card::new(color, Face::Number(n)));
            }
            deck.push(Card::new(color, Face::Skip));
            deck.push(Card::new(color, Face::Reverse));
            deck.push(Card::new(color, Face::DrawTwo));
        }
    }
    for _ in 0..4 {
        deck.push(Card::new(Color::Wild, Face::Wild));
        deck.push(Card::new(Color::Wild, Face::WildDrawFour));
    }
    deck
}

/// Fisher-Yates shuffle of an explicit id list.
pub fn shuffle_ids<R: Rng + ?Sized>(ids: &mut [CardId], rng: &mut R) {
    ids.shuffle(rng);
}

/// Pick `count` distinct ids uniformly at random from `pile`.
pub fn pick_uniform<R: Rng + ?Sized>(
    pile: &[CardId],
    count: usize,
    rng: &mut R,
) -> Result<Vec<CardId>, DomainError> {
    if pile.len() < count {
        return Err(DomainError::validation(
            ValidationKind::InsufficientCards,
            format!("Pile holds {} cards, {count} requested", pile.len()),
        ));
    }
    let mut picked: Vec<CardId> = pile.choose_multiple(rng, count).copied().collect();
    // choose_multiple does not promise a random order
    picked.shuffle(rng);
    Ok(picked)
}

/// Split a shuffled pile into `players` hands of `hand_size`.
pub fn partition_hands<R: Rng + ?Sized>(
    pile: &[CardId],
    players: usize,
    hand_size: usize,
    rng: &mut R,
) -> Result<Vec<Vec<CardId>>, DomainError> {
    if hand_size == 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidHandSize,
            "Hand size must be at least 1",
        ));
    }
    let needed = players * hand_size;
    if pile.len() < needed {
        return Err(DomainError::validation(
            ValidationKind::InsufficientCards,
            format!(
                "Dealing {hand_size} cards to {players} players needs {needed}, pile holds {}",
                pile.len()
            ),
        ));
    }

    let mut shuffled = pile.to_vec();
    shuffle_ids(&mut shuffled, rng);
    Ok(shuffled
        .chunks(hand_size)
        .take(players)
        .map(<[CardId]>::to_vec)
        .collect())
}
