//! Play validation: ownership, turn, then card legality, in that order.

use crate::domain::cards_logic::is_playable;
use crate::domain::{Card, CardId, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

/// What the validator needs to know about a game at the moment of a play.
#[derive(Debug, Clone, Copy)]
pub struct PlayContext<'a> {
    /// Cards currently held by the acting player.
    pub hand: &'a [(CardId, Card)],
    /// Player expected to act, if the turn pointer has been seeded.
    pub expected: Option<PlayerId>,
    /// Current discard top. `None` before the first play of the game.
    pub top: Option<Card>,
}

/// Validate a proposed play and return the id of the held copy to lay down.
///
/// The first play of a game (no discard top) skips the turn check and is
/// legal for any card.
pub fn validate_play(
    ctx: &PlayContext<'_>,
    actor: PlayerId,
    card: Card,
) -> Result<CardId, DomainError> {
    let Some(&(card_id, _)) = ctx.hand.iter().find(|(_, held)| *held == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotOwned,
            format!("Player {actor} does not hold {card}"),
        ));
    };

    if ctx.top.is_some() {
        validate_turn(ctx.expected, actor)?;
    }

    if !is_playable(card, ctx.top) {
        return Err(DomainError::validation(
            ValidationKind::IllegalPlay,
            format!(
                "{card} does not match {}",
                ctx.top.map(|t| t.to_string()).unwrap_or_default()
            ),
        ));
    }

    Ok(card_id)
}

/// Turn ownership check shared by plays and draws.
pub fn validate_turn(expected: Option<PlayerId>, actor: PlayerId) -> Result<(), DomainError> {
    match expected {
        Some(p) if p == actor => Ok(()),
        Some(p) => Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            format!("Not your turn. Expected player {p}, got player {actor}"),
        )),
        None => Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            format!("Turn order not initialized; player {actor} cannot act"),
        )),
    }
}
