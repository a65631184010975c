//! Card store interface used by the deck manager and round controller.
//!
//! Every physical card belongs to one game and sits in exactly one place:
//! the draw pile, a player's hand, or the discard pile.

use serde::Serialize;

use crate::domain::{Card, CardId, GameId, PlayerId};
use crate::errors::domain::DomainError;

/// Where a physical card currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "player_id")]
pub enum Holder {
    /// Unassigned: available to be dealt or drawn.
    Pile,
    Player(PlayerId),
    Discard,
}

/// Card domain model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRecord {
    pub id: CardId,
    pub game_id: GameId,
    pub card: Card,
    pub holder: Holder,
}

impl CardRecord {
    pub fn is_held_by(&self, player: PlayerId) -> bool {
        self.holder == Holder::Player(player)
    }
}

pub trait CardStore: Send + Sync {
    /// Add fresh cards to a game's draw pile, returning their ids in order.
    fn insert_cards(&self, game_id: GameId, cards: &[Card]) -> Result<Vec<CardId>, DomainError>;

    fn find_card(&self, card_id: CardId) -> Result<Option<CardRecord>, DomainError>;

    /// Cards of `game_id` currently in the draw pile.
    fn find_unassigned_cards(&self, game_id: GameId) -> Result<Vec<CardRecord>, DomainError>;

    /// Cards of `game_id` currently on the discard pile, top included.
    fn find_discarded_cards(&self, game_id: GameId) -> Result<Vec<CardRecord>, DomainError>;

    /// Cards in `player_id`'s hand, in id order.
    fn find_cards_held_by(&self, player_id: PlayerId) -> Result<Vec<CardRecord>, DomainError>;

    /// Every physical copy of `card` in `game_id`, wherever it sits.
    fn find_cards_by_color_and_value(
        &self,
        game_id: GameId,
        card: Card,
    ) -> Result<Vec<CardRecord>, DomainError>;

    fn reassign_holder(&self, card_id: CardId, holder: Holder) -> Result<(), DomainError>;

    /// Remove every card of a game. Returns how many were removed.
    fn delete_cards_for_game(&self, game_id: GameId) -> Result<usize, DomainError>;

    /// Move a batch of cards to `holder`.
    fn reassign_many(&self, card_ids: &[CardId], holder: Holder) -> Result<(), DomainError> {
        for &id in card_ids {
            self.reassign_holder(id, holder)?;
        }
        Ok(())
    }

    /// Hand contents as `(id, card)` pairs.
    fn hand_of(&self, player_id: PlayerId) -> Result<Vec<(CardId, Card)>, DomainError> {
        Ok(self
            .find_cards_held_by(player_id)?
            .into_iter()
            .map(|r| (r.id, r.card))
            .collect())
    }
}
