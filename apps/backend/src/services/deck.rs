//! Deck Manager: dealing, drawing and replenishing one game's draw pile.
//!
//! Callers hold the game's session lock, so the read of the pile and the
//! reassignment that follows cannot interleave with another action on the
//! same game.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use crate::domain::dealing::{partition_hands, pick_uniform, shuffle_ids};
use crate::domain::rules::valid_hand_size;
use crate::domain::{standard_deck, Card, CardId, GameId, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::cards::{CardRecord, CardStore, Holder};
use crate::repos::games::GameDirectory;

#[derive(Clone)]
pub struct DeckManager {
    cards: Arc<dyn CardStore>,
    games: Arc<dyn GameDirectory>,
}

impl DeckManager {
    pub fn new(cards: Arc<dyn CardStore>, games: Arc<dyn GameDirectory>) -> Self {
        Self { cards, games }
    }

    /// Put a fresh standard deck into the game's draw pile.
    pub fn seed_standard_deck(&self, game_id: GameId) -> Result<Vec<CardId>, DomainError> {
        let ids = self.cards.insert_cards(game_id, &standard_deck())?;
        debug!(game_id, count = ids.len(), "Seeded standard deck");
        Ok(ids)
    }

    /// Deal `hand_size` cards to every player in `players`, in order.
    pub fn deal_initial_hands<R: Rng + ?Sized>(
        &self,
        game_id: GameId,
        players: &[PlayerId],
        hand_size: usize,
        rng: &mut R,
    ) -> Result<Vec<(PlayerId, Vec<Card>)>, DomainError> {
        if !valid_hand_size(hand_size) {
            return Err(DomainError::validation(
                ValidationKind::InvalidHandSize,
                format!("Hand size {hand_size} is out of range"),
            ));
        }

        let pile = self.cards.find_unassigned_cards(game_id)?;
        let pile_ids: Vec<CardId> = pile.iter().map(|r| r.id).collect();
        let hands = partition_hands(&pile_ids, players.len(), hand_size, rng)?;

        let mut dealt = Vec::with_capacity(players.len());
        for (&player_id, hand) in players.iter().zip(hands) {
            self.cards.reassign_many(&hand, Holder::Player(player_id))?;
            let cards = hand
                .iter()
                .filter_map(|id| pile.iter().find(|r| r.id == *id).map(|r| r.card))
                .collect();
            dealt.push((player_id, cards));
        }

        info!(game_id, players = players.len(), hand_size, "Dealt initial hands");
        Ok(dealt)
    }

    /// Draw `count` distinct cards for `player_id`, replenishing first if
    /// the pile is short.
    ///
    /// Either all `count` cards move to the player or none do.
    pub fn draw_from_pile<R: Rng + ?Sized>(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<CardRecord>, DomainError> {
        if count == 0 {
            return Err(DomainError::validation_other("Draw count must be at least 1"));
        }

        let mut pile = self.cards.find_unassigned_cards(game_id)?;
        if pile.len() < count {
            let recyclable = self.recyclable(game_id)?;
            if recyclable.is_empty() {
                return Err(DomainError::validation(
                    ValidationKind::EmptyDeck,
                    format!(
                        "Pile holds {} cards, {count} requested, nothing to replenish",
                        pile.len()
                    ),
                ));
            }
            if pile.len() + recyclable.len() < count {
                return Err(DomainError::validation(
                    ValidationKind::InsufficientCards,
                    format!(
                        "Only {} cards available after replenishing, {count} requested",
                        pile.len() + recyclable.len()
                    ),
                ));
            }
            self.move_to_pile(game_id, recyclable, rng)?;
            pile = self.cards.find_unassigned_cards(game_id)?;
        }

        let pile_ids: Vec<CardId> = pile.iter().map(|r| r.id).collect();
        let picked = pick_uniform(&pile_ids, count, rng)?;
        self.cards.reassign_many(&picked, Holder::Player(player_id))?;

        let drawn: Vec<CardRecord> = picked
            .iter()
            .filter_map(|id| pile.iter().find(|r| r.id == *id))
            .map(|r| CardRecord {
                holder: Holder::Player(player_id),
                ..*r
            })
            .collect();

        debug!(game_id, player_id, count, "Drew cards from pile");
        Ok(drawn)
    }

    /// Move every discarded card except the top back into the pile.
    ///
    /// Returns how many cards moved. Fails with `EmptyDeck` when there is
    /// nothing to move and the pile is empty.
    pub fn replenish<R: Rng + ?Sized>(
        &self,
        game_id: GameId,
        rng: &mut R,
    ) -> Result<usize, DomainError> {
        let recyclable = self.recyclable(game_id)?;
        if recyclable.is_empty() {
            if self.cards.find_unassigned_cards(game_id)?.is_empty() {
                return Err(DomainError::validation(
                    ValidationKind::EmptyDeck,
                    "Draw pile is empty and there is nothing to replenish",
                ));
            }
            return Ok(0);
        }
        self.move_to_pile(game_id, recyclable, rng)
    }

    /// Discarded cards that may go back to the pile: everything but the top.
    fn recyclable(&self, game_id: GameId) -> Result<Vec<CardId>, DomainError> {
        let top = self.games.game_discard_top(game_id)?;
        Ok(self
            .cards
            .find_discarded_cards(game_id)?
            .into_iter()
            .map(|r| r.id)
            .filter(|id| Some(*id) != top)
            .collect())
    }

    fn move_to_pile<R: Rng + ?Sized>(
        &self,
        game_id: GameId,
        mut ids: Vec<CardId>,
        rng: &mut R,
    ) -> Result<usize, DomainError> {
        shuffle_ids(&mut ids, rng);
        self.cards.reassign_many(&ids, Holder::Pile)?;
        info!(game_id, count = ids.len(), "Replenished draw pile from discards");
        Ok(ids.len())
    }
}
