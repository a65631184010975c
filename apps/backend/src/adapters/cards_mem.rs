//! In-memory adapter for the card store.

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

use crate::domain::{Card, CardId, GameId, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::cards::{CardRecord, CardStore, Holder};

/// DashMap-backed implementation of `CardStore`.
#[derive(Debug)]
pub struct MemoryCardStore {
    rows: DashMap<CardId, CardRecord>,
    next_id: AtomicI64,
}

impl Default for MemoryCardStore {
    fn default() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl MemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_sorted(&self, pred: impl Fn(&CardRecord) -> bool) -> Vec<CardRecord> {
        let mut out: Vec<CardRecord> = self
            .rows
            .iter()
            .filter(|r| pred(r.value()))
            .map(|r| *r.value())
            .collect();
        out.sort_by_key(|r| r.id);
        out
    }
}

impl CardStore for MemoryCardStore {
    fn insert_cards(&self, game_id: GameId, cards: &[Card]) -> Result<Vec<CardId>, DomainError> {
        let ids = cards
            .iter()
            .map(|&card| {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                self.rows.insert(
                    id,
                    CardRecord {
                        id,
                        game_id,
                        card,
                        holder: Holder::Pile,
                    },
                );
                id
            })
            .collect();
        Ok(ids)
    }

    fn find_card(&self, card_id: CardId) -> Result<Option<CardRecord>, DomainError> {
        Ok(self.rows.get(&card_id).map(|r| *r.value()))
    }

    fn find_unassigned_cards(&self, game_id: GameId) -> Result<Vec<CardRecord>, DomainError> {
        Ok(self.collect_sorted(|r| r.game_id == game_id && r.holder == Holder::Pile))
    }

    fn find_discarded_cards(&self, game_id: GameId) -> Result<Vec<CardRecord>, DomainError> {
        Ok(self.collect_sorted(|r| r.game_id == game_id && r.holder == Holder::Discard))
    }

    fn find_cards_held_by(&self, player_id: PlayerId) -> Result<Vec<CardRecord>, DomainError> {
        Ok(self.collect_sorted(|r| r.is_held_by(player_id)))
    }

    fn find_cards_by_color_and_value(
        &self,
        game_id: GameId,
        card: Card,
    ) -> Result<Vec<CardRecord>, DomainError> {
        Ok(self.collect_sorted(|r| r.game_id == game_id && r.card == card))
    }

    fn reassign_holder(&self, card_id: CardId, holder: Holder) -> Result<(), DomainError> {
        let mut row = self.rows.get_mut(&card_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Card, format!("Card {card_id} not found"))
        })?;
        row.holder = holder;
        Ok(())
    }

    fn delete_cards_for_game(&self, game_id: GameId) -> Result<usize, DomainError> {
        let before = self.rows.len();
        self.rows.retain(|_, r| r.game_id != game_id);
        Ok(before.saturating_sub(self.rows.len()))
    }
}
