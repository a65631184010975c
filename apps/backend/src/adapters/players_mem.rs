//! In-memory adapter for the player directory.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{GameId, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::repos::players::{Player, PlayerDirectory};

#[derive(Debug)]
pub struct MemoryPlayerDirectory {
    rows: DashMap<PlayerId, Player>,
    /// Lowercased name -> id. Guards uniqueness.
    names: DashMap<String, PlayerId>,
    /// Join sequence of each seated player, for stable seating order.
    joined: DashMap<PlayerId, u64>,
    next_id: AtomicI64,
    next_seq: AtomicU64,
}

impl Default for MemoryPlayerDirectory {
    fn default() -> Self {
        Self {
            rows: DashMap::new(),
            names: DashMap::new(),
            joined: DashMap::new(),
            next_id: AtomicI64::new(1),
            next_seq: AtomicU64::new(0),
        }
    }
}

impl MemoryPlayerDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_key(name: &str) -> String {
    name.to_lowercase()
}

impl PlayerDirectory for MemoryPlayerDirectory {
    fn create_player(&self, name: &str) -> Result<Player, DomainError> {
        match self.names.entry(name_key(name)) {
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::PlayerNameTaken,
                format!("Player name '{name}' is already taken"),
            )),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let player = Player {
                    id,
                    name: name.to_string(),
                    game_id: None,
                };
                self.rows.insert(id, player.clone());
                slot.insert(id);
                Ok(player)
            }
        }
    }

    fn find_player(&self, player_id: PlayerId) -> Result<Option<Player>, DomainError> {
        Ok(self.rows.get(&player_id).map(|p| p.value().clone()))
    }

    fn find_player_by_name(&self, name: &str) -> Result<Option<Player>, DomainError> {
        let Some(id) = self.names.get(&name_key(name)).map(|r| *r.value()) else {
            return Ok(None);
        };
        self.find_player(id)
    }

    fn list_players(&self) -> Result<Vec<Player>, DomainError> {
        let mut players: Vec<Player> = self.rows.iter().map(|p| p.value().clone()).collect();
        players.sort_by_key(|p| p.id);
        Ok(players)
    }

    fn rename_player(&self, player_id: PlayerId, name: &str) -> Result<Player, DomainError> {
        let old_key = self
            .rows
            .get(&player_id)
            .map(|p| name_key(&p.name))
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Player,
                    format!("Player {player_id} not found"),
                )
            })?;

        let new_key = name_key(name);
        if new_key != old_key {
            match self.names.entry(new_key) {
                Entry::Occupied(_) => {
                    return Err(DomainError::conflict(
                        ConflictKind::PlayerNameTaken,
                        format!("Player name '{name}' is already taken"),
                    ))
                }
                Entry::Vacant(slot) => {
                    slot.insert(player_id);
                }
            }
            self.names.remove(&old_key);
        }

        let mut row = self.rows.get_mut(&player_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} not found"),
            )
        })?;
        row.name = name.to_string();
        Ok(row.clone())
    }

    fn delete_player(&self, player_id: PlayerId) -> Result<bool, DomainError> {
        let Some((_, player)) = self.rows.remove(&player_id) else {
            return Ok(false);
        };
        self.names.remove(&name_key(&player.name));
        self.joined.remove(&player_id);
        Ok(true)
    }

    fn set_membership(
        &self,
        player_id: PlayerId,
        game_id: Option<GameId>,
    ) -> Result<(), DomainError> {
        let mut row = self.rows.get_mut(&player_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} not found"),
            )
        })?;
        row.game_id = game_id;
        drop(row);

        match game_id {
            Some(_) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                self.joined.insert(player_id, seq);
            }
            None => {
                self.joined.remove(&player_id);
            }
        }
        Ok(())
    }

    fn claim_membership(&self, player_id: PlayerId, game_id: GameId) -> Result<(), DomainError> {
        let mut row = self.rows.get_mut(&player_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} not found"),
            )
        })?;
        if let Some(current) = row.game_id {
            return Err(DomainError::validation(
                ValidationKind::AlreadyInGame,
                format!("Player {player_id} is already in game {current}"),
            ));
        }
        row.game_id = Some(game_id);
        // Sequence taken while the row is held so join order matches claim order
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.joined.insert(player_id, seq);
        Ok(())
    }

    fn seated_players(&self, game_id: GameId) -> Result<Vec<Player>, DomainError> {
        let mut seated: Vec<(u64, Player)> = self
            .rows
            .iter()
            .filter(|p| p.game_id == Some(game_id))
            .map(|p| {
                let seq = self.joined.get(&p.id).map(|s| *s.value()).unwrap_or(u64::MAX);
                (seq, p.value().clone())
            })
            .collect();
        seated.sort_by_key(|(seq, p)| (*seq, p.id));
        Ok(seated.into_iter().map(|(_, p)| p).collect())
    }
}
