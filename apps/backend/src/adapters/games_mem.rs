//! In-memory adapter for the game directory.

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use time::OffsetDateTime;

use crate::domain::{GameId, GameStatus};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::games::{Game, GameCreate, GameDirectory};

#[derive(Debug)]
pub struct MemoryGameDirectory {
    rows: DashMap<GameId, Game>,
    next_id: AtomicI64,
}

impl Default for MemoryGameDirectory {
    fn default() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl MemoryGameDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameDirectory for MemoryGameDirectory {
    fn create_game(&self, dto: GameCreate) -> Result<Game, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let game = Game {
            id,
            title: dto.title,
            rules: dto.rules,
            max_players: dto.max_players,
            status: GameStatus::Stopped,
            owner: None,
            discard_top: None,
            winner: None,
            created_at: OffsetDateTime::now_utc(),
        };
        self.rows.insert(id, game.clone());
        Ok(game)
    }

    fn find_game(&self, game_id: GameId) -> Result<Option<Game>, DomainError> {
        Ok(self.rows.get(&game_id).map(|g| g.value().clone()))
    }

    fn list_games(&self) -> Result<Vec<Game>, DomainError> {
        let mut games: Vec<Game> = self.rows.iter().map(|g| g.value().clone()).collect();
        games.sort_by_key(|g| g.id);
        Ok(games)
    }

    fn save_game(&self, game: &Game) -> Result<(), DomainError> {
        let mut row = self.rows.get_mut(&game.id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {} not found", game.id))
        })?;
        *row = game.clone();
        Ok(())
    }

    fn delete_game(&self, game_id: GameId) -> Result<bool, DomainError> {
        Ok(self.rows.remove(&game_id).is_some())
    }
}
