//! Game directory interface.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::{CardId, GameId, GameStatus, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Game domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub rules: Option<String>,
    pub max_players: usize,
    pub status: GameStatus,
    /// Player who started the game. Used to seed the turn pointer.
    pub owner: Option<PlayerId>,
    /// Physical card currently on top of the discard pile.
    pub discard_top: Option<CardId>,
    pub winner: Option<PlayerId>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// DTO for creating a game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub title: String,
    pub rules: Option<String>,
    pub max_players: usize,
}

impl GameCreate {
    pub fn new(title: impl Into<String>, max_players: usize) -> Self {
        Self {
            title: title.into(),
            rules: None,
            max_players,
        }
    }

    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = Some(rules.into());
        self
    }
}

pub trait GameDirectory: Send + Sync {
    fn create_game(&self, dto: GameCreate) -> Result<Game, DomainError>;

    fn find_game(&self, game_id: GameId) -> Result<Option<Game>, DomainError>;

    fn list_games(&self) -> Result<Vec<Game>, DomainError>;

    /// Overwrite the stored record with `game`.
    fn save_game(&self, game: &Game) -> Result<(), DomainError>;

    fn delete_game(&self, game_id: GameId) -> Result<bool, DomainError>;

    fn require_game(&self, game_id: GameId) -> Result<Game, DomainError> {
        self.find_game(game_id)?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
        })
    }

    fn game_owner(&self, game_id: GameId) -> Result<Option<PlayerId>, DomainError> {
        Ok(self.require_game(game_id)?.owner)
    }

    fn game_discard_top(&self, game_id: GameId) -> Result<Option<CardId>, DomainError> {
        Ok(self.require_game(game_id)?.discard_top)
    }

    fn set_discard_top(&self, game_id: GameId, card_id: Option<CardId>) -> Result<(), DomainError> {
        let mut game = self.require_game(game_id)?;
        game.discard_top = card_id;
        self.save_game(&game)
    }

    fn set_status(
        &self,
        game_id: GameId,
        status: GameStatus,
        owner: Option<PlayerId>,
    ) -> Result<Game, DomainError> {
        let mut game = self.require_game(game_id)?;
        game.status = status;
        game.owner = owner;
        self.save_game(&game)?;
        Ok(game)
    }

    fn set_game_finished(&self, game_id: GameId, winner: PlayerId) -> Result<(), DomainError> {
        let mut game = self.require_game(game_id)?;
        game.status = GameStatus::Finished;
        game.winner = Some(winner);
        self.save_game(&game)
    }
}
