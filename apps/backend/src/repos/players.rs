//! Player directory interface.

use serde::Serialize;

use crate::domain::{GameId, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Player domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Game the player is currently seated in.
    pub game_id: Option<GameId>,
}

pub trait PlayerDirectory: Send + Sync {
    /// Store a new player. Names are unique case-insensitively; a clash is a
    /// `ConflictKind::PlayerNameTaken` conflict.
    fn create_player(&self, name: &str) -> Result<Player, DomainError>;

    fn find_player(&self, player_id: PlayerId) -> Result<Option<Player>, DomainError>;

    /// Case-insensitive lookup.
    fn find_player_by_name(&self, name: &str) -> Result<Option<Player>, DomainError>;

    fn list_players(&self) -> Result<Vec<Player>, DomainError>;

    /// Change a player's display name under the same uniqueness rule as
    /// `create_player`. A change of case alone is not a clash.
    fn rename_player(&self, player_id: PlayerId, name: &str) -> Result<Player, DomainError>;

    /// Drop the player row and free its name. `false` when there was none.
    fn delete_player(&self, player_id: PlayerId) -> Result<bool, DomainError>;

    /// Seat a player in `game_id`, or unseat with `None`.
    fn set_membership(&self, player_id: PlayerId, game_id: Option<GameId>)
        -> Result<(), DomainError>;

    /// Seat a player in `game_id` only if they belong to no game yet.
    /// The check and the write happen atomically; a member of any game gets
    /// `ValidationKind::AlreadyInGame`.
    fn claim_membership(&self, player_id: PlayerId, game_id: GameId) -> Result<(), DomainError>;

    /// Players seated in `game_id`, in the order they joined.
    fn seated_players(&self, game_id: GameId) -> Result<Vec<Player>, DomainError>;

    fn require_player(&self, player_id: PlayerId) -> Result<Player, DomainError> {
        self.find_player(player_id)?.ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} not found"),
            )
        })
    }

    fn seated_player_names(&self, game_id: GameId) -> Result<Vec<String>, DomainError> {
        Ok(self
            .seated_players(game_id)?
            .into_iter()
            .map(|p| p.name)
            .collect())
    }
}
