//! Score ledger interface.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::{GameId, PlayerId};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub id: i64,
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub points: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

pub trait ScoreStore: Send + Sync {
    fn add_score(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        points: i32,
    ) -> Result<ScoreEntry, DomainError>;

    fn scores_for_game(&self, game_id: GameId) -> Result<Vec<ScoreEntry>, DomainError>;

    fn scores_for_player(&self, player_id: PlayerId) -> Result<Vec<ScoreEntry>, DomainError>;

    /// Every entry, oldest first.
    fn list_scores(&self) -> Result<Vec<ScoreEntry>, DomainError>;

    fn find_score(&self, score_id: i64) -> Result<Option<ScoreEntry>, DomainError>;

    fn delete_score(&self, score_id: i64) -> Result<bool, DomainError>;
}
