//! Raw score accumulation. No scoring algorithm beyond summing points.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{GameId, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::{PlayerDirectory, ScoreEntry, ScoreStore};

fn score_not_found(score_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Score, format!("Score {score_id} not found"))
}

#[derive(Clone)]
pub struct ScoreService {
    scores: Arc<dyn ScoreStore>,
    players: Arc<dyn PlayerDirectory>,
}

impl ScoreService {
    pub fn new(scores: Arc<dyn ScoreStore>, players: Arc<dyn PlayerDirectory>) -> Self {
        Self { scores, players }
    }

    pub fn record_score(
        &self,
        player_id: PlayerId,
        game_id: GameId,
        points: i32,
    ) -> Result<ScoreEntry, DomainError> {
        self.players.require_player(player_id)?;
        let entry = self.scores.add_score(game_id, player_id, points)?;
        debug!(game_id, player_id, points, "Score recorded");
        Ok(entry)
    }

    /// Summed points per player name for one game. Entries of deleted
    /// players are left out.
    pub fn scores_for_game(&self, game_id: GameId) -> Result<BTreeMap<String, i64>, DomainError> {
        let mut totals = BTreeMap::new();
        for entry in self.scores.scores_for_game(game_id)? {
            let Some(player) = self.players.find_player(entry.player_id)? else {
                continue;
            };
            *totals.entry(player.name).or_insert(0) += i64::from(entry.points);
        }
        Ok(totals)
    }

    pub fn list_scores(&self) -> Result<Vec<ScoreEntry>, DomainError> {
        self.scores.list_scores()
    }

    pub fn find_score(&self, score_id: i64) -> Result<ScoreEntry, DomainError> {
        self.scores
            .find_score(score_id)?
            .ok_or_else(|| score_not_found(score_id))
    }

    pub fn delete_score(&self, score_id: i64) -> Result<(), DomainError> {
        if !self.scores.delete_score(score_id)? {
            return Err(score_not_found(score_id));
        }
        debug!(score_id, "Score deleted");
        Ok(())
    }

    pub fn total_for_player(&self, player_id: PlayerId) -> Result<i64, DomainError> {
        self.players.require_player(player_id)?;
        Ok(self
            .scores
            .scores_for_player(player_id)?
            .iter()
            .map(|s| i64::from(s.points))
            .sum())
    }
}
