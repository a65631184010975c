//! In-memory adapter for the score ledger.

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use time::OffsetDateTime;

use crate::domain::{GameId, PlayerId};
use crate::errors::domain::DomainError;
use crate::repos::scores::{ScoreEntry, ScoreStore};

#[derive(Debug)]
pub struct MemoryScoreStore {
    rows: DashMap<i64, ScoreEntry>,
    next_id: AtomicI64,
}

impl Default for MemoryScoreStore {
    fn default() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_sorted(&self, pred: impl Fn(&ScoreEntry) -> bool) -> Vec<ScoreEntry> {
        let mut out: Vec<ScoreEntry> = self
            .rows
            .iter()
            .filter(|r| pred(r.value()))
            .map(|r| r.value().clone())
            .collect();
        out.sort_by_key(|s| s.id);
        out
    }
}

impl ScoreStore for MemoryScoreStore {
    fn add_score(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        points: i32,
    ) -> Result<ScoreEntry, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let entry = ScoreEntry {
            id,
            game_id,
            player_id,
            points,
            recorded_at: OffsetDateTime::now_utc(),
        };
        self.rows.insert(id, entry.clone());
        Ok(entry)
    }

    fn scores_for_game(&self, game_id: GameId) -> Result<Vec<ScoreEntry>, DomainError> {
        Ok(self.collect_sorted(|s| s.game_id == game_id))
    }

    fn scores_for_player(&self, player_id: PlayerId) -> Result<Vec<ScoreEntry>, DomainError> {
        Ok(self.collect_sorted(|s| s.player_id == player_id))
    }

    fn list_scores(&self) -> Result<Vec<ScoreEntry>, DomainError> {
        Ok(self.collect_sorted(|_| true))
    }

    fn find_score(&self, score_id: i64) -> Result<Option<ScoreEntry>, DomainError> {
        Ok(self.rows.get(&score_id).map(|r| r.value().clone()))
    }

    fn delete_score(&self, score_id: i64) -> Result<bool, DomainError> {
        Ok(self.rows.remove(&score_id).is_some())
    }
}
