pub mod deck;
pub mod game_flow;
pub mod players;
pub mod scores;
pub mod sessions;

use std::sync::Arc;

use crate::adapters::{
    MemoryCardStore, MemoryGameDirectory, MemoryPlayerDirectory, MemoryScoreStore,
};
use crate::repos::{CardStore, GameDirectory, PlayerDirectory, ScoreStore};

/// The collaborators every service is built from.
#[derive(Clone)]
pub struct Stores {
    pub cards: Arc<dyn CardStore>,
    pub games: Arc<dyn GameDirectory>,
    pub players: Arc<dyn PlayerDirectory>,
    pub scores: Arc<dyn ScoreStore>,
}

impl Stores {
    pub fn in_memory() -> Self {
        Self {
            cards: Arc::new(MemoryCardStore::new()),
            games: Arc::new(MemoryGameDirectory::new()),
            players: Arc::new(MemoryPlayerDirectory::new()),
            scores: Arc::new(MemoryScoreStore::new()),
        }
    }
}
