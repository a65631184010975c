use std::sync::Arc;

use crate::config::engine::EngineConfig;
use crate::services::game_flow::GameFlowService;
use crate::services::players::PlayerService;
use crate::services::scores::ScoreService;
use crate::services::Stores;

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub flow: Arc<GameFlowService>,
    pub players: PlayerService,
    pub scores: ScoreService,
}

impl AppState {
    /// Build every service over the given stores.
    pub fn new(stores: Stores, config: EngineConfig) -> Self {
        Self {
            flow: Arc::new(GameFlowService::new(&stores, config)),
            players: PlayerService::new(Arc::clone(&stores.players)),
            scores: ScoreService::new(Arc::clone(&stores.scores), Arc::clone(&stores.players)),
        }
    }

    /// In-memory stores with the given configuration.
    pub fn in_memory(config: EngineConfig) -> Self {
        Self::new(Stores::in_memory(), config)
    }
}
