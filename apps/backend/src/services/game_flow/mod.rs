//! Round Controller: every player-visible game action, end to end.
//!
//! Each mutating action runs inside its game's session lock and follows the
//! same shape: load and check, stage turn changes on a copy, persist card
//! ownership, then commit the staged turn state and history.

mod declarations;
mod lifecycle;
mod outcomes;
mod player_actions;
mod queries;

use std::sync::Arc;

use tracing::warn;

use crate::config::engine::EngineConfig;
use crate::domain::{Card, CardId, GameId, PlayerId};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::repos::{CardStore, Game, GameDirectory, PlayerDirectory, ScoreStore};
use crate::services::deck::DeckManager;
use crate::services::sessions::{GameRegistry, GameSession};
use crate::services::Stores;

pub use outcomes::{
    ChallengeOutcome, DealOutcome, DrawOutcome, GameSnapshot, HandView, PlayOutcome,
};

pub struct GameFlowService {
    cards: Arc<dyn CardStore>,
    games: Arc<dyn GameDirectory>,
    players: Arc<dyn PlayerDirectory>,
    scores: Arc<dyn ScoreStore>,
    deck: DeckManager,
    registry: GameRegistry,
    config: EngineConfig,
}

impl GameFlowService {
    pub fn new(stores: &Stores, config: EngineConfig) -> Self {
        Self {
            cards: Arc::clone(&stores.cards),
            games: Arc::clone(&stores.games),
            players: Arc::clone(&stores.players),
            scores: Arc::clone(&stores.scores),
            deck: DeckManager::new(Arc::clone(&stores.cards), Arc::clone(&stores.games)),
            registry: GameRegistry::new(config.rng_seed),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn deck(&self) -> &DeckManager {
        &self.deck
    }

    /// Number of games with a live session.
    pub fn session_count(&self) -> usize {
        self.registry.len()
    }

    pub fn list_games(&self) -> Result<Vec<Game>, DomainError> {
        self.games.list_games()
    }

    fn require_active(&self, game_id: GameId) -> Result<Game, DomainError> {
        let game = self.games.require_game(game_id)?;
        if !game.status.is_active() {
            return Err(DomainError::validation(
                ValidationKind::GameNotActive,
                format!("Game {game_id} is {}", game.status.as_str()),
            ));
        }
        Ok(game)
    }

    fn require_seated(session: &GameSession, player_id: PlayerId) -> Result<(), DomainError> {
        if session.turn.is_seated(player_id) {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::PlayerNotSeated,
                format!(
                    "Player {player_id} is not seated in game {}",
                    session.game_id
                ),
            ))
        }
    }

    /// Owner of an active game. An active game without one is corrupt.
    fn owner_of(game: &Game) -> Result<PlayerId, DomainError> {
        game.owner.ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Active game {} has no owner", game.id),
            )
        })
    }

    /// Game the player currently belongs to.
    fn game_of(&self, player_id: PlayerId) -> Result<GameId, DomainError> {
        self.players.require_player(player_id)?.game_id.ok_or_else(|| {
            DomainError::validation(
                ValidationKind::PlayerNotSeated,
                format!("Player {player_id} is not in a game"),
            )
        })
    }

    fn name_of(&self, player_id: PlayerId) -> Result<String, DomainError> {
        Ok(self.players.require_player(player_id)?.name)
    }

    fn card_at(&self, card_id: Option<CardId>) -> Result<Option<Card>, DomainError> {
        let Some(id) = card_id else {
            return Ok(None);
        };
        let record = self.cards.find_card(id)?.ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Discard top {id} has no card record"),
            )
        })?;
        Ok(Some(record.card))
    }
}

/// Log a rejected action before handing it back to the caller.
fn rejected(action: &'static str, game_id: GameId, player_id: PlayerId) -> impl Fn(&DomainError) {
    move |err| warn!(action, game_id, player_id, error = %err, "Action rejected")
}
