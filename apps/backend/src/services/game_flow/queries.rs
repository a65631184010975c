//! Read-side operations. Each takes the game's lock so it observes a state
//! between actions, never in the middle of one.

use super::{GameFlowService, GameSnapshot, HandView};
use crate::domain::{Card, GameId, GameStatus, HistoryEntry, PlayerId};
use crate::errors::domain::DomainError;
use crate::repos::Player;
use crate::services::sessions::GameSession;

impl GameFlowService {
    /// Name of the player to act. Before the first move this is the owner;
    /// before the game starts there is nobody.
    pub fn current_turn(&self, game_id: GameId) -> Result<Option<String>, DomainError> {
        self.registry.with_session(game_id, |session| {
            let game = self.games.require_game(game_id)?;
            match session.turn.current_player().or(game.owner) {
                Some(p) => Ok(Some(self.name_of(p)?)),
                None => Ok(None),
            }
        })
    }

    pub fn history(&self, game_id: GameId) -> Result<Vec<HistoryEntry>, DomainError> {
        self.registry
            .with_session(game_id, |session| Ok(session.history.entries().to_vec()))
    }

    /// Every seated player's hand, in seating order.
    pub fn hands(&self, game_id: GameId) -> Result<Vec<HandView>, DomainError> {
        self.registry
            .with_session(game_id, |session| self.hand_views(session))
    }

    pub fn hand_of(&self, player_id: PlayerId) -> Result<Vec<Card>, DomainError> {
        self.players.require_player(player_id)?;
        Ok(self
            .cards
            .find_cards_held_by(player_id)?
            .into_iter()
            .map(|r| r.card)
            .collect())
    }

    pub fn top_card(&self, game_id: GameId) -> Result<Option<Card>, DomainError> {
        self.registry.with_session(game_id, |_| {
            let top = self.games.game_discard_top(game_id)?;
            self.card_at(top)
        })
    }

    pub fn game_status(&self, game_id: GameId) -> Result<GameStatus, DomainError> {
        Ok(self.games.require_game(game_id)?.status)
    }

    pub fn players_in_game(&self, game_id: GameId) -> Result<Vec<Player>, DomainError> {
        self.games.require_game(game_id)?;
        self.players.seated_players(game_id)
    }

    pub fn snapshot(&self, game_id: GameId) -> Result<GameSnapshot, DomainError> {
        self.registry.with_session(game_id, |session| {
            let game = self.games.require_game(game_id)?;
            let name = |p: Option<PlayerId>| -> Result<Option<String>, DomainError> {
                p.map(|id| self.name_of(id)).transpose()
            };

            Ok(GameSnapshot {
                game_id,
                title: game.title.clone(),
                rules: game.rules.clone(),
                status: game.status,
                owner: name(game.owner)?,
                current_player: name(session.turn.current_player().or(game.owner))?,
                top_card: self.card_at(game.discard_top)?,
                direction: session.turn.direction(),
                pile_size: self.cards.find_unassigned_cards(game_id)?.len(),
                hands: self.hand_views(session)?,
                winner: name(game.winner)?,
                history: session.history.entries().to_vec(),
            })
        })
    }

    fn hand_views(&self, session: &GameSession) -> Result<Vec<HandView>, DomainError> {
        session
            .turn
            .seats()
            .iter()
            .map(|&player_id| {
                Ok(HandView {
                    player_id,
                    name: self.name_of(player_id)?,
                    cards: self.hand_of(player_id)?,
                    declared: session.declarations.has_declared(player_id),
                })
            })
            .collect()
    }
}
