//! Game lifecycle: create, edit, seat, start, deal, end, delete.

use tracing::{info, warn};

use super::{rejected, DealOutcome, GameFlowService, HandView};
use crate::domain::{DeclarationState, GameId, GameStatus, PlayerId, TurnState};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::cards::Holder;
use crate::repos::{Game, GameCreate};

impl GameFlowService {
    /// Create a stopped game with a fresh standard deck in its pile.
    pub fn create_game(
        &self,
        title: &str,
        rules: Option<String>,
        max_players: Option<usize>,
    ) -> Result<Game, DomainError> {
        let max_players = max_players.unwrap_or(self.config.max_players);
        if max_players < self.config.min_players || max_players > self.config.max_players {
            return Err(DomainError::validation_other(format!(
                "max_players must be in {}..={}, got {max_players}",
                self.config.min_players, self.config.max_players
            )));
        }
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::validation_other("Game title must not be empty"));
        }

        let mut dto = GameCreate::new(title, max_players);
        if let Some(rules) = rules {
            dto = dto.with_rules(rules);
        }
        let game = self.games.create_game(dto)?;

        if let Err(err) = self.deck.seed_standard_deck(game.id) {
            if let Err(undo) = self.games.delete_game(game.id) {
                warn!(game_id = game.id, error = %undo, "Failed to remove half-created game");
            }
            return Err(err);
        }
        self.registry.open(game.id);

        info!(game_id = game.id, max_players, "Game created");
        Ok(game)
    }

    /// Change the title and/or house rules of a game that is not in
    /// progress. An empty `rules` string clears them.
    pub fn update_game(
        &self,
        game_id: GameId,
        title: Option<&str>,
        rules: Option<String>,
    ) -> Result<Game, DomainError> {
        self.registry.with_session(game_id, |_session| {
            let mut game = self.games.require_game(game_id)?;
            if game.status.is_active() {
                return Err(DomainError::validation(
                    ValidationKind::GameAlreadyStarted,
                    format!("Game {game_id} cannot be edited while in progress"),
                ));
            }
            if let Some(title) = title {
                let title = title.trim();
                if title.is_empty() {
                    return Err(DomainError::validation_other("Game title must not be empty"));
                }
                game.title = title.to_string();
            }
            if let Some(rules) = rules {
                game.rules = Some(rules).filter(|r| !r.trim().is_empty());
            }
            self.games.save_game(&game)?;
            info!(game_id, "Game updated");
            Ok(game)
        })
    }

    /// Seat `player_id` at the end of the game's seating order.
    pub fn join_game(&self, game_id: GameId, player_id: PlayerId) -> Result<Vec<String>, DomainError> {
        self.registry
            .with_session(game_id, |session| {
                let game = self.games.require_game(game_id)?;
                if game.status != GameStatus::Stopped {
                    return Err(DomainError::validation(
                        ValidationKind::GameAlreadyStarted,
                        format!("Game {game_id} is {}", game.status.as_str()),
                    ));
                }
                if session.turn.seated_count() >= game.max_players {
                    return Err(DomainError::validation(
                        ValidationKind::GameFull,
                        format!("Game {game_id} already seats {} players", game.max_players),
                    ));
                }

                let name = self.name_of(player_id)?;
                self.players.claim_membership(player_id, game_id)?;
                session.turn.seat(player_id);
                session.history.append(format!("{name} joined the game"));
                info!(game_id, player_id, "Player joined");

                self.players.seated_player_names(game_id)
            })
            .inspect_err(rejected("join_game", game_id, player_id))
    }

    /// Take `player_id` out of their game.
    ///
    /// Their hand goes back to the pile and their declaration is dropped.
    /// An active game left with fewer than the configured minimum stops with no winner.
    pub fn leave_game(&self, player_id: PlayerId) -> Result<GameId, DomainError> {
        let game_id = self.game_of(player_id)?;
        self.registry
            .with_session(game_id, |session| {
                let mut game = self.games.require_game(game_id)?;
                let name = self.name_of(player_id)?;

                let held: Vec<_> = self
                    .cards
                    .find_cards_held_by(player_id)?
                    .into_iter()
                    .map(|r| r.id)
                    .collect();
                self.cards.reassign_many(&held, Holder::Pile)?;
                self.players.set_membership(player_id, None)?;

                session.turn.unseat(player_id);
                session.declarations.clear(player_id);
                session.history.append(format!("{name} left the game"));

                if game.status.is_active() {
                    if session.turn.seated_count() < self.config.min_players {
                        game.status = GameStatus::Stopped;
                        game.owner = None;
                        session.history.append("game stopped: not enough players");
                        info!(game_id, "Game stopped after a player left");
                    } else if game.owner == Some(player_id) {
                        // The owner seeds the turn pointer, so it must stay seated
                        game.owner = session
                            .turn
                            .current_player()
                            .or_else(|| session.turn.seats().first().copied());
                    }
                    self.games.save_game(&game)?;
                }

                info!(game_id, player_id, returned = held.len(), "Player left");
                Ok(game_id)
            })
            .inspect_err(rejected("leave_game", game_id, player_id))
    }

    /// Start a fresh round with `player_id` as owner.
    ///
    /// All of the game's cards return to the pile and turn order, reversal
    /// parity and declarations are reset. Seating is kept.
    pub fn start_game(&self, game_id: GameId, player_id: PlayerId) -> Result<Game, DomainError> {
        self.registry
            .with_session(game_id, |session| {
                let mut game = self.games.require_game(game_id)?;
                if game.status.is_active() {
                    return Err(DomainError::validation(
                        ValidationKind::GameAlreadyStarted,
                        format!("Game {game_id} is already in progress"),
                    ));
                }
                Self::require_seated(session, player_id)?;
                let seated = session.turn.seated_count();
                if seated < self.config.min_players {
                    return Err(DomainError::validation(
                        ValidationKind::InsufficientPlayers,
                        format!(
                            "Starting needs {} players, {seated} seated",
                            self.config.min_players
                        ),
                    ));
                }

                let name = self.name_of(player_id)?;
                let mut out_of_pile: Vec<_> = self
                    .cards
                    .find_discarded_cards(game_id)?
                    .into_iter()
                    .map(|r| r.id)
                    .collect();
                for &seat in session.turn.seats() {
                    out_of_pile.extend(self.cards.find_cards_held_by(seat)?.into_iter().map(|r| r.id));
                }
                self.cards.reassign_many(&out_of_pile, Holder::Pile)?;

                game.status = GameStatus::InProgress;
                game.owner = Some(player_id);
                game.winner = None;
                game.discard_top = None;
                self.games.save_game(&game)?;

                session.turn = TurnState::new(session.turn.seats().to_vec());
                session.declarations = DeclarationState::new();
                session.history.append(format!("{name} started the game"));
                info!(game_id, player_id, seated, "Game started");
                Ok(game)
            })
            .inspect_err(rejected("start_game", game_id, player_id))
    }

    /// Deal the opening hands to every seated player, in seating order.
    pub fn deal(&self, game_id: GameId, hand_size: Option<usize>) -> Result<DealOutcome, DomainError> {
        let hand_size = hand_size.unwrap_or(self.config.hand_size);
        self.registry.with_session(game_id, |session| {
            self.require_active(game_id)?;
            let seats = session.turn.seats().to_vec();
            let names = seats
                .iter()
                .map(|&p| self.name_of(p))
                .collect::<Result<Vec<_>, _>>()?;
            let dealt = self
                .deck
                .deal_initial_hands(game_id, &seats, hand_size, &mut session.rng)?;

            let mut hands = Vec::with_capacity(dealt.len());
            for ((player_id, cards), name) in dealt.into_iter().zip(names) {
                let held = self.cards.find_cards_held_by(player_id)?.len();
                session.declarations.refresh(player_id, held);
                hands.push(HandView {
                    player_id,
                    name,
                    cards,
                    declared: session.declarations.has_declared(player_id),
                });
            }
            session
                .history
                .append(format!("dealt {hand_size} cards to each player"));
            Ok(DealOutcome { hand_size, hands })
        })
    }

    /// Stop an active game. Only its owner may do this.
    pub fn end_game(&self, game_id: GameId, player_id: PlayerId) -> Result<Game, DomainError> {
        self.registry
            .with_session(game_id, |session| {
                let game = self.require_active(game_id)?;
                if game.owner != Some(player_id) {
                    return Err(DomainError::validation(
                        ValidationKind::NotGameOwner,
                        format!("Player {player_id} does not own game {game_id}"),
                    ));
                }
                let name = self.name_of(player_id)?;
                let game = self.games.set_status(game_id, GameStatus::Stopped, None)?;
                session.history.append(format!("{name} ended the game"));
                info!(game_id, player_id, "Game ended by owner");
                Ok(game)
            })
            .inspect_err(rejected("end_game", game_id, player_id))
    }

    /// Delete a player. A seated player leaves their game first, so their
    /// hand goes back to its pile and the turn order stays valid.
    pub fn delete_player(&self, player_id: PlayerId) -> Result<(), DomainError> {
        let player = self.players.require_player(player_id)?;
        if player.game_id.is_some() {
            self.leave_game(player_id)?;
        }
        if !self.players.delete_player(player_id)? {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} not found"),
            ));
        }
        info!(player_id, "Player deleted");
        Ok(())
    }

    /// Remove the game, its cards and its session. Seated players are freed.
    pub fn delete_game(&self, game_id: GameId) -> Result<bool, DomainError> {
        let deleted = self.registry.with_session(game_id, |session| {
            for &seat in session.turn.seats() {
                self.players.set_membership(seat, None)?;
            }
            let removed = self.cards.delete_cards_for_game(game_id)?;
            let deleted = self.games.delete_game(game_id)?;
            info!(game_id, removed_cards = removed, "Game deleted");
            Ok(deleted)
        })?;
        self.registry.remove(game_id);
        Ok(deleted)
    }
}
