use tracing::{debug, info, warn};

use super::{rejected, GameFlowService, GameSession, PlayOutcome};
use crate::domain::history;
use crate::domain::{
    validate_play, validate_turn, Card, CardId, GameId, PlayContext, PlayerId, TurnEffect,
};
use crate::errors::domain::DomainError;
use crate::repos::cards::Holder;
use crate::repos::Game;
use crate::services::game_flow::DrawOutcome;

impl GameFlowService {
    /// Play `card` from `player_id`'s hand onto the discard pile.
    ///
    /// On success the card becomes the discard top, its turn effect is
    /// applied, the turn advances and a history entry is appended. Emptying
    /// the hand finishes the game with the player as winner.
    pub fn play_card(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        card: Card,
    ) -> Result<PlayOutcome, DomainError> {
        debug!(game_id, player_id, %card, "Playing card");
        self.registry
            .with_session(game_id, |session| {
                self.play_card_locked(session, game_id, player_id, card)
            })
            .inspect_err(rejected("play_card", game_id, player_id))
    }

    fn play_card_locked(
        &self,
        session: &mut GameSession,
        game_id: GameId,
        player_id: PlayerId,
        card: Card,
    ) -> Result<PlayOutcome, DomainError> {
        let game = self.require_active(game_id)?;
        Self::require_seated(session, player_id)?;
        let owner = Self::owner_of(&game)?;

        let hand = self.cards.hand_of(player_id)?;
        let top = self.card_at(game.discard_top)?;
        let ctx = PlayContext {
            hand: &hand,
            expected: session.turn.current_player(),
            top,
        };
        let card_id = validate_play(&ctx, player_id, card)?;

        // Stage the turn change so a failed write below leaves it untouched
        let mut turn = session.turn.clone();
        match card.face.effect() {
            TurnEffect::Skip => turn.activate_skip(),
            TurnEffect::Reverse => turn.activate_reverse(),
            TurnEffect::None => {}
        }
        // Opening play hands the turn to the owner whatever the pointer says
        let next = if top.is_none() {
            turn.seed(owner)?
        } else {
            turn.advance(owner)?
        };

        let actor_name = self.name_of(player_id)?;
        let next_name = self.name_of(next)?;

        self.cards.reassign_holder(card_id, Holder::Discard)?;
        if let Err(err) = self.games.set_discard_top(game_id, Some(card_id)) {
            self.return_card(game_id, card_id, player_id);
            return Err(err);
        }

        let remaining = hand.len() - 1;
        if remaining == 0 {
            // Winner and score land before the session moves on, or not at all
            if let Err(err) = self.persist_win(game_id, player_id) {
                self.undo_play(&game, card_id, player_id);
                return Err(err);
            }
        }

        session.turn = turn;
        session.history.append(history::played(&actor_name, card));
        session.declarations.refresh(player_id, remaining);
        info!(game_id, player_id, card_id, %card, next_player = next, "Card played");

        let winner = if remaining == 0 {
            session.history.append(history::won(&actor_name));
            info!(game_id, player_id, "Game won");
            Some(actor_name)
        } else {
            None
        };

        Ok(PlayOutcome {
            card,
            next_player: next_name,
            remaining,
            winner,
        })
    }

    fn persist_win(&self, game_id: GameId, winner: PlayerId) -> Result<(), DomainError> {
        self.games.set_game_finished(game_id, winner)?;
        self.scores.add_score(game_id, winner, 1)?;
        Ok(())
    }

    /// Put the game record back as it was before the play and return the
    /// card to its holder.
    fn undo_play(&self, before: &Game, card_id: CardId, player_id: PlayerId) {
        if let Err(undo) = self.games.save_game(before) {
            warn!(game_id = before.id, error = %undo, "Failed to restore game after aborted win");
        }
        self.return_card(before.id, card_id, player_id);
    }

    fn return_card(&self, game_id: GameId, card_id: CardId, player_id: PlayerId) {
        if let Err(undo) = self.cards.reassign_holder(card_id, Holder::Player(player_id)) {
            warn!(game_id, card_id, error = %undo, "Failed to return card after aborted play");
        }
    }

    /// Draw `count` cards for `player_id` and pass the turn.
    ///
    /// Unlike a play there is no free first move: an unseeded turn pointer
    /// is seeded to the owner first, so only the owner may draw then.
    pub fn buy_card(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        count: usize,
    ) -> Result<DrawOutcome, DomainError> {
        debug!(game_id, player_id, count, "Buying cards");
        self.registry
            .with_session(game_id, |session| {
                let game = self.require_active(game_id)?;
                Self::require_seated(session, player_id)?;
                let owner = Self::owner_of(&game)?;

                let mut turn = session.turn.clone();
                turn.seed_if_unset(owner)?;
                validate_turn(turn.current_player(), player_id)?;
                let next = turn.advance(owner)?;

                let actor_name = self.name_of(player_id)?;
                let next_name = self.name_of(next)?;
                let held = self.cards.find_cards_held_by(player_id)?.len();

                let drawn = self
                    .deck
                    .draw_from_pile(game_id, player_id, count, &mut session.rng)?;
                let cards: Vec<Card> = drawn.iter().map(|r| r.card).collect();

                session.turn = turn;
                session
                    .declarations
                    .refresh(player_id, held + cards.len());
                session.history.append(history::drew(&actor_name, &cards));
                info!(game_id, player_id, count = cards.len(), next_player = next, "Cards drawn");

                Ok(DrawOutcome {
                    cards,
                    next_player: next_name,
                })
            })
            .inspect_err(rejected("buy_card", game_id, player_id))
    }
}
