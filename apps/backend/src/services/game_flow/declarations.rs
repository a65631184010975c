use tracing::info;

use super::{rejected, ChallengeOutcome, GameFlowService};
use crate::domain::{history, Card, PlayerId};
use crate::errors::domain::DomainError;

impl GameFlowService {
    /// Record that `player_id` holds their last card.
    pub fn declare_last_card(&self, player_id: PlayerId) -> Result<(), DomainError> {
        let game_id = self.game_of(player_id)?;
        self.registry
            .with_session(game_id, |session| {
                self.require_active(game_id)?;
                Self::require_seated(session, player_id)?;

                let held = self.cards.find_cards_held_by(player_id)?.len();
                let name = self.name_of(player_id)?;
                session.declarations.declare(player_id, held)?;
                session.history.append(history::declared(&name));
                info!(game_id, player_id, "Last card declared");
                Ok(())
            })
            .inspect_err(rejected("declare_last_card", game_id, player_id))
    }

    /// Challenge `target_id` for holding one card without declaring.
    ///
    /// A successful challenge makes the target draw the penalty. The turn
    /// pointer does not move. When `challenger_id` is given it must sit in
    /// the same game.
    pub fn challenge(
        &self,
        target_id: PlayerId,
        challenger_id: Option<PlayerId>,
    ) -> Result<ChallengeOutcome, DomainError> {
        let game_id = self.game_of(target_id)?;
        self.registry
            .with_session(game_id, |session| {
                self.require_active(game_id)?;
                Self::require_seated(session, target_id)?;
                if let Some(challenger) = challenger_id {
                    Self::require_seated(session, challenger)?;
                }

                let held = self.cards.find_cards_held_by(target_id)?.len();
                session.declarations.check_challenge(target_id, held)?;
                let name = self.name_of(target_id)?;

                let drawn = self.deck.draw_from_pile(
                    game_id,
                    target_id,
                    self.config.penalty_cards,
                    &mut session.rng,
                )?;
                let penalty: Vec<Card> = drawn.iter().map(|r| r.card).collect();
                let hand_size = held + penalty.len();

                session.declarations.refresh(target_id, hand_size);
                session.history.append(history::penalty(&name, &penalty));
                info!(game_id, player_id = target_id, count = penalty.len(), "Challenge succeeded");

                Ok(ChallengeOutcome {
                    target: name,
                    penalty,
                    hand_size,
                })
            })
            .inspect_err(rejected("challenge", game_id, target_id))
    }
}
