//! "Last card" declarations and challenges, scoped to one game.

use std::collections::HashSet;

use crate::domain::PlayerId;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationState {
    declared: HashSet<PlayerId>,
}

impl DeclarationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_declared(&self, player: PlayerId) -> bool {
        self.declared.contains(&player)
    }

    /// Record a declaration. Only a player holding exactly one card may declare.
    pub fn declare(&mut self, player: PlayerId, hand_size: usize) -> Result<(), DomainError> {
        if hand_size != 1 {
            return Err(DomainError::validation(
                ValidationKind::TooManyCards,
                format!("Declaring the last card needs exactly one card, holding {hand_size}"),
            ));
        }
        self.declared.insert(player);
        Ok(())
    }

    /// Decide whether `target` is open to a challenge penalty.
    pub fn check_challenge(&self, target: PlayerId, hand_size: usize) -> Result<(), DomainError> {
        if self.has_declared(target) && hand_size == 1 {
            return Err(DomainError::validation(
                ValidationKind::AlreadyDeclared,
                format!("Player {target} already declared their last card"),
            ));
        }
        if hand_size != 1 {
            return Err(DomainError::validation(
                ValidationKind::NotEligible,
                format!("Player {target} holds {hand_size} cards"),
            ));
        }
        Ok(())
    }

    /// Drop a stale declaration once the hand is no longer exactly one card.
    pub fn refresh(&mut self, player: PlayerId, hand_size: usize) {
        if hand_size != 1 {
            self.declared.remove(&player);
        }
    }

    pub fn clear(&mut self, player: PlayerId) {
        self.declared.remove(&player);
    }
}
