//! Player registration and lookup.

use std::sync::Arc;

use tracing::info;
use unicode_normalization::UnicodeNormalization;

use crate::domain::rules::MAX_PLAYER_NAME_CHARS;
use crate::domain::PlayerId;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::{Player, PlayerDirectory};

/// Trim and NFKC-normalize a display name.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().nfkc().collect::<String>()
}

fn validated_name(raw: &str) -> Result<String, DomainError> {
    let name = normalize_name(raw);
    let chars = name.chars().count();
    if chars == 0 || chars > MAX_PLAYER_NAME_CHARS {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerName,
            format!("Player name must be 1..={MAX_PLAYER_NAME_CHARS} characters, got {chars}"),
        ));
    }
    if name.chars().any(char::is_control) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerName,
            "Player name must not contain control characters",
        ));
    }
    Ok(name)
}

#[derive(Clone)]
pub struct PlayerService {
    players: Arc<dyn PlayerDirectory>,
}

impl PlayerService {
    pub fn new(players: Arc<dyn PlayerDirectory>) -> Self {
        Self { players }
    }

    /// Register a new player under a unique (case-insensitive) name.
    pub fn register(&self, raw_name: &str) -> Result<Player, DomainError> {
        let name = validated_name(raw_name)?;
        let player = self.players.create_player(&name)?;
        info!(player_id = player.id, "Player registered");
        Ok(player)
    }

    /// Change a player's display name. Same rules as registration.
    pub fn rename(&self, player_id: PlayerId, raw_name: &str) -> Result<Player, DomainError> {
        let name = validated_name(raw_name)?;
        let player = self.players.rename_player(player_id, &name)?;
        info!(player_id, "Player renamed");
        Ok(player)
    }

    pub fn find(&self, player_id: PlayerId) -> Result<Player, DomainError> {
        self.players.require_player(player_id)
    }

    pub fn find_by_name(&self, name: &str) -> Result<Option<Player>, DomainError> {
        self.players.find_player_by_name(&normalize_name(name))
    }

    pub fn list(&self) -> Result<Vec<Player>, DomainError> {
        self.players.list_players()
    }
}
