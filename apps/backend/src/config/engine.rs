//! Engine configuration read from the environment.

use std::env;
use std::str::FromStr;

use crate::domain::rules;
use crate::error::AppError;

/// Runtime knobs for the game engine and the HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub host: String,
    pub port: u16,
    /// Initial hand size used by `deal` when the caller gives none.
    pub hand_size: usize,
    /// Cards drawn by a successfully challenged player.
    pub penalty_cards: usize,
    pub min_players: usize,
    pub max_players: usize,
    /// Base seed for per-game RNGs. `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            hand_size: rules::DEFAULT_HAND_SIZE,
            penalty_cards: rules::CHALLENGE_PENALTY,
            min_players: rules::MIN_PLAYERS,
            max_players: rules::DEFAULT_MAX_PLAYERS,
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    /// Build from `UNO_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            host: env::var("UNO_HOST").unwrap_or(defaults.host),
            port: parse_var("UNO_PORT")?.unwrap_or(defaults.port),
            hand_size: parse_var("UNO_HAND_SIZE")?.unwrap_or(defaults.hand_size),
            penalty_cards: parse_var("UNO_PENALTY_CARDS")?.unwrap_or(defaults.penalty_cards),
            min_players: parse_var("UNO_MIN_PLAYERS")?.unwrap_or(defaults.min_players),
            max_players: parse_var("UNO_MAX_PLAYERS")?.unwrap_or(defaults.max_players),
            rng_seed: parse_var("UNO_RNG_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Same as the defaults but with a fixed base seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !rules::valid_hand_size(self.hand_size) {
            return Err(AppError::config(format!(
                "UNO_HAND_SIZE must be in 1..={}, got {}",
                rules::MAX_HAND_SIZE,
                self.hand_size
            )));
        }
        if self.penalty_cards == 0 {
            return Err(AppError::config("UNO_PENALTY_CARDS must be at least 1"));
        }
        if self.min_players < rules::MIN_PLAYERS {
            return Err(AppError::config(format!(
                "UNO_MIN_PLAYERS must be at least {}, got {}",
                rules::MIN_PLAYERS,
                self.min_players
            )));
        }
        if self.max_players < self.min_players {
            return Err(AppError::config(format!(
                "UNO_MAX_PLAYERS ({}) must not be below UNO_MIN_PLAYERS ({})",
                self.max_players, self.min_players
            )));
        }
        Ok(())
    }
}

/// Parse an optional variable. Unset is `Ok(None)`; set but malformed is an error.
fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' has an invalid value: '{raw}'"
            ))
        }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
