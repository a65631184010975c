//! Error codes for the Uno backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Turn and play rules
    NotYourTurn,
    CardNotOwned,
    IllegalPlay,
    InsufficientCards,
    EmptyDeck,
    TooManyCards,
    AlreadyDeclared,
    NotEligible,
    PlayerNotSeated,
    GameNotActive,

    // Lifecycle rules
    GameAlreadyStarted,
    InsufficientPlayers,
    NotGameOwner,
    AlreadyInGame,
    GameFull,
    InvalidHandSize,
    InvalidPlayerName,
    ParseCard,

    // Request validation
    ValidationError,
    BadRequest,

    // Resource not found
    GameNotFound,
    PlayerNotFound,
    CardNotFound,
    ScoreNotFound,
    NotFound,

    // Conflicts
    PlayerNameTaken,
    Conflict,

    // System errors
    StoreUnavailable,
    StoreTimeout,
    DataCorruption,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::CardNotOwned => "CARD_NOT_OWNED",
            Self::IllegalPlay => "ILLEGAL_PLAY",
            Self::InsufficientCards => "INSUFFICIENT_CARDS",
            Self::EmptyDeck => "EMPTY_DECK",
            Self::TooManyCards => "TOO_MANY_CARDS",
            Self::AlreadyDeclared => "ALREADY_DECLARED",
            Self::NotEligible => "NOT_ELIGIBLE",
            Self::PlayerNotSeated => "PLAYER_NOT_SEATED",
            Self::GameNotActive => "GAME_NOT_ACTIVE",

            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::InsufficientPlayers => "INSUFFICIENT_PLAYERS",
            Self::NotGameOwner => "NOT_GAME_OWNER",
            Self::AlreadyInGame => "ALREADY_IN_GAME",
            Self::GameFull => "GAME_FULL",
            Self::InvalidHandSize => "INVALID_HAND_SIZE",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::ParseCard => "PARSE_CARD",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::CardNotFound => "CARD_NOT_FOUND",
            Self::ScoreNotFound => "SCORE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::PlayerNameTaken => "PLAYER_NAME_TAKEN",
            Self::Conflict => "CONFLICT",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::StoreTimeout => "STORE_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
