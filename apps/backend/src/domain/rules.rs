//! Fixed game parameters.

/// Cards dealt to each player when no size is given.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Largest initial hand a deal accepts.
pub const MAX_HAND_SIZE: usize = 20;

/// Penalty drawn by a player caught holding one card without declaring.
pub const CHALLENGE_PENALTY: usize = 2;

/// Players needed before a game may start.
pub const MIN_PLAYERS: usize = 2;

/// Seat cap when a game is created without one.
pub const DEFAULT_MAX_PLAYERS: usize = 10;

/// Cards drawn by a plain draw action.
pub const DRAW_COUNT: usize = 1;

pub const MAX_PLAYER_NAME_CHARS: usize = 32;

pub fn valid_hand_size(hand_size: usize) -> bool {
    (1..=MAX_HAND_SIZE).contains(&hand_size)
}
