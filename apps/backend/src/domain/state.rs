use serde::Serialize;

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Created (or ended by its owner) and not accepting plays.
    Stopped,
    /// Started; plays and draws are accepted.
    InProgress,
    /// A player emptied their hand.
    Finished,
}

impl GameStatus {
    pub fn is_active(self) -> bool {
        self == GameStatus::InProgress
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Stopped => "stopped",
            GameStatus::InProgress => "in_progress",
            GameStatus::Finished => "finished",
        }
    }
}

/// Effective turn direction, derived from the reversal parity.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Reversed,
}

impl Direction {
    pub fn from_parity(reversals: u32) -> Self {
        if reversals % 2 == 0 {
            Direction::Forward
        } else {
            Direction::Reversed
        }
    }
}
