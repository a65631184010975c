use serde::Serialize;

use crate::domain::{Card, Direction, GameId, GameStatus, HistoryEntry, PlayerId};

/// Result of a successful play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayOutcome {
    pub card: Card,
    /// Player whose turn is now active.
    pub next_player: String,
    pub remaining: usize,
    /// Set when the play emptied the hand.
    pub winner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawOutcome {
    pub cards: Vec<Card>,
    pub next_player: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeOutcome {
    pub target: String,
    pub penalty: Vec<Card>,
    pub hand_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealOutcome {
    pub hand_size: usize,
    pub hands: Vec<HandView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandView {
    pub player_id: PlayerId,
    pub name: String,
    pub cards: Vec<Card>,
    pub declared: bool,
}

/// Read model of a whole game at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub title: String,
    pub rules: Option<String>,
    pub status: GameStatus,
    pub owner: Option<String>,
    pub current_player: Option<String>,
    pub top_card: Option<Card>,
    pub direction: Direction,
    pub pile_size: usize,
    pub hands: Vec<HandView>,
    pub winner: Option<String>,
    pub history: Vec<HistoryEntry>,
}
